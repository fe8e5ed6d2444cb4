use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success body of logout, signup and unregister: `{ "message": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageReply {
    #[serde(default)]
    pub message: String,
}

/// Error body: `{ "detail": ... }`.
///
/// `detail` is a plain string for the backend's own rejections but a list of
/// objects for request validation errors, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// The detail when it is a non-empty string.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_shown() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
        assert_eq!(body.detail_text().as_deref(), Some("Activity not found"));
    }

    #[test]
    fn test_structured_or_missing_detail_is_hidden() {
        let validation: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#,
        )
        .unwrap();
        assert_eq!(validation.detail_text(), None);

        let empty: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(empty.detail_text(), None);

        let blank: ErrorBody = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert_eq!(blank.detail_text(), None);
    }
}
