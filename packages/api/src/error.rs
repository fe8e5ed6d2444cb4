use thiserror::Error;

/// Errors produced while talking to the activities backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `detail` carries the
    /// server's `detail` string when it sent one.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The request never produced a usable response: connection failure,
    /// unreadable or unexpected body.
    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// The server-provided detail string, if this is a rejection that had one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_only_for_rejections() {
        let rejected = ApiError::Rejected {
            status: 400,
            detail: Some("Student is already signed up".into()),
        };
        assert_eq!(rejected.detail(), Some("Student is already signed up"));
        assert_eq!(rejected.to_string(), "request rejected with status 400");

        let bare = ApiError::Rejected { status: 500, detail: None };
        assert_eq!(bare.detail(), None);

        assert_eq!(ApiError::Transport("connection refused".into()).detail(), None);
    }
}
