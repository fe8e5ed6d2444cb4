//! # Session models
//!
//! ## [`Session`]
//!
//! What the client holds after a successful login or token check: the opaque
//! token (sent back as the `session_token` query parameter on every mutating
//! request) and the username shown in the user menu.
//!
//! ## Wire bodies
//!
//! - [`LoginReply`] — `POST /login` success: `{ "session_token", "username" }`.
//! - [`AuthCheck`] — `GET /auth/check`: `{ "authenticated", "username"? }`. A body
//!   without the flag decodes as not authenticated.

use serde::{Deserialize, Serialize};

/// An authenticated session as held by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginReply {
    pub session_token: String,
    pub username: String,
}

impl From<LoginReply> for Session {
    fn from(reply: LoginReply) -> Self {
        Session::new(reply.session_token, reply.username)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthCheck {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

impl AuthCheck {
    /// The confirmed session for `token`, if the check succeeded.
    pub fn into_session(self, token: &str) -> Option<Session> {
        if !self.authenticated {
            return None;
        }
        Some(Session::new(token, self.username.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_check_decoding() {
        let ok: AuthCheck =
            serde_json::from_str(r#"{"authenticated": true, "username": "mrodriguez"}"#).unwrap();
        assert_eq!(
            ok.into_session("tok"),
            Some(Session::new("tok", "mrodriguez"))
        );

        let no: AuthCheck = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert_eq!(no.into_session("tok"), None);

        // An error body has no flag at all
        let err: AuthCheck = serde_json::from_str(r#"{"detail": "boom"}"#).unwrap();
        assert!(!err.authenticated);
    }

    #[test]
    fn test_login_reply_becomes_session() {
        let reply: LoginReply =
            serde_json::from_str(r#"{"session_token": "abc-123", "username": "teacher"}"#)
                .unwrap();
        let session = Session::from(reply);
        assert_eq!(session.token, "abc-123");
        assert_eq!(session.username, "teacher");
    }
}
