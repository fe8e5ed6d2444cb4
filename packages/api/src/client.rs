//! # SignupClient — the page controller without the page
//!
//! [`SignupClient`] implements every portal action over a [`Backend`] and a
//! [`TokenStore`], and turns each outcome into the [`Notice`] the page shows.
//! It holds no authentication state of its own: the UI owns the current
//! [`Session`] and passes it in, so a Dioxus signal stays the single source of
//! truth for what is rendered.
//!
//! | Action | Network | Token store |
//! |--------|---------|-------------|
//! | [`restore_session`](SignupClient::restore_session) | `check_auth` when a token is stored | cleared when the check says "not authenticated" |
//! | [`login`](SignupClient::login) | `login` | saved on success only |
//! | [`logout`](SignupClient::logout) | `logout`, failures ignored | always cleared |
//! | [`activities`](SignupClient::activities) | `activities` | — |
//! | [`signup`](SignupClient::signup) / [`unregister`](SignupClient::unregister) | only with a session | — |

use store::{ActivityBook, TokenStore};

use crate::backend::Backend;
use crate::models::Session;
use crate::notice::Notice;
use crate::ApiError;

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_ERROR: &str = "Login error. Please try again.";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_REQUIRES_LOGIN: &str = "You must be logged in to register students";
pub const UNREGISTER_REQUIRES_LOGIN: &str = "You must be logged in to unregister students";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
pub const GENERIC_REJECTION: &str = "An error occurred";

/// Orchestrates the portal's actions over a backend and a token store.
#[derive(Clone, Debug)]
pub struct SignupClient<B, S> {
    backend: B,
    tokens: S,
}

impl<B: Backend, S: TokenStore> SignupClient<B, S> {
    pub fn new(backend: B, tokens: S) -> Self {
        Self { backend, tokens }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Resume the session left in the token store by a previous visit.
    ///
    /// A token the backend no longer recognises is removed. A token that could
    /// not be checked (network failure) is kept for the next load, but this
    /// load stays anonymous.
    pub async fn restore_session(&self) -> Option<Session> {
        let token = self.tokens.load()?;
        match self.backend.check_auth(&token).await {
            Ok(check) => match check.into_session(&token) {
                Some(session) => {
                    tracing::info!("Resumed session for {}", session.username);
                    Some(session)
                }
                None => {
                    tracing::warn!("Stored session token was rejected, discarding it");
                    self.tokens.clear();
                    None
                }
            },
            Err(e) => {
                tracing::error!("Error checking auth: {}", e);
                None
            }
        }
    }

    /// Submit credentials. On success the token is stored before returning.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, Notice> {
        match self.backend.login(username, password).await {
            Ok(reply) => {
                let session = Session::from(reply);
                self.tokens.save(&session.token);
                tracing::info!("Logged in as {}", session.username);
                Ok(session)
            }
            Err(ApiError::Rejected { detail, .. }) => {
                Err(Notice::error(detail.unwrap_or_else(|| LOGIN_FAILED.to_string())))
            }
            Err(e) => {
                tracing::error!("Error logging in: {}", e);
                Err(Notice::error(LOGIN_ERROR))
            }
        }
    }

    /// End the session. The server is told when a session is held, but the
    /// local token is cleared whatever the server says.
    pub async fn logout(&self, session: Option<&Session>) {
        if let Some(session) = session {
            if let Err(e) = self.backend.logout(&session.token).await {
                tracing::warn!("Error logging out: {}", e);
            }
        }
        self.tokens.clear();
        tracing::info!("Logged out");
    }

    /// Fetch the full activity set.
    pub async fn activities(&self) -> Result<ActivityBook, Notice> {
        self.backend.activities().await.map_err(|e| {
            tracing::error!("Error fetching activities: {}", e);
            Notice::error(LOAD_FAILED)
        })
    }

    /// Register `email` for `activity`. Without a session no request is made.
    pub async fn signup(
        &self,
        session: Option<&Session>,
        activity: &str,
        email: &str,
    ) -> Result<Notice, Notice> {
        let Some(session) = session else {
            return Err(Notice::error(SIGNUP_REQUIRES_LOGIN));
        };
        let result = self.backend.signup(activity, email, &session.token).await;
        action_notice(result, SIGNUP_FAILED)
    }

    /// Remove `email` from `activity`. Without a session no request is made.
    pub async fn unregister(
        &self,
        session: Option<&Session>,
        activity: &str,
        email: &str,
    ) -> Result<Notice, Notice> {
        let Some(session) = session else {
            return Err(Notice::error(UNREGISTER_REQUIRES_LOGIN));
        };
        let result = self
            .backend
            .unregister(activity, email, &session.token)
            .await;
        action_notice(result, UNREGISTER_FAILED)
    }
}

fn action_notice(
    result: Result<crate::models::MessageReply, ApiError>,
    transport_failure: &str,
) -> Result<Notice, Notice> {
    match result {
        Ok(reply) => Ok(Notice::success(reply.message)),
        Err(ApiError::Rejected { detail, .. }) => Err(Notice::error(
            detail.unwrap_or_else(|| GENERIC_REJECTION.to_string()),
        )),
        Err(e) => {
            tracing::error!("{}: {}", transport_failure, e);
            Err(Notice::error(transport_failure))
        }
    }
}
