//! # Backend — the REST API as seen by the portal
//!
//! [`Backend`] is the seam between the page controller ([`crate::SignupClient`])
//! and the network. [`HttpBackend`] is the production implementation on top of
//! `reqwest` (which compiles to `fetch` on wasm32); tests substitute an
//! in-memory backend.
//!
//! ## Response handling
//!
//! | Response | Result |
//! |----------|--------|
//! | 2xx with the expected JSON | `Ok(body)` |
//! | non-2xx with a JSON body | `Err(ApiError::Rejected { status, detail })` |
//! | connection failure, unreadable body | `Err(ApiError::Transport(..))` |
//!
//! `check_auth` is the exception: it decodes the body whatever the status, so
//! an error body (no `authenticated` flag) reads as "not authenticated".

use std::future::Future;

use serde::de::DeserializeOwned;
use store::ActivityBook;

use crate::endpoints;
use crate::models::{AuthCheck, ErrorBody, LoginReply, MessageReply};
use crate::ApiError;

/// Async operations offered by the activities backend.
pub trait Backend {
    /// `GET /activities`
    fn activities(&self) -> impl Future<Output = Result<ActivityBook, ApiError>>;

    /// `GET /auth/check?session_token=`
    fn check_auth(&self, token: &str) -> impl Future<Output = Result<AuthCheck, ApiError>>;

    /// `POST /login?username=&password=`
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginReply, ApiError>>;

    /// `POST /logout?session_token=`
    fn logout(&self, token: &str) -> impl Future<Output = Result<MessageReply, ApiError>>;

    /// `POST /activities/{activity}/signup?email=&session_token=`
    fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> impl Future<Output = Result<MessageReply, ApiError>>;

    /// `DELETE /activities/{activity}/unregister?email=&session_token=`
    fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> impl Future<Output = Result<MessageReply, ApiError>>;
}

/// `reqwest`-backed [`Backend`].
#[derive(Clone, Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend rooted at `base_url` (e.g. `"http://localhost:8000"`).
    ///
    /// The URL is validated per request; a bad base surfaces as
    /// [`ApiError::InvalidBaseUrl`] from every operation.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Decode a success body or turn a non-success status into [`ApiError::Rejected`].
async fn accept<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let body: ErrorBody = response.json().await?;
    Err(ApiError::Rejected {
        status: status.as_u16(),
        detail: body.detail_text(),
    })
}

impl Backend for HttpBackend {
    async fn activities(&self) -> Result<ActivityBook, ApiError> {
        let url = endpoints::activities(&self.base_url)?;
        let response = self.http.get(url).send().await?;
        accept(response).await
    }

    async fn check_auth(&self, token: &str) -> Result<AuthCheck, ApiError> {
        let url = endpoints::auth_check(&self.base_url, token)?;
        let response = self.http.get(url).send().await?;
        Ok(response.json::<AuthCheck>().await?)
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginReply, ApiError> {
        let url = endpoints::login(&self.base_url, username, password)?;
        let response = self.http.post(url).send().await?;
        accept(response).await
    }

    async fn logout(&self, token: &str) -> Result<MessageReply, ApiError> {
        let url = endpoints::logout(&self.base_url, token)?;
        let response = self.http.post(url).send().await?;
        accept(response).await
    }

    async fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageReply, ApiError> {
        let url = endpoints::signup(&self.base_url, activity, email, token)?;
        let response = self.http.post(url).send().await?;
        accept(response).await
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageReply, ApiError> {
        let url = endpoints::unregister(&self.base_url, activity, email, token)?;
        let response = self.http.delete(url).send().await?;
        accept(response).await
    }
}
