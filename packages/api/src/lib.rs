//! # API crate — the activities backend as seen from the browser
//!
//! Everything the portal needs to talk to the REST backend, independent of
//! any UI framework, so the whole login/sign-up flow can be tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`endpoints`] | Absolute, percent-encoded URLs for each backend operation |
//! | [`backend`] | The [`Backend`] trait and its `reqwest` implementation [`HttpBackend`] |
//! | [`client`] | [`SignupClient`], which runs each portal action and produces the [`Notice`] to show |
//! | [`models`] | JSON bodies (`LoginReply`, `AuthCheck`, `MessageReply`, `ErrorBody`) and the client-side [`Session`] |
//! | [`notice`] | User-visible success/error messages |
//!
//! Activity records themselves live in the `store` crate and are re-exported
//! here for convenience.

pub mod backend;
pub mod client;
pub mod endpoints;
mod error;
pub mod models;
pub mod notice;

pub use backend::{Backend, HttpBackend};
pub use client::SignupClient;
pub use error::ApiError;
pub use models::Session;
pub use notice::{Notice, NoticeLevel};

pub use store::{Activity, ActivityBook};
