//! Wire models for the backend's JSON bodies.

pub mod reply;
pub mod session;

pub use reply::{ErrorBody, MessageReply};
pub use session::{AuthCheck, LoginReply, Session};
