//! # Session token persistence
//!
//! The portal keeps exactly one piece of client state across page loads: the
//! opaque session token handed out by `POST /login`. [`TokenStore`] is the seam
//! between the controller and wherever that token lives. Implementations are
//! synchronous because browser local storage is.
//!
//! | Implementation | Where |
//! |----------------|-------|
//! | [`crate::MemoryTokenStore`] | Tests and native builds |
//! | [`crate::LocalTokenStore`] | Browser `localStorage` (wasm + `web` feature) |

/// Storage for the current session token.
///
/// Implementations never fail loudly: an unreadable store behaves like an
/// empty one, and writes to an unavailable store are dropped.
pub trait TokenStore {
    /// The stored token, if any.
    fn load(&self) -> Option<String>;
    /// Replace the stored token.
    fn save(&self, token: &str);
    /// Forget the stored token.
    fn clear(&self);
}
