//! # Local-storage token store — browser-side persistence
//!
//! [`LocalTokenStore`] is the [`TokenStore`] used on the **web platform**. It
//! keeps the session token under a single `window.localStorage` key (default
//! `"sessionToken"`, see [`crate::config::SessionConfig`]) so a reload can
//! resume the session after `GET /auth/check` confirms it.
//!
//! ## Error handling
//!
//! Local storage can be missing (no `window`), disabled (privacy modes) or
//! full. All trait methods swallow those errors: reads return `None`, writes do
//! nothing. The page then degrades to an anonymous session instead of failing.

use crate::token::TokenStore;

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
