use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and native fallback.
///
/// Clones share the same slot, so a test can keep a handle and inspect what the
/// controller stored.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if left over from a previous visit.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert!(MemoryTokenStore::new().load().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemoryTokenStore::new();
        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.save("def");
        assert_eq!(store.load().as_deref(), Some("def"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = MemoryTokenStore::with_token("shared");
        let handle = store.clone();
        store.clear();
        assert!(handle.load().is_none());
        handle.save("again");
        assert_eq!(store.load().as_deref(), Some("again"));
    }
}
