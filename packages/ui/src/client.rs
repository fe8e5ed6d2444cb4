//! Shared client constructor for all platforms.
//!
//! Returns an [`api::SignupClient`] over [`api::HttpBackend`] and the
//! appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalTokenStore`]
//! - **Native** (tests, tooling): process memory via [`store::MemoryTokenStore`]

use dioxus::prelude::*;
use store::ClientConfig;

/// Backend used natively when the config leaves `base_url` empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppTokens = store::LocalTokenStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppTokens = store::MemoryTokenStore;

/// The client type every component talks to.
pub type AppClient = api::SignupClient<api::HttpBackend, AppTokens>;

/// Create the platform-appropriate client for `config`.
pub fn make_client(config: &ClientConfig) -> AppClient {
    let backend = api::HttpBackend::new(base_url(config));
    api::SignupClient::new(backend, make_token_store(config))
}

/// Get the client provided by [`crate::PortalProvider`].
pub fn use_client() -> AppClient {
    use_context::<AppClient>()
}

/// Get the configuration provided by [`crate::PortalProvider`].
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// The configured base URL, or the page origin when none is configured.
fn base_url(config: &ClientConfig) -> String {
    if !config.api.base_url.is_empty() {
        return config.api.base_url.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    DEFAULT_BASE_URL.to_string()
}

fn make_token_store(config: &ClientConfig) -> AppTokens {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalTokenStore::new(config.session.storage_key.clone())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = config;
        store::MemoryTokenStore::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_url_wins() {
        let config = ClientConfig::default().with_base_url("https://school.example");
        assert_eq!(make_client(&config).backend().base_url(), "https://school.example");
    }

    #[test]
    fn test_empty_base_url_falls_back_to_localhost() {
        let client = make_client(&ClientConfig::default());
        assert_eq!(client.backend().base_url(), DEFAULT_BASE_URL);
    }
}
