//! # Client configuration — `signup.toml`
//!
//! Defines the TOML file embedded in the web binary that tells the portal where
//! the backend lives, which local-storage key holds the session token, and how
//! long transient messages stay on screen.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""                  # empty = page origin (browser) / localhost (native)
//!
//! [session]
//! storage_key = "sessionToken"
//!
//! [messages]
//! hide_after_ms = 5000
//! login_close_after_ms = 1000
//!
//! [page]
//! title = "Mergington High School"
//! subtitle = "Extracurricular Activities"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`SessionConfig`] | Local-storage key for the session token. |
//! | [`MessagesConfig`] | Auto-hide delay for action messages and the login success pause. |
//! | [`PageConfig`] | Header text. |
//!
//! Every section derives `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `signup.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub page: PageConfig,
}

/// Backend location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the REST paths are joined onto.
    /// Empty string means "same origin as the page".
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Local-storage key holding the session token.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// How long a signup/unregister message stays visible.
    #[serde(default = "default_hide_after_ms")]
    pub hide_after_ms: u32,
    /// Pause between "Login successful!" and closing the login modal.
    #[serde(default = "default_login_close_after_ms")]
    pub login_close_after_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_storage_key() -> String {
    "sessionToken".to_string()
}

fn default_hide_after_ms() -> u32 {
    5000
}

fn default_login_close_after_ms() -> u32 {
    1000
}

fn default_title() -> String {
    "Mergington High School".to_string()
}

fn default_subtitle() -> String {
    "Extracurricular Activities".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            hide_after_ms: default_hide_after_ms(),
            login_close_after_ms: default_login_close_after_ms(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

impl MessagesConfig {
    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(u64::from(self.hide_after_ms))
    }

    pub fn login_close_after(&self) -> Duration {
        Duration::from_millis(u64::from(self.login_close_after_ms))
    }
}

impl ClientConfig {
    /// Builder method to point the client at a specific backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "signup.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
