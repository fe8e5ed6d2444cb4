//! Authentication context and the provider that wires up the portal.

use api::Session;
use dioxus::prelude::*;
use store::ClientConfig;

use crate::activities::{refresh_activities, ActivityListState};
use crate::client::make_client;
use crate::message::Flash;

/// Authentication state for the page.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored token (if any) has been checked.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            session: None,
            loading: false,
        }
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    /// Label for the user button.
    pub fn user_button_label(&self) -> String {
        match self.username() {
            Some(name) => format!("👤 {name}"),
            None => "👤 Login".to_string(),
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component for the whole portal.
///
/// Provides the config, the client, the auth state, the activity list and the
/// main message area as context. On mount it checks the stored session token
/// and then loads the activities, whatever the check returned.
#[component]
pub fn PortalProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_context_provider(|| make_client(&config));
    use_context_provider(|| config.clone());
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));
    let activities = use_context_provider(|| Signal::new(ActivityListState::default()));
    use_context_provider(|| Signal::new(Flash::default()));

    use_future(move || {
        let client = client.clone();
        async move {
            let session = client.restore_session().await;
            auth_state.set(AuthState {
                session,
                loading: false,
            });
            refresh_activities(&client, activities).await;
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading_and_anonymous() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert_eq!(state.user_button_label(), "👤 Login");
    }

    #[test]
    fn test_signed_in_label_shows_username() {
        let state = AuthState::signed_in(Session::new("t", "mrodriguez"));
        assert!(state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(state.username(), Some("mrodriguez"));
        assert_eq!(state.user_button_label(), "👤 mrodriguez");
    }

    #[test]
    fn test_anonymous_resets_everything() {
        let state = AuthState::anonymous();
        assert_eq!(state.session, None);
        assert!(!state.loading);
        assert_eq!(state.username(), None);
    }
}
