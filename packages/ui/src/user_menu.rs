//! User button and dropdown in the page header.

use dioxus::prelude::*;

use crate::activities::{refresh_activities, use_activities};
use crate::auth::{use_auth, AuthState};
use crate::client::use_client;
use crate::icons::FaRightFromBracket;
use crate::Icon;

/// The user button opens the login modal when anonymous and toggles the user
/// dropdown when authenticated.
#[component]
pub fn UserMenu(on_login: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let activities = use_activities();
    let client = use_client();
    let mut menu_open = use_signal(|| false);

    let state = auth();
    let label = state.user_button_label();

    let on_user_click = move |evt: MouseEvent| {
        evt.stop_propagation();
        if auth().is_authenticated() {
            let open = menu_open();
            menu_open.set(!open);
        } else {
            on_login.call(());
        }
    };

    let on_logout = move |_| {
        let client = client.clone();
        async move {
            let session = auth().session;
            client.logout(session.as_ref()).await;
            menu_open.set(false);
            auth.set(AuthState::anonymous());
            tracing::debug!("Session cleared, refreshing activities");
            // Refresh so the removal controls disappear
            refresh_activities(&client, activities).await;
        }
    };

    rsx! {
        div {
            class: "user-menu",
            button {
                id: "user-btn",
                class: "user-btn",
                disabled: state.loading,
                onclick: on_user_click,
                "{label}"
            }
            if let Some(username) = state.username() {
                div {
                    id: "user-menu-dropdown",
                    class: if menu_open() { "user-menu-dropdown" } else { "user-menu-dropdown hidden" },
                    p {
                        "Logged in as "
                        strong { id: "logged-in-user", "{username}" }
                    }
                    button {
                        id: "logout-btn",
                        class: "logout-btn",
                        onclick: on_logout,
                        Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                        " Logout"
                    }
                }
            }
        }
    }
}
