use dioxus::prelude::*;

use crate::client::use_config;
use crate::login_modal::use_login_handoff;
use crate::{ActivityList, LoginModal, MessageBanner, Navbar, SignupForm, UserMenu};

const PORTAL_CSS: Asset = asset!("/assets/styling/portal.css");

/// The single page of the portal. Must be rendered inside [`crate::PortalProvider`].
#[component]
pub fn Home() -> Element {
    let config = use_config();
    let mut login_open = use_signal(|| false);
    let on_logged_in = use_login_handoff(login_open);

    rsx! {
        document::Stylesheet { href: PORTAL_CSS }

        Navbar {
            title: config.page.title.clone(),
            subtitle: config.page.subtitle.clone(),
            UserMenu { on_login: move |_| login_open.set(true) }
        }

        main {
            section {
                id: "activities-container",
                h3 { "Available Activities" }
                ActivityList {}
            }
            section {
                id: "signup-container",
                h3 { "Sign Up a Student" }
                SignupForm {}
                MessageBanner {}
            }
        }

        if login_open() {
            LoginModal {
                on_close: move |_| login_open.set(false),
                on_logged_in: on_logged_in,
            }
        }

        footer {
            p { "© {config.page.title}" }
        }
    }
}
