//! This crate contains all UI for the sign-up portal.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, use_client, use_config, AppClient, AppTokens, DEFAULT_BASE_URL};

mod timer;

pub mod views;
pub use views::Home;

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_auth, AuthState, PortalProvider};

pub mod activities;
pub use activities::{refresh_activities, use_activities, ActivityListState};

mod activity_list;
pub use activity_list::{ActivityCard, ActivityList};

mod signup_form;
pub use signup_form::SignupForm;

mod user_menu;
pub use user_menu::UserMenu;

mod login_modal;
pub use login_modal::{use_login_handoff, LoginModal};

pub mod message;
pub use message::{flash_notice, use_flash, Flash, MessageBanner};

#[cfg(test)]
mod testing;
