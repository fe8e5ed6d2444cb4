//! Context and sample data for component render tests.

use api::{Activity, Session};
use dioxus::prelude::*;
use dioxus_core::VirtualDom;
use store::{ActivityBook, ActivityDetails, ClientConfig};

use crate::activities::ActivityListState;
use crate::auth::AuthState;
use crate::client::make_client;
use crate::message::Flash;

pub fn chess_club() -> Activity {
    ActivityDetails {
        description: "Learn strategies and compete in chess tournaments".into(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
        max_participants: 12,
        participants: vec!["michael@mergington.edu".into(), "daniel@mergington.edu".into()],
    }
    .named("Chess Club")
}

pub fn art_club() -> Activity {
    ActivityDetails {
        description: "Explore your creativity".into(),
        schedule: "Thursdays, 3:30 PM - 5:00 PM".into(),
        max_participants: 15,
        participants: vec![],
    }
    .named("Art Club")
}

pub fn auth_state(signed_in: bool) -> AuthState {
    if signed_in {
        AuthState::signed_in(Session::new("tok", "mrodriguez"))
    } else {
        AuthState::anonymous()
    }
}

/// Provide the contexts `PortalProvider` would, without its startup fetch.
pub fn provide_portal_context(auth: AuthState, list: ActivityListState) {
    let config = ClientConfig::default().with_base_url("not a url");
    use_context_provider(|| make_client(&config));
    use_context_provider(|| config.clone());
    use_context_provider(|| Signal::new(auth));
    use_context_provider(|| Signal::new(list));
    use_context_provider(|| Signal::new(Flash::default()));
}

pub fn ready(activities: Vec<Activity>) -> ActivityListState {
    ActivityListState::Ready(ActivityBook::new(activities))
}

/// Build `dom` once and return its HTML.
pub fn render(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
