use api::Activity;
use dioxus::prelude::*;

use crate::activities::{participant_rows, refresh_activities, use_activities, ActivityListState};
use crate::auth::use_auth;
use crate::client::{use_client, use_config};
use crate::icons::FaXmark;
use crate::message::{flash_notice, use_flash};
use crate::Icon;

/// The list of activity cards, rebuilt from the latest fetch on every render.
#[component]
pub fn ActivityList() -> Element {
    let auth = use_auth();
    let activities = use_activities();
    let flash = use_flash();
    let client = use_client();
    let hide_after = use_config().messages.hide_after();

    let on_unregister = use_callback(move |(activity, email): (String, String)| {
        let client = client.clone();
        spawn(async move {
            let session = auth().session;
            match client.unregister(session.as_ref(), &activity, &email).await {
                Ok(notice) => {
                    flash_notice(flash, notice, hide_after);
                    tracing::debug!("Unregistered {} from {}, refreshing activities", email, activity);
                    refresh_activities(&client, activities).await;
                }
                Err(notice) => flash_notice(flash, notice, hide_after),
            }
        });
    });

    let authenticated = auth().is_authenticated();

    match activities() {
        ActivityListState::Loading => rsx! {
            div {
                id: "activities-list",
                p { "Loading activities..." }
            }
        },
        ActivityListState::Failed(text) => rsx! {
            div {
                id: "activities-list",
                p { "{text}" }
            }
        },
        ActivityListState::Ready(book) => rsx! {
            div {
                id: "activities-list",
                for activity in book.iter() {
                    ActivityCard {
                        key: "{activity.name}",
                        activity: activity.clone(),
                        authenticated: authenticated,
                        on_unregister: on_unregister,
                    }
                }
            }
        },
    }
}

#[component]
pub fn ActivityCard(
    activity: Activity,
    authenticated: bool,
    on_unregister: EventHandler<(String, String)>,
) -> Element {
    let rows = participant_rows(&activity, authenticated);
    let spots_left = activity.spots_left();

    rsx! {
        div {
            class: "activity-card",
            h4 { "{activity.name}" }
            p { "{activity.description}" }
            p {
                strong { "Schedule:" }
                " {activity.schedule}"
            }
            p {
                strong { "Availability:" }
                " {spots_left} spots left"
            }
            div {
                class: "participants-container",
                if rows.is_empty() {
                    p { em { "No participants yet" } }
                } else {
                    div {
                        class: "participants-section",
                        h5 { "Participants:" }
                        ul {
                            class: "participants-list",
                            for row in rows {
                                li {
                                    key: "{row.email}",
                                    span { class: "participant-email", "{row.email}" }
                                    if row.removable {
                                        button {
                                            class: "delete-btn",
                                            title: "Unregister {row.email}",
                                            onclick: {
                                                let activity_name = activity.name.clone();
                                                let email = row.email.clone();
                                                move |_| on_unregister.call((activity_name.clone(), email.clone()))
                                            },
                                            Icon { icon: FaXmark, width: 12, height: 12 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
