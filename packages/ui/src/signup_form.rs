use dioxus::prelude::*;

use crate::activities::{refresh_activities, use_activities};
use crate::auth::use_auth;
use crate::client::{use_client, use_config};
use crate::message::{flash_notice, use_flash};

/// Form for registering a student. Hidden while anonymous; submitting without
/// a session shows an error and sends nothing.
#[component]
pub fn SignupForm() -> Element {
    let auth = use_auth();
    let activities = use_activities();
    let flash = use_flash();
    let client = use_client();
    let hide_after = use_config().messages.hide_after();
    let mut email = use_signal(String::new);
    let mut activity = use_signal(String::new);

    let names = activities().activity_names();
    let authenticated = auth().is_authenticated();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            let session = auth().session;
            match client.signup(session.as_ref(), &activity(), &email()).await {
                Ok(notice) => {
                    flash_notice(flash, notice, hide_after);
                    email.set(String::new());
                    activity.set(String::new());
                    tracing::debug!("Signup accepted, refreshing activities");
                    refresh_activities(&client, activities).await;
                }
                Err(notice) => flash_notice(flash, notice, hide_after),
            }
        }
    };

    rsx! {
        form {
            id: "signup-form",
            class: if authenticated { "signup-form" } else { "signup-form hidden" },
            onsubmit: onsubmit,
            div {
                class: "form-group",
                label { "Student Email:" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "your-email@mergington.edu",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                class: "form-group",
                label { "Activity:" }
                select {
                    id: "activity",
                    required: true,
                    value: activity(),
                    onchange: move |evt: FormEvent| activity.set(evt.value()),
                    option { value: "", "-- Select an activity --" }
                    for name in names {
                        option {
                            key: "{name}",
                            value: "{name}",
                            "{name}"
                        }
                    }
                }
            }
            button { r#type: "submit", "Sign Up" }
        }
    }
}
