//! Login modal for teachers.

use api::client::LOGIN_SUCCEEDED;
use api::{Notice, Session};
use dioxus::prelude::*;

use crate::activities::{refresh_activities, use_activities};
use crate::auth::{use_auth, AuthState};
use crate::client::{use_client, use_config};
use crate::icons::FaXmark;
use crate::timer::sleep;
use crate::Icon;

/// Finish a login from the scope that owns the modal.
///
/// The returned callback waits for the configured pause, closes the modal and
/// switches the page to the new session, then refreshes the list. The task
/// belongs to the caller's scope, so closing the modal early does not cancel it.
pub fn use_login_handoff(mut login_open: Signal<bool>) -> Callback<Session> {
    let client = use_client();
    let mut auth = use_auth();
    let activities = use_activities();
    let close_after = use_config().messages.login_close_after();

    use_callback(move |session: Session| {
        let client = client.clone();
        spawn(async move {
            sleep(close_after).await;
            login_open.set(false);
            tracing::debug!("Switching page to session for {}", session.username);
            auth.set(AuthState::signed_in(session));
            refresh_activities(&client, activities).await;
        });
    })
}

/// Mounted only while open, so every opening starts with an empty form and no
/// message.
///
/// A successful login shows "Login successful!" and hands the session to
/// `on_logged_in` straight away; the owner decides when the modal goes.
/// Clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn LoginModal(on_close: EventHandler<()>, on_logged_in: EventHandler<Session>) -> Element {
    let client = use_client();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(|| Option::<Notice>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            submitting.set(true);
            match client.login(&username(), &password()).await {
                Ok(session) => {
                    message.set(Some(Notice::success(LOGIN_SUCCEEDED)));
                    on_logged_in.call(session);
                }
                Err(notice) => {
                    message.set(Some(notice));
                    submitting.set(false);
                }
            }
        }
    };

    rsx! {
        div {
            id: "login-modal",
            class: "modal",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { "Teacher Login" }
                    button {
                        id: "close-modal-btn",
                        class: "close-btn",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                form {
                    id: "login-form",
                    onsubmit: onsubmit,
                    div {
                        class: "form-group",
                        label { "Username:" }
                        input {
                            id: "username",
                            r#type: "text",
                            required: true,
                            autocomplete: "username",
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Password:" }
                        input {
                            id: "password",
                            r#type: "password",
                            required: true,
                            autocomplete: "current-password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        "Login"
                    }
                }
                if let Some(notice) = message() {
                    div {
                        id: "login-message",
                        class: "message {notice.css_class()}",
                        "{notice.text}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus_core::{NoOpMutations, VirtualDom};
    use store::ClientConfig;

    use super::*;
    use crate::testing::{auth_state, provide_portal_context, ready, render};
    use crate::PortalProvider;

    #[component]
    fn ModalHarness() -> Element {
        provide_portal_context(auth_state(false), ready(vec![]));
        rsx! {
            LoginModal { on_close: move |_| {}, on_logged_in: move |_| {} }
        }
    }

    #[test]
    fn test_modal_opens_with_empty_form_and_no_message() {
        let html = render(VirtualDom::new(ModalHarness));
        assert!(html.contains(r#"id="login-modal""#));
        assert!(html.contains("close-modal-btn"));
        assert!(html.contains("modal-content"));
        assert!(!html.contains("login-message"));
    }

    /// Pause short enough for a test, long enough to close the modal first.
    fn quick_config() -> ClientConfig {
        let mut config = ClientConfig::default().with_base_url("not a url");
        config.messages.login_close_after_ms = 50;
        config
    }

    #[component]
    fn ClosesEarly(on_close: EventHandler<()>, on_logged_in: EventHandler<Session>) -> Element {
        use_hook(move || {
            on_logged_in.call(Session::new("tok", "mrodriguez"));
            spawn(async move {
                sleep(Duration::from_millis(10)).await;
                on_close.call(());
            });
        });
        rsx! { div { id: "login-modal" } }
    }

    #[component]
    fn Page() -> Element {
        let auth = use_auth();
        let mut login_open = use_signal(|| true);
        let handoff = use_login_handoff(login_open);

        rsx! {
            p { id: "user", "{auth().user_button_label()}" }
            if login_open() {
                ClosesEarly {
                    on_close: move |_| login_open.set(false),
                    on_logged_in: handoff,
                }
            }
        }
    }

    fn app() -> Element {
        rsx! {
            PortalProvider { config: quick_config(), Page {} }
        }
    }

    #[tokio::test]
    async fn test_handoff_survives_closing_the_modal() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        let settled = tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
                if dioxus_ssr::render(&dom).contains("mrodriguez") {
                    break;
                }
            }
        })
        .await;

        assert!(settled.is_ok(), "page never switched to the session");
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("login-modal"));
    }
}
