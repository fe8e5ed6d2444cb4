//! The main message area below the signup form.

use std::time::Duration;

use api::Notice;
use dioxus::prelude::*;

use crate::timer::sleep;

/// The notice currently shown, tagged with a generation so a pending hide
/// timer only clears the notice it was started for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flash {
    notice: Option<Notice>,
    generation: u64,
}

impl Flash {
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Show `notice`, returning the generation to pass to [`Flash::hide`].
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation += 1;
        self.notice = Some(notice);
        self.generation
    }

    /// Hide the notice if it is still the one shown at `generation`.
    pub fn hide(&mut self, generation: u64) {
        if self.generation == generation {
            self.notice = None;
        }
    }
}

pub fn use_flash() -> Signal<Flash> {
    use_context::<Signal<Flash>>()
}

/// Show `notice` in the message area and hide it after `hide_after`.
pub fn flash_notice(mut flash: Signal<Flash>, notice: Notice, hide_after: Duration) {
    tracing::debug!("Showing {:?} message: {}", notice.level, notice.text);
    let generation = flash.write().show(notice);
    spawn(async move {
        sleep(hide_after).await;
        flash.write().hide(generation);
    });
}

#[component]
pub fn MessageBanner() -> Element {
    let flash = use_flash();
    let state = flash();

    match state.notice() {
        Some(notice) => rsx! {
            div {
                id: "message",
                class: "message {notice.css_class()}",
                "{notice.text}"
            }
        },
        None => rsx! {
            div { id: "message", class: "message hidden" }
        },
    }
}
