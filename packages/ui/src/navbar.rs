use dioxus::prelude::*;

#[component]
pub fn Navbar(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-titles",
                h1 { "{title}" }
                h2 { "{subtitle}" }
            }
            {children}
        }
    }
}
