use dioxus::prelude::*;

use store::ClientConfig;
use ui::{Home, PortalProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Old bookmarks point at the static page
    #[redirect("/static/index.html", || Route::Home {})]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// `signup.toml`, baked into the build.
const CLIENT_CONFIG: &str = include_str!("../signup.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults when it is broken.
fn load_config(text: &str) -> ClientConfig {
    match ClientConfig::from_toml(text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}: {}, using defaults", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(CLIENT_CONFIG));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{config.page.title}" }

        PortalProvider {
            config: config.clone(),
            Router::<Route> {}
        }
    }
}
