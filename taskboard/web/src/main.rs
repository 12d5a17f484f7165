use dioxus::prelude::*;

mod components;
mod hooks;
mod state;
mod views;

use taskboard_core::{ApiConfig, ListingClient};
use views::{Home, Listing, NotFound, Tasks};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/tasks")]
    Tasks {},
    #[route("/listing")]
    Listing {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    // The web launcher installs the tracing logger
    dioxus::launch(App);
}

/// Root component. Owns the session-wide task store and the listing client so every
/// view mounted by the router shares them.
#[component]
fn App() -> Element {
    state::provide_task_store();
    use_context_provider(|| {
        let config = ApiConfig::resolve();
        tracing::info!(api_url = %config.api_url, "listing endpoint configured");
        ListingClient::from_config(&config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        Router::<Route> {}
    }
}
