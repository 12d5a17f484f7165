use crate::components::{BackLink, ElementCard, ErrorMessage, LoadingSpinner};
use dioxus::prelude::*;
use taskboard_core::{FetchPhase, ListingClient, ListingState};

/// Remote listing page with manual refresh.
#[component]
pub fn Listing() -> Element {
    let client = use_context::<ListingClient>();
    let mut listing = use_signal(ListingState::new);

    // Single entry point for mount, refresh and retry. `begin_fetch` refuses to
    // start while a request is in flight, so at most one is ever outstanding.
    let refresh = use_callback(move |()| {
        if !listing.write().begin_fetch() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            let outcome = client.fetch_elements().await;
            listing.write().finish(outcome);
        });
    });

    // Load elements on component mount
    use_effect(move || refresh.call(()));

    let state = listing();

    rsx! {
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-6xl mx-auto px-6 space-y-6",
                div { class: "flex justify-between items-center",
                    BackLink {}
                    h1 { class: "text-3xl font-bold text-gray-900", "Listado de Elementos" }
                    button {
                        class: "bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !state.can_refresh(),
                        onclick: move |_| refresh.call(()),
                        "🔄 Actualizar"
                    }
                }

                if matches!(state.phase(), FetchPhase::Idle | FetchPhase::Loading) {
                    LoadingSpinner { message: "Cargando elementos...".to_string() }
                } else if let Some(error_msg) = state.error() {
                    ErrorMessage {
                        message: error_msg.to_string(),
                        on_retry: move |_| refresh.call(()),
                    }
                } else if state.is_empty() {
                    div { class: "text-center py-12 text-gray-600",
                        p { "No se encontraron elementos." }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        {state.elements().iter().map(|element| rsx! {
                            ElementCard { key: "{element.id}", element: element.clone() }
                        })}
                    }
                }
            }
        }
    }
}
