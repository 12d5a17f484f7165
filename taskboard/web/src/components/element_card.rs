use dioxus::prelude::*;
use taskboard_core::ListingElement;

/// Card for a single remote listing element
#[component]
pub fn ElementCard(element: ListingElement) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-6 hover:shadow-lg transition-shadow flex items-center gap-4",
            Avatar { element: element.clone() }

            div { class: "space-y-1",
                h3 { class: "text-xl font-semibold text-gray-900", "{element.name}" }
                if let Some(created_on) = element.created_on() {
                    p { class: "text-sm text-gray-600", "Creado: {created_on}" }
                }
                span { class: "text-xs text-gray-400", "ID: {element.id}" }
            }
        }
    }
}

/// Avatar image, falling back to the name's initial when missing or broken.
#[component]
fn Avatar(element: ListingElement) -> Element {
    let mut broken = use_signal(|| false);
    let initial = element.initial().unwrap_or_default();
    let name = element.name;

    rsx! {
        div { class: "w-16 h-16 flex-shrink-0",
            if let Some(src) = element.avatar.filter(|_| !broken()) {
                img {
                    src: "{src}",
                    alt: "Avatar de {name}",
                    class: "w-16 h-16 rounded-full object-cover",
                    onerror: move |_| {
                        tracing::debug!("avatar failed to load, showing initial");
                        broken.set(true);
                    },
                }
            } else {
                div { class: "w-16 h-16 rounded-full bg-purple-600 text-white text-2xl font-bold flex items-center justify-center",
                    "{initial}"
                }
            }
        }
    }
}
