use crate::components::BackLink;
use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        main { class: "min-h-screen bg-gray-50 py-16",
            div { class: "max-w-xl mx-auto px-6 text-center space-y-4",
                h1 { class: "text-4xl font-bold text-gray-900", "Página no encontrada" }
                p { class: "text-gray-600", "No existe nada en /{path}" }
                BackLink {}
            }
        }
    }
}
