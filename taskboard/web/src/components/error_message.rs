use dioxus::prelude::*;

/// Error panel for a failed load, with a retry button
#[component]
pub fn ErrorMessage(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "bg-red-50 border border-red-200 rounded-lg p-6 text-center space-y-3",
            h3 { class: "text-lg font-semibold text-red-700", "Error al cargar los datos" }
            p { class: "text-red-600", "{message}" }
            button {
                class: "bg-red-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-red-700 transition-colors",
                onclick: move |_| on_retry.call(()),
                "Reintentar"
            }
        }
    }
}
