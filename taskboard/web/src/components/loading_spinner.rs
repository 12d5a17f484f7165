use dioxus::prelude::*;

/// Spinner shown while a request is in flight
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "text-center py-12", role: "status",
            div { class: "inline-block animate-spin rounded-full h-10 w-10 border-4 border-purple-200 border-t-purple-600" }
            p { class: "mt-4 text-gray-600", "{message}" }
        }
    }
}
