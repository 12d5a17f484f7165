use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn BackLink() -> Element {
    rsx! {
        Link {
            to: Route::Home {},
            class: "text-purple-600 hover:text-purple-800 font-medium",
            "← Volver al inicio"
        }
    }
}
