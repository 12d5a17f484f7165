use crate::Route;
use dioxus::prelude::*;

/// Landing page linking to both sections.
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "min-h-screen bg-gradient-to-br from-purple-600 to-blue-600 text-white py-16 px-6",
            div { class: "max-w-4xl mx-auto text-center",
                h1 { class: "text-5xl font-bold mb-6", "Task Management App" }
                p { class: "text-xl mb-12", "Bienvenido a la aplicación de gestión de tareas" }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    NavCard {
                        to: Route::Tasks {},
                        title: "Gestión de Tareas",
                        description: "Administra y crea nuevas tareas",
                    }
                    NavCard {
                        to: Route::Listing {},
                        title: "Listado de Elementos",
                        description: "Ver datos desde fuente remota",
                    }
                }
            }
        }
    }
}

#[component]
fn NavCard(to: Route, title: String, description: String) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-white text-purple-700 rounded-lg shadow-lg p-8 hover:bg-gray-100 transition-colors",
            h3 { class: "text-2xl font-semibold mb-2", "{title}" }
            p { class: "text-gray-600", "{description}" }
        }
    }
}
