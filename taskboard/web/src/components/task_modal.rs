use crate::hooks::use_escape_to_close;
use dioxus::prelude::*;
use taskboard_core::TaskForm;

/// Modal collecting the description of a new task.
///
/// Renders `form`; the parent opens it with `TaskForm::show` and decides what
/// to do with the trimmed text handed to `on_add_task`.
#[component]
pub fn TaskModal(
    form: Signal<TaskForm>,
    on_add_task: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = form;
    use_escape_to_close(form, on_close);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = form.write().submit();
        match submitted {
            Ok(description) => on_add_task.call(description),
            Err(e) => tracing::debug!(error = %e, "rejected task submission"),
        }
    };

    let handle_input = move |evt: FormEvent| {
        form.write().set_description(evt.value());
    };

    let current = form.read();
    if !current.is_visible() {
        return rsx! {};
    }

    let error = current.error().map(|e| e.to_string());
    let textarea_border = if error.is_some() {
        "border-red-500 focus:ring-red-500"
    } else {
        "border-gray-300 focus:ring-purple-500"
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "flex justify-between items-center mb-4",
                    h2 { class: "text-2xl font-bold text-gray-900", "Agregar Nueva Tarea" }
                    button {
                        r#type: "button",
                        class: "text-2xl text-gray-500 hover:text-gray-800",
                        aria_label: "Cerrar modal",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                form { onsubmit: handle_submit,
                    div { class: "mb-4",
                        label {
                            r#for: "task-description",
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Descripción de la tarea"
                        }
                        textarea {
                            id: "task-description",
                            placeholder: "Escribe la descripción de tu tarea...",
                            rows: 4,
                            value: "{current.description()}",
                            oninput: handle_input,
                            class: "w-full px-4 py-2 border rounded-lg focus:ring-2 focus:border-transparent {textarea_border}",
                            autofocus: true,
                            onmounted: move |evt| async move {
                                let _ = evt.set_focus(true).await;
                            },
                        }
                    }

                    if let Some(error_msg) = error {
                        div { class: "mb-4 text-red-600 text-sm", "{error_msg}" }
                    }

                    div { class: "flex space-x-3",
                        button {
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            class: "flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                            "Cancelar"
                        }
                        button {
                            r#type: "submit",
                            class: "flex-1 px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors font-medium",
                            "Agregar Tarea"
                        }
                    }
                }
            }
        }
    }
}
