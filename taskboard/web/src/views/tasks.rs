use crate::components::{BackLink, TaskItem, TaskModal};
use crate::state::use_task_store;
use dioxus::prelude::*;
use taskboard_core::{TaskForm, TaskId};

/// Task management page: list, remove, and add through the modal.
#[component]
pub fn Tasks() -> Element {
    let mut store = use_task_store();
    let mut form = use_signal(TaskForm::new);

    let handle_add_task = move |description: String| {
        let id = store.write().create(description);
        tracing::info!(%id, "task created");
        form.write().hide();
    };

    let snapshot = store.read().select_all();

    rsx! {
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-3xl mx-auto px-6 space-y-6",
                div { class: "flex justify-between items-center",
                    BackLink {}
                    h1 { class: "text-3xl font-bold text-gray-900", "Gestión de Tareas" }
                    button {
                        class: "bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors",
                        onclick: move |_| form.write().show(),
                        "+ Agregar Nueva Tarea"
                    }
                }

                if snapshot.is_empty() {
                    div { class: "text-center py-12 text-gray-600",
                        p { "No hay tareas creadas. ¡Agrega tu primera tarea!" }
                    }
                } else {
                    div { class: "space-y-3",
                        {snapshot.tasks().iter().map(|task| rsx! {
                            TaskItem {
                                key: "{task.id()}",
                                task: task.clone(),
                                on_remove: move |id: TaskId| store.write().delete(&id),
                            }
                        })}
                    }
                }

                TaskModal {
                    form,
                    on_add_task: handle_add_task,
                    on_close: move |_| form.write().hide(),
                }
            }
        }
    }
}
