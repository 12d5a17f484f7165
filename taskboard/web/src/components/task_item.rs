use dioxus::prelude::*;
use taskboard_core::{Task, TaskId};

/// One row of the task list with its remove button
#[component]
pub fn TaskItem(task: Task, on_remove: EventHandler<TaskId>) -> Element {
    let id = task.id();

    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-4 flex justify-between items-start",
            div { class: "space-y-1",
                p { class: "text-gray-900 whitespace-pre-wrap", "{task.description()}" }
                span { class: "text-sm text-gray-500", "Creada: {task.created_on()}" }
            }
            button {
                class: "text-2xl text-gray-400 hover:text-red-600 transition-colors ml-4",
                aria_label: "Eliminar tarea",
                onclick: move |_| on_remove.call(id),
                "×"
            }
        }
    }
}
