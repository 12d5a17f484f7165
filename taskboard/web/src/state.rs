//! Client-side shared state for Taskboard.
//!
//! The task store lives in a single signal provided at the root, so every view
//! reads the same snapshot and re-renders when it changes. Nothing here is
//! persisted: a reload starts with an empty list.

use dioxus::prelude::*;
use taskboard_core::TaskStore;

/// Installs the session task store as context. Call once, from the root component.
pub fn provide_task_store() -> Signal<TaskStore> {
    use_context_provider(|| {
        let mut store = TaskStore::new();
        store.subscribe(|state| tracing::debug!(tasks = state.len(), "task store updated"));
        Signal::new(store)
    })
}

/// Convenience hook for accessing the shared task store.
///
/// Reading through the returned signal subscribes the calling component;
/// mutations go through `store.write().create(..)` / `.delete(..)`.
pub fn use_task_store() -> Signal<TaskStore> {
    use_context::<Signal<TaskStore>>()
}
