//! Core state and domain logic for Taskboard: the task store, the add-task form
//! and the remote listing fetch lifecycle. Free of any UI framework.
pub mod config;
pub mod date;
pub mod form;
pub mod listing;
pub mod store;
pub mod task;

pub use config::ApiConfig;
pub use form::{FormError, TaskForm};
pub use listing::{FetchPhase, ListingClient, ListingElement, ListingError, ListingState};
pub use store::{TaskAction, TaskStore, TasksState};
pub use task::{Task, TaskId};
