mod back_link;
mod element_card;
mod error_message;
mod loading_spinner;
mod task_item;
mod task_modal;

pub use back_link::BackLink;
pub use element_card::ElementCard;
pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use task_item::TaskItem;
pub use task_modal::TaskModal;
