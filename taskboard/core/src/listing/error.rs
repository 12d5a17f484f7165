use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Error desconocido al cargar los datos";

#[derive(Debug, Error)]
pub enum ListingError {
    /// The endpoint answered with a non-2xx status.
    #[error("Error {code}: {reason}")]
    Status { code: u16, reason: String },
    #[error("{0}")]
    Request(#[source] reqwest::Error),
    #[error("{0}")]
    Decode(#[source] reqwest::Error),
}

impl ListingError {
    /// Message for the error panel, never blank.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}
