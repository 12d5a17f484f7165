use thiserror::Error;

/// Key value reported by the browser for the escape key.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("La descripción es obligatoria")]
    EmptyDescription,
}

/// State behind the "add task" modal.
///
/// The form never touches the store itself: [`TaskForm::submit`] hands back the
/// trimmed description and the container decides what to do with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    visible: bool,
    description: String,
    error: Option<FormError>,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form with a cleared field and no error.
    pub fn show(&mut self) {
        self.description.clear();
        self.error = None;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Replaces the field contents; any validation error goes away.
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
        self.error = None;
    }

    /// Validates the field. On success the form is cleared and the trimmed text returned.
    pub fn submit(&mut self) -> Result<String, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            self.error = Some(FormError::EmptyDescription);
            return Err(FormError::EmptyDescription);
        }

        let description = description.to_string();
        self.description.clear();
        self.error = None;
        Ok(description)
    }

    /// Whether a key press should close the form. Inert while hidden.
    pub fn handle_key(&self, key: &str) -> bool {
        self.visible && key == ESCAPE_KEY
    }
}
