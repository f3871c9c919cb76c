//! Required-field validation for form submissions.

use crate::domain::AppError;

/// Collects the names of missing required fields so a form can report all of
/// them at once.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<String>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-blank text value.
    pub fn text(mut self, field: &str, value: Option<&str>) -> Self {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.missing.push(field.to_string());
        }
        self
    }

    /// Require any value to be present.
    pub fn present<T>(mut self, field: &str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.missing.push(field.to_string());
        }
        self
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.missing.is_empty() { Ok(()) } else { Err(AppError::MissingFields(self.missing)) }
    }
}
