//! Create/edit forms. Each form validates its required fields before any
//! request and reports where to navigate after a successful submit.

mod absence_type_form;
mod comment_form;
mod scheduled_absence_form;

use serde::Serialize;

pub use absence_type_form::AbsenceTypeForm;
pub use comment_form::CommentForm;
pub use scheduled_absence_form::ScheduledAbsenceForm;

/// View to show once a form has been submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum NavigateTo {
    AbsenceTypes,
    ScheduledAbsences,
    ScheduleDetail { area_id: String, schedule_id: String },
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submitted<T> {
    pub entity: T,
    pub navigate_to: NavigateTo,
}

/// Trimmed text, or `None` when blank.
fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
