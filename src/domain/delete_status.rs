//! Status-code to message mapping for DELETE requests.

use std::fmt;

/// Remote resources that can be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    AbsenceType,
    ScheduledAbsence,
    Schedule,
    ScheduleComment,
    ScheduleGeneration,
}

impl Resource {
    /// Human-readable label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Resource::AbsenceType => "Absence type",
            Resource::ScheduledAbsence => "Scheduled absence",
            Resource::Schedule => "Schedule",
            Resource::ScheduleComment => "Comment",
            Resource::ScheduleGeneration => "Schedule generation",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a failed DELETE response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteFailure {
    Unauthorized,
    NotFound,
    Conflict,
    Other(u16),
}

impl DeleteFailure {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => DeleteFailure::Unauthorized,
            404 => DeleteFailure::NotFound,
            409 => DeleteFailure::Conflict,
            other => DeleteFailure::Other(other),
        }
    }

    pub fn message(&self, resource: Resource) -> String {
        match self {
            DeleteFailure::Unauthorized => {
                "Unauthorized: your session has expired or the token is invalid".to_string()
            }
            DeleteFailure::NotFound => format!("{} not found", resource.label()),
            DeleteFailure::Conflict => {
                format!("{} cannot be deleted because it is still in use", resource.label())
            }
            DeleteFailure::Other(status) => {
                format!("Failed to delete {} (HTTP {})", resource.label().to_lowercase(), status)
            }
        }
    }
}

/// Message shown to the user when deleting `resource` failed with `status`.
pub fn delete_failure_message(resource: Resource, status: u16) -> String {
    DeleteFailure::from_status(status).message(resource)
}
