//! Scheduled absence resource port.

use crate::domain::{
    AppError, Page, PageRequest, ScheduledAbsence, ScheduledAbsenceFilters,
    ScheduledAbsencePayload, ScheduledAbsenceUpdate,
};

/// Port for `/api/scheduled-absences`.
pub trait ScheduledAbsencesApi {
    fn list_scheduled_absences(
        &self,
        page: PageRequest,
        filters: &ScheduledAbsenceFilters,
    ) -> Result<Page<ScheduledAbsence>, AppError>;

    fn get_scheduled_absence(&self, id: &str) -> Result<ScheduledAbsence, AppError>;

    fn create_scheduled_absence(
        &self,
        payload: &ScheduledAbsencePayload,
    ) -> Result<ScheduledAbsence, AppError>;

    fn update_scheduled_absence(
        &self,
        id: &str,
        update: &ScheduledAbsenceUpdate,
    ) -> Result<ScheduledAbsence, AppError>;

    fn delete_scheduled_absence(&self, id: &str) -> Result<(), AppError>;
}
