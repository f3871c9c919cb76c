use reqwest::Method;

use super::HttpApiClient;
use crate::domain::{
    AppError, Page, PageRequest, Resource, ScheduledAbsence, ScheduledAbsenceFilters,
    ScheduledAbsencePayload, ScheduledAbsenceUpdate,
};
use crate::ports::ScheduledAbsencesApi;

impl ScheduledAbsencesApi for HttpApiClient {
    fn list_scheduled_absences(
        &self,
        page: PageRequest,
        filters: &ScheduledAbsenceFilters,
    ) -> Result<Page<ScheduledAbsence>, AppError> {
        self.get(self.endpoints().scheduled_absences_list(page, filters))
    }

    fn get_scheduled_absence(&self, id: &str) -> Result<ScheduledAbsence, AppError> {
        self.get(self.endpoints().scheduled_absence(id))
    }

    fn create_scheduled_absence(
        &self,
        payload: &ScheduledAbsencePayload,
    ) -> Result<ScheduledAbsence, AppError> {
        self.send(Method::POST, self.endpoints().scheduled_absences(), payload)
    }

    fn update_scheduled_absence(
        &self,
        id: &str,
        update: &ScheduledAbsenceUpdate,
    ) -> Result<ScheduledAbsence, AppError> {
        self.send(Method::PATCH, self.endpoints().scheduled_absence(id), update)
    }

    fn delete_scheduled_absence(&self, id: &str) -> Result<(), AppError> {
        self.delete(self.endpoints().scheduled_absence(id), Resource::ScheduledAbsence)
    }
}
