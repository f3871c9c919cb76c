use reqwest::Method;

use super::HttpApiClient;
use crate::domain::{
    AbsenceType, AbsenceTypeFilters, AbsenceTypePayload, AppError, Page, PageRequest, Resource,
};
use crate::ports::AbsenceTypesApi;

impl AbsenceTypesApi for HttpApiClient {
    fn list_absence_types(
        &self,
        page: PageRequest,
        filters: &AbsenceTypeFilters,
    ) -> Result<Page<AbsenceType>, AppError> {
        self.get(self.endpoints().absence_types_list(page, filters))
    }

    fn get_absence_type(&self, id: &str) -> Result<AbsenceType, AppError> {
        self.get(self.endpoints().absence_type(id))
    }

    fn create_absence_type(&self, payload: &AbsenceTypePayload) -> Result<AbsenceType, AppError> {
        self.send(Method::POST, self.endpoints().absence_types(), payload)
    }

    fn update_absence_type(
        &self,
        id: &str,
        payload: &AbsenceTypePayload,
    ) -> Result<AbsenceType, AppError> {
        self.send(Method::PATCH, self.endpoints().absence_type(id), payload)
    }

    fn delete_absence_type(&self, id: &str) -> Result<(), AppError> {
        self.delete(self.endpoints().absence_type(id), Resource::AbsenceType)
    }
}
