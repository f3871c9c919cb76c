//! Absence type resource port.

use crate::domain::{
    AbsenceType, AbsenceTypeFilters, AbsenceTypePayload, AppError, Page, PageRequest,
};

/// Port for `/api/absence-types`.
pub trait AbsenceTypesApi {
    fn list_absence_types(
        &self,
        page: PageRequest,
        filters: &AbsenceTypeFilters,
    ) -> Result<Page<AbsenceType>, AppError>;

    fn get_absence_type(&self, id: &str) -> Result<AbsenceType, AppError>;

    fn create_absence_type(&self, payload: &AbsenceTypePayload) -> Result<AbsenceType, AppError>;

    fn update_absence_type(
        &self,
        id: &str,
        payload: &AbsenceTypePayload,
    ) -> Result<AbsenceType, AppError>;

    fn delete_absence_type(&self, id: &str) -> Result<(), AppError>;
}
