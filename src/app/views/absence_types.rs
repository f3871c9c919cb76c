use serde::Serialize;

use crate::app::views::ListState;
use crate::domain::{AbsenceType, AbsenceTypeFilters, AppError};
use crate::ports::AbsenceTypesApi;

/// Display row for the absence type table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsenceTypeRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub status: &'static str,
}

impl From<&AbsenceType> for AbsenceTypeRow {
    fn from(absence_type: &AbsenceType) -> Self {
        Self {
            id: absence_type.id.clone(),
            name: absence_type.name.clone(),
            description: absence_type.description.clone().unwrap_or_default(),
            color: absence_type.color.clone().unwrap_or_default(),
            status: if absence_type.active { "active" } else { "inactive" },
        }
    }
}

#[derive(Debug, Clone)]
pub struct AbsenceTypesView {
    pub state: ListState<AbsenceTypeFilters, AbsenceType>,
}

impl AbsenceTypesView {
    pub fn new(limit: u32) -> Self {
        Self { state: ListState::new(limit) }
    }

    pub fn load(&mut self, api: &impl AbsenceTypesApi) -> Result<bool, AppError> {
        self.state.load_with(|page, filters| api.list_absence_types(page, filters))
    }

    pub fn rows(&self) -> Vec<AbsenceTypeRow> {
        self.state.items().iter().map(AbsenceTypeRow::from).collect()
    }

    /// Delete a type and reload the current page.
    pub fn delete(&mut self, api: &impl AbsenceTypesApi, id: &str) -> Result<(), AppError> {
        api.delete_absence_type(id)?;
        self.state.refresh();
        self.load(api).map(|_| ())
    }
}
