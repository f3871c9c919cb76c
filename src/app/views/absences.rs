use chrono::NaiveDate;
use serde::Serialize;

use crate::app::views::ListState;
use crate::domain::{AppError, ScheduledAbsence, ScheduledAbsenceFilters};
use crate::ports::ScheduledAbsencesApi;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsenceRow {
    pub id: String,
    pub person: String,
    pub absence_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub description: String,
}

impl From<&ScheduledAbsence> for AbsenceRow {
    fn from(absence: &ScheduledAbsence) -> Self {
        Self {
            id: absence.id.clone(),
            person: absence.person_name().to_string(),
            absence_type: absence.absence_type_name().to_string(),
            start_date: absence.start_date,
            end_date: absence.end_date,
            days: absence.duration_days(),
            description: absence.description.clone().unwrap_or_default(),
        }
    }
}

/// Scheduled absences list, optionally pinned to one person.
#[derive(Debug, Clone)]
pub struct AbsencesView {
    pub state: ListState<ScheduledAbsenceFilters, ScheduledAbsence>,
    person_id: Option<String>,
}

impl AbsencesView {
    pub fn new(limit: u32) -> Self {
        Self { state: ListState::new(limit), person_id: None }
    }

    /// Absences of a single person. The person filter survives filter changes.
    pub fn for_person(person_id: impl Into<String>, limit: u32) -> Self {
        let person_id = person_id.into();
        let filters =
            ScheduledAbsenceFilters { person_id: Some(person_id.clone()), ..Default::default() };
        Self { state: ListState::new(limit).with_filters(filters), person_id: Some(person_id) }
    }

    pub fn person_id(&self) -> Option<&str> {
        self.person_id.as_deref()
    }

    pub fn set_filters(&mut self, mut filters: ScheduledAbsenceFilters) {
        if let Some(person_id) = &self.person_id {
            filters.person_id = Some(person_id.clone());
        }
        self.state.set_filters(filters);
    }

    pub fn load(&mut self, api: &impl ScheduledAbsencesApi) -> Result<bool, AppError> {
        self.state.load_with(|page, filters| api.list_scheduled_absences(page, filters))
    }

    pub fn rows(&self) -> Vec<AbsenceRow> {
        self.state.items().iter().map(AbsenceRow::from).collect()
    }

    pub fn delete(&mut self, api: &impl ScheduledAbsencesApi, id: &str) -> Result<(), AppError> {
        api.delete_scheduled_absence(id)?;
        self.state.refresh();
        self.load(api).map(|_| ())
    }
}
