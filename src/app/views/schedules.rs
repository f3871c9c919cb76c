use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::views::ListState;
use crate::domain::{AppError, Schedule, ScheduleFilters};
use crate::ports::SchedulesApi;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: String,
    pub assignee: String,
    pub participants: u32,
    pub status: String,
    pub generation_id: String,
}

impl From<&Schedule> for ScheduleRow {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id.clone(),
            start: schedule.start_datetime,
            end: schedule.end_datetime,
            kind: schedule.schedule_type.clone().unwrap_or_default(),
            assignee: schedule.assignee_label().unwrap_or("-").to_string(),
            participants: schedule.participant_count(),
            status: schedule.status.clone().unwrap_or_default(),
            generation_id: schedule.schedule_generation_id.clone().unwrap_or_default(),
        }
    }
}

/// Schedules of one scheduled area.
#[derive(Debug, Clone)]
pub struct SchedulesView {
    area_id: String,
    pub state: ListState<ScheduleFilters, Schedule>,
}

impl SchedulesView {
    pub fn new(area_id: impl Into<String>, limit: u32) -> Self {
        Self { area_id: area_id.into(), state: ListState::new(limit) }
    }

    pub fn area_id(&self) -> &str {
        &self.area_id
    }

    pub fn load(&mut self, api: &impl SchedulesApi) -> Result<bool, AppError> {
        let area_id = self.area_id.as_str();
        self.state.load_with(|page, filters| api.list_schedules(area_id, page, filters))
    }

    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.state.items().iter().map(ScheduleRow::from).collect()
    }

    pub fn delete(&mut self, api: &impl SchedulesApi, schedule_id: &str) -> Result<(), AppError> {
        api.delete_schedule(&self.area_id, schedule_id)?;
        self.state.refresh();
        self.load(api).map(|_| ())
    }
}
