use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::views::ListState;
use crate::domain::{AppError, ScheduleGeneration};
use crate::ports::ScheduleGenerationsApi;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRow {
    pub id: String,
    pub generation_type: String,
    pub period: String,
    pub total_schedules: u32,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&ScheduleGeneration> for GenerationRow {
    fn from(generation: &ScheduleGeneration) -> Self {
        let period = match (&generation.period_start_date, &generation.period_end_date) {
            (Some(start), Some(end)) => format!("{} to {}", start, end),
            (Some(start), None) => format!("from {}", start),
            (None, Some(end)) => format!("until {}", end),
            (None, None) => String::new(),
        };
        Self {
            id: generation.id.clone(),
            generation_type: generation.generation_type.to_string(),
            period,
            total_schedules: generation.total_schedules_generated.unwrap_or(0),
            created_at: generation.created_at,
        }
    }
}

/// Generations of one scheduled area. The endpoint takes no filters.
#[derive(Debug, Clone)]
pub struct GenerationsView {
    area_id: String,
    pub state: ListState<(), ScheduleGeneration>,
}

impl GenerationsView {
    pub fn new(area_id: impl Into<String>, limit: u32) -> Self {
        Self { area_id: area_id.into(), state: ListState::new(limit) }
    }

    pub fn load(&mut self, api: &impl ScheduleGenerationsApi) -> Result<bool, AppError> {
        let area_id = self.area_id.as_str();
        self.state.load_with(|page, _| api.list_schedule_generations(area_id, page))
    }

    pub fn rows(&self) -> Vec<GenerationRow> {
        self.state.items().iter().map(GenerationRow::from).collect()
    }

    /// Delete a generation (and, server-side, its schedules) and reload.
    pub fn delete(
        &mut self,
        api: &impl ScheduleGenerationsApi,
        generation_id: &str,
    ) -> Result<(), AppError> {
        api.delete_schedule_generation(&self.area_id, generation_id)?;
        self.state.refresh();
        self.load(api).map(|_| ())
    }
}
