//! Generation detail: header, flattened configuration and produced schedules.

use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;

use crate::app::views::ScheduleRow;
use crate::domain::pagination::MAX_PAGE_LIMIT;
use crate::domain::{
    AppError, AreaGroup, ConfigurationMapper, GroupFilters, PageRequest, ScheduleFilters,
    ScheduleGroupConfiguration,
};
use crate::ports::{GroupsApi, ScheduleGenerationsApi, SchedulesApi};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationDetail {
    pub id: String,
    pub area_id: String,
    pub generation_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: String,
    pub total_schedules_generated: u32,
    pub configuration: ScheduleGroupConfiguration,
    pub schedules: Vec<ScheduleRow>,
    pub schedules_total: u64,
}

impl GenerationDetail {
    /// Fetch the generation, its area's groups (to name bare group IDs) and the
    /// first page of schedules it produced.
    ///
    /// The group lookup is optional: when it fails, group names that are not
    /// embedded in the configuration stay empty.
    pub fn load<A>(
        api: &A,
        area_id: &str,
        generation_id: &str,
        limit: u32,
    ) -> Result<Self, AppError>
    where
        A: ScheduleGenerationsApi + SchedulesApi + GroupsApi,
    {
        let generation = api.get_schedule_generation(area_id, generation_id)?;

        let groups_page = PageRequest::first(MAX_PAGE_LIMIT);
        let known_groups: Vec<AreaGroup> =
            match api.list_groups(area_id, groups_page, &GroupFilters::default()) {
                Ok(page) => page.data,
                Err(err) => {
                    warn!("Could not load groups for area {}: {}", area_id, err);
                    Vec::new()
                }
            };
        let configuration = ConfigurationMapper::with_known_groups(&known_groups).map(&generation);

        let filters = ScheduleFilters {
            schedule_generation_id: Some(generation.id.clone()),
            ..Default::default()
        };
        let schedules = api.list_schedules(area_id, PageRequest::first(limit), &filters)?;

        Ok(Self {
            id: generation.id,
            area_id: generation.scheduled_area_id,
            generation_type: generation.generation_type.to_string(),
            created_at: generation.created_at,
            created_by: generation.created_by.unwrap_or_default(),
            total_schedules_generated: generation.total_schedules_generated.unwrap_or(0),
            configuration,
            schedules: schedules.data.iter().map(ScheduleRow::from).collect(),
            schedules_total: schedules.total,
        })
    }
}
