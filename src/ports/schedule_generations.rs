//! Schedule generation resource port.

use crate::domain::{AppError, Page, PageRequest, ScheduleGeneration};

/// Port for `/api/scheduled-areas/{areaId}/schedule-generations`.
pub trait ScheduleGenerationsApi {
    fn list_schedule_generations(
        &self,
        area_id: &str,
        page: PageRequest,
    ) -> Result<Page<ScheduleGeneration>, AppError>;

    fn get_schedule_generation(
        &self,
        area_id: &str,
        generation_id: &str,
    ) -> Result<ScheduleGeneration, AppError>;

    /// Delete a generation together with the schedules it produced.
    fn delete_schedule_generation(&self, area_id: &str, generation_id: &str)
    -> Result<(), AppError>;
}
