use super::HttpApiClient;
use crate::domain::{AppError, Page, PageRequest, Resource, ScheduleGeneration};
use crate::ports::ScheduleGenerationsApi;

impl ScheduleGenerationsApi for HttpApiClient {
    fn list_schedule_generations(
        &self,
        area_id: &str,
        page: PageRequest,
    ) -> Result<Page<ScheduleGeneration>, AppError> {
        self.get(self.endpoints().schedule_generations_list(area_id, page))
    }

    fn get_schedule_generation(
        &self,
        area_id: &str,
        generation_id: &str,
    ) -> Result<ScheduleGeneration, AppError> {
        self.get(self.endpoints().schedule_generation(area_id, generation_id))
    }

    fn delete_schedule_generation(
        &self,
        area_id: &str,
        generation_id: &str,
    ) -> Result<(), AppError> {
        let url = self.endpoints().schedule_generation(area_id, generation_id);
        self.delete(url, Resource::ScheduleGeneration)
    }
}
