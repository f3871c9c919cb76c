use reqwest::Method;

use super::HttpApiClient;
use crate::domain::{
    AppError, CommentPayload, Page, PageRequest, Resource, Schedule, ScheduleComment,
    ScheduleFilters, ScheduleUpdate,
};
use crate::ports::SchedulesApi;

impl SchedulesApi for HttpApiClient {
    fn list_schedules(
        &self,
        area_id: &str,
        page: PageRequest,
        filters: &ScheduleFilters,
    ) -> Result<Page<Schedule>, AppError> {
        self.get(self.endpoints().schedules_list(area_id, page, filters))
    }

    fn get_schedule(&self, area_id: &str, schedule_id: &str) -> Result<Schedule, AppError> {
        self.get(self.endpoints().schedule(area_id, schedule_id))
    }

    fn update_schedule(
        &self,
        area_id: &str,
        schedule_id: &str,
        update: &ScheduleUpdate,
    ) -> Result<Schedule, AppError> {
        self.send(Method::PATCH, self.endpoints().schedule(area_id, schedule_id), update)
    }

    fn delete_schedule(&self, area_id: &str, schedule_id: &str) -> Result<(), AppError> {
        self.delete(self.endpoints().schedule(area_id, schedule_id), Resource::Schedule)
    }

    fn add_schedule_comment(
        &self,
        area_id: &str,
        schedule_id: &str,
        comment: &CommentPayload,
    ) -> Result<ScheduleComment, AppError> {
        self.send(Method::POST, self.endpoints().schedule_comments(area_id, schedule_id), comment)
    }

    fn delete_schedule_comment(
        &self,
        area_id: &str,
        schedule_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError> {
        let url = self.endpoints().schedule_comment(area_id, schedule_id, comment_id);
        self.delete(url, Resource::ScheduleComment)
    }
}
