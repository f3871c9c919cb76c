//! Schedule resource port, scoped to a scheduled area.

use crate::domain::{
    AppError, CommentPayload, Page, PageRequest, Schedule, ScheduleComment, ScheduleFilters,
    ScheduleUpdate,
};

/// Port for `/api/scheduled-areas/{areaId}/schedules`.
pub trait SchedulesApi {
    fn list_schedules(
        &self,
        area_id: &str,
        page: PageRequest,
        filters: &ScheduleFilters,
    ) -> Result<Page<Schedule>, AppError>;

    fn get_schedule(&self, area_id: &str, schedule_id: &str) -> Result<Schedule, AppError>;

    fn update_schedule(
        &self,
        area_id: &str,
        schedule_id: &str,
        update: &ScheduleUpdate,
    ) -> Result<Schedule, AppError>;

    fn delete_schedule(&self, area_id: &str, schedule_id: &str) -> Result<(), AppError>;

    fn add_schedule_comment(
        &self,
        area_id: &str,
        schedule_id: &str,
        comment: &CommentPayload,
    ) -> Result<ScheduleComment, AppError>;

    fn delete_schedule_comment(
        &self,
        area_id: &str,
        schedule_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError>;
}
