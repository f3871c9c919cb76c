use super::{NavigateTo, Submitted};
use crate::domain::{AppError, CommentPayload, RequiredFields, ScheduleComment};
use crate::ports::SchedulesApi;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub content: String,
}

impl CommentForm {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        RequiredFields::new().text("content", Some(self.content.as_str())).finish()
    }

    /// Post the comment and return to the schedule it belongs to.
    pub fn submit(
        &self,
        api: &impl SchedulesApi,
        area_id: &str,
        schedule_id: &str,
    ) -> Result<Submitted<ScheduleComment>, AppError> {
        self.validate()?;
        let payload = CommentPayload { content: self.content.trim().to_string() };
        let entity = api.add_schedule_comment(area_id, schedule_id, &payload)?;
        Ok(Submitted {
            entity,
            navigate_to: NavigateTo::ScheduleDetail {
                area_id: area_id.to_string(),
                schedule_id: schedule_id.to_string(),
            },
        })
    }
}
