//! Read-only schedule detail composed from the nested schedule response.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AppError, Schedule, ScheduleComment, ScheduleMember};
use crate::ports::SchedulesApi;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRow {
    pub id: String,
    pub name: String,
    pub responsibility: String,
    pub status: String,
    pub present: Option<bool>,
}

impl From<&ScheduleMember> for MemberRow {
    fn from(member: &ScheduleMember) -> Self {
        Self {
            id: member.id.clone(),
            name: member
                .person
                .as_ref()
                .map(|p| p.full_name.clone())
                .unwrap_or_else(|| member.person_id.clone()),
            responsibility: member
                .responsibility
                .as_ref()
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            status: member.status.clone().unwrap_or_default(),
            present: member.present,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRow {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&ScheduleComment> for CommentRow {
    fn from(comment: &ScheduleComment) -> Self {
        let author = comment
            .author
            .as_ref()
            .map(|a| a.full_name.clone())
            .or_else(|| comment.author_id.clone())
            .unwrap_or_default();
        Self {
            id: comment.id.clone(),
            author,
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleDetail {
    pub id: String,
    pub area_id: String,
    pub generation_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: String,
    pub assignee: String,
    pub status: String,
    pub participants: u32,
    pub members: Vec<MemberRow>,
    pub comments: Vec<CommentRow>,
}

impl ScheduleDetail {
    pub fn load(
        api: &impl SchedulesApi,
        area_id: &str,
        schedule_id: &str,
    ) -> Result<Self, AppError> {
        api.get_schedule(area_id, schedule_id).map(|schedule| Self::from_schedule(&schedule))
    }

    /// Comments are ordered oldest first; undated comments go last.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut comments: Vec<CommentRow> =
            schedule.comments.iter().map(CommentRow::from).collect();
        comments.sort_by_key(|c| (c.created_at.is_none(), c.created_at));
        Self {
            id: schedule.id.clone(),
            area_id: schedule.scheduled_area_id.clone(),
            generation_id: schedule.schedule_generation_id.clone().unwrap_or_default(),
            start: schedule.start_datetime,
            end: schedule.end_datetime,
            kind: schedule.schedule_type.clone().unwrap_or_default(),
            assignee: schedule.assignee_label().unwrap_or("-").to_string(),
            status: schedule.status.clone().unwrap_or_default(),
            participants: schedule.participant_count(),
            members: schedule.members.iter().map(MemberRow::from).collect(),
            comments,
        }
    }
}
