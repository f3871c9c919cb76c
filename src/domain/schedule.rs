//! Schedules (escalas), their members and comments.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::filters::text_filter;
use crate::domain::{GroupSummary, ListFilters, Person, TeamSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub scheduled_area_id: String,
    #[serde(default)]
    pub schedule_generation_id: Option<String>,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    #[serde(default)]
    pub schedule_type: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group: Option<GroupSummary>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub team: Option<TeamSummary>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub participants_count: Option<u32>,
    #[serde(default)]
    pub members: Vec<ScheduleMember>,
    #[serde(default)]
    pub comments: Vec<ScheduleComment>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Schedule {
    /// Participant count reported by the server, or the number of embedded members.
    pub fn participant_count(&self) -> u32 {
        self.participants_count
            .unwrap_or_else(|| u32::try_from(self.members.len()).unwrap_or(u32::MAX))
    }

    /// Display label for the schedule's assignee (group, team, or none).
    pub fn assignee_label(&self) -> Option<&str> {
        self.group
            .as_ref()
            .map(|g| g.name.as_str())
            .or_else(|| self.team.as_ref().map(|t| t.name.as_str()))
            .filter(|name| !name.is_empty())
    }
}

/// Role held by a member within a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responsibility {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMember {
    pub id: String,
    pub person_id: String,
    #[serde(default)]
    pub person: Option<Person>,
    #[serde(default)]
    pub responsibility_id: Option<String>,
    #[serde(default)]
    pub responsibility: Option<Responsibility>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub present: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleComment {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub author: Option<Person>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial body for updating a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentPayload {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilters {
    pub schedule_generation_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub person_id: Option<String>,
    pub group_id: Option<String>,
    pub team_id: Option<String>,
}

impl ListFilters for ScheduleFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = text_filter(&self.schedule_generation_id) {
            pairs.push(("scheduleGenerationId", id));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(id) = text_filter(&self.person_id) {
            pairs.push(("personId", id));
        }
        if let Some(id) = text_filter(&self.group_id) {
            pairs.push(("groupId", id));
        }
        if let Some(id) = text_filter(&self.team_id) {
            pairs.push(("teamId", id));
        }
        pairs
    }
}
