//! Schedule generations: batches of schedules produced from one configuration.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a generation distributes participants across schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationType {
    Group,
    People,
    TeamWithRestriction,
    TeamWithoutRestriction,
    #[serde(other)]
    #[default]
    Unknown,
}

impl GenerationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationType::Group => "group",
            GenerationType::People => "people",
            GenerationType::TeamWithRestriction => "team_with_restriction",
            GenerationType::TeamWithoutRestriction => "team_without_restriction",
            GenerationType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation record as returned by the API. `configuration` is kept raw;
/// see [`crate::domain::generation_config`] for the flattened view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGeneration {
    pub id: String,
    pub scheduled_area_id: String,
    pub generation_type: GenerationType,
    #[serde(default)]
    pub period_type: Option<String>,
    #[serde(default)]
    pub period_start_date: Option<String>,
    #[serde(default)]
    pub period_end_date: Option<String>,
    #[serde(default)]
    pub configuration: serde_json::Value,
    #[serde(default)]
    pub total_schedules_generated: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
}
