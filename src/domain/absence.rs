//! Absence types and scheduled absences.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::filters::text_filter;
use crate::domain::{ListFilters, Person};

/// Category of absence (vacation, sick leave, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// A person's absence over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAbsence {
    pub id: String,
    pub person_id: String,
    #[serde(default)]
    pub person: Option<Person>,
    pub absence_type_id: String,
    #[serde(default)]
    pub absence_type: Option<AbsenceType>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ScheduledAbsence {
    /// Number of calendar days covered, both ends included.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn person_name(&self) -> &str {
        self.person.as_ref().map(|p| p.full_name.as_str()).unwrap_or(self.person_id.as_str())
    }

    pub fn absence_type_name(&self) -> &str {
        self.absence_type.as_ref().map(|t| t.name.as_str()).unwrap_or(self.absence_type_id.as_str())
    }
}

/// Body for creating or updating an absence type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceTypePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Body for creating a scheduled absence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAbsencePayload {
    pub person_id: String,
    pub absence_type_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial body for updating a scheduled absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAbsenceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absence_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsenceTypeFilters {
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl ListFilters for AbsenceTypeFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = text_filter(&self.name) {
            pairs.push(("name", name));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduledAbsenceFilters {
    pub person_id: Option<String>,
    pub person_name: Option<String>,
    pub absence_type_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ListFilters for ScheduledAbsenceFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(person_id) = text_filter(&self.person_id) {
            pairs.push(("personId", person_id));
        }
        if let Some(person_name) = text_filter(&self.person_name) {
            pairs.push(("personName", person_name));
        }
        if let Some(type_id) = text_filter(&self.absence_type_id) {
            pairs.push(("absenceTypeId", type_id));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_nested_absence() {
        let json = r##"{
            "id": "abs-1",
            "personId": "p-1",
            "person": {"id": "p-1", "fullName": "Ana Souza"},
            "absenceTypeId": "t-1",
            "absenceType": {"id": "t-1", "name": "Férias", "color": "#00aa00"},
            "startDate": "2024-07-01",
            "endDate": "2024-07-10",
            "unknownField": 42
        }"##;
        let absence: ScheduledAbsence = serde_json::from_str(json).unwrap();
        assert_eq!(absence.person_name(), "Ana Souza");
        assert_eq!(absence.absence_type_name(), "Férias");
        assert_eq!(absence.duration_days(), 10);
        assert!(absence.absence_type.unwrap().active);
    }

    #[test]
    fn names_fall_back_to_ids() {
        let json = r#"{
            "id": "a",
            "personId": "p-9",
            "absenceTypeId": "t-9",
            "startDate": "2024-01-01",
            "endDate": "2024-01-01"
        }"#;
        let absence: ScheduledAbsence = serde_json::from_str(json).unwrap();
        assert_eq!(absence.person_name(), "p-9");
        assert_eq!(absence.absence_type_name(), "t-9");
        assert_eq!(absence.duration_days(), 1);
    }

    #[test]
    fn payload_omits_unset_optionals() {
        let payload = AbsenceTypePayload {
            name: "Licença".into(),
            description: None,
            color: Some("#ff0000".into()),
            icon: None,
            active: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Licença", "color": "#ff0000"}));
    }

    #[test]
    fn absence_filters_skip_blank_values() {
        let filters = ScheduledAbsenceFilters {
            person_id: Some("  ".into()),
            person_name: Some(" Ana ".into()),
            absence_type_id: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: None,
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("personName", "Ana".to_string()), ("startDate", "2024-03-01".to_string())]
        );
    }
}
