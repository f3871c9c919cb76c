use serde::{Deserialize, Serialize};

use crate::domain::ListFilters;
use crate::domain::filters::text_filter;

/// Group of people inside a scheduled area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaGroup {
    pub id: String,
    #[serde(default)]
    pub scheduled_area_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub members_count: Option<u32>,
}

/// Compact group reference embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Compact team reference embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFilters {
    pub name: Option<String>,
}

impl ListFilters for GroupFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = text_filter(&self.name) {
            pairs.push(("name", name));
        }
        pairs
    }
}
