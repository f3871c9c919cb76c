use serde::Serialize;

use crate::app::views::ListState;
use crate::domain::{AppError, AreaGroup, GroupFilters};
use crate::ports::GroupsApi;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: Option<u32>,
}

impl From<&AreaGroup> for GroupRow {
    fn from(group: &AreaGroup) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            description: group.description.clone().unwrap_or_default(),
            members: group.members_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupsView {
    area_id: String,
    pub state: ListState<GroupFilters, AreaGroup>,
}

impl GroupsView {
    pub fn new(area_id: impl Into<String>, limit: u32) -> Self {
        Self { area_id: area_id.into(), state: ListState::new(limit) }
    }

    pub fn load(&mut self, api: &impl GroupsApi) -> Result<bool, AppError> {
        let area_id = self.area_id.as_str();
        self.state.load_with(|page, filters| api.list_groups(area_id, page, filters))
    }

    pub fn rows(&self) -> Vec<GroupRow> {
        self.state.items().iter().map(GroupRow::from).collect()
    }
}
