use super::HttpApiClient;
use crate::domain::{AppError, AreaGroup, GroupFilters, Page, PageRequest};
use crate::ports::GroupsApi;

impl GroupsApi for HttpApiClient {
    fn list_groups(
        &self,
        area_id: &str,
        page: PageRequest,
        filters: &GroupFilters,
    ) -> Result<Page<AreaGroup>, AppError> {
        self.get(self.endpoints().groups_list(area_id, page, filters))
    }

    fn get_group(&self, area_id: &str, group_id: &str) -> Result<AreaGroup, AppError> {
        self.get(self.endpoints().group(area_id, group_id))
    }
}
