//! Area group resource port.

use crate::domain::{AppError, AreaGroup, GroupFilters, Page, PageRequest};

/// Port for `/api/scheduled-areas/{areaId}/groups`.
pub trait GroupsApi {
    fn list_groups(
        &self,
        area_id: &str,
        page: PageRequest,
        filters: &GroupFilters,
    ) -> Result<Page<AreaGroup>, AppError>;

    fn get_group(&self, area_id: &str, group_id: &str) -> Result<AreaGroup, AppError>;
}
