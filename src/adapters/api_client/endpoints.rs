//! URL construction for every REST endpoint.

use url::Url;

use crate::domain::{AppError, ListFilters, PageRequest};

const API: &str = "api";
const ABSENCE_TYPES: &str = "absence-types";
const SCHEDULED_ABSENCES: &str = "scheduled-absences";
const SCHEDULED_AREAS: &str = "scheduled-areas";
const SCHEDULES: &str = "schedules";
const SCHEDULE_GENERATIONS: &str = "schedule-generations";
const GROUPS: &str = "groups";
const COMMENTS: &str = "comments";

/// Builds endpoint URLs under a server root. Path segments are percent-encoded;
/// list URLs always carry `page` and `limit` followed by the set filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: Url) -> Result<Self, AppError> {
        if base.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!("Not a base URL: {}", base)));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn absence_types(&self) -> Url {
        self.path(&[ABSENCE_TYPES])
    }

    pub fn absence_type(&self, id: &str) -> Url {
        self.path(&[ABSENCE_TYPES, id])
    }

    pub fn absence_types_list<F: ListFilters>(&self, page: PageRequest, filters: &F) -> Url {
        with_query(self.absence_types(), page, filters)
    }

    pub fn scheduled_absences(&self) -> Url {
        self.path(&[SCHEDULED_ABSENCES])
    }

    pub fn scheduled_absence(&self, id: &str) -> Url {
        self.path(&[SCHEDULED_ABSENCES, id])
    }

    pub fn scheduled_absences_list<F: ListFilters>(&self, page: PageRequest, filters: &F) -> Url {
        with_query(self.scheduled_absences(), page, filters)
    }

    pub fn schedules(&self, area_id: &str) -> Url {
        self.path(&[SCHEDULED_AREAS, area_id, SCHEDULES])
    }

    pub fn schedule(&self, area_id: &str, schedule_id: &str) -> Url {
        self.path(&[SCHEDULED_AREAS, area_id, SCHEDULES, schedule_id])
    }

    pub fn schedules_list<F: ListFilters>(
        &self,
        area_id: &str,
        page: PageRequest,
        filters: &F,
    ) -> Url {
        with_query(self.schedules(area_id), page, filters)
    }

    pub fn schedule_comments(&self, area_id: &str, schedule_id: &str) -> Url {
        self.path(&[SCHEDULED_AREAS, area_id, SCHEDULES, schedule_id, COMMENTS])
    }

    pub fn schedule_comment(&self, area_id: &str, schedule_id: &str, comment_id: &str) -> Url {
        self.path(&[SCHEDULED_AREAS, area_id, SCHEDULES, schedule_id, COMMENTS, comment_id])
    }

    pub fn schedule_generations(&self, area_id: &str) -> Url {
        self.path(&[SCHEDULED_AREAS, area_id, SCHEDULE_GENERATIONS])
    }

    pub fn schedule_generation(&self, area_id: &str, generation_id: &str) -> Url {
        self.path(&[SCHEDULED_AREAS, area_id, SCHEDULE_GENERATIONS, generation_id])
    }

    pub fn schedule_generations_list(&self, area_id: &str, page: PageRequest) -> Url {
        with_query(self.schedule_generations(area_id), page, &())
    }

    pub fn groups(&self, area_id: &str) -> Url {
        self.path(&[SCHEDULED_AREAS, area_id, GROUPS])
    }

    pub fn group(&self, area_id: &str, group_id: &str) -> Url {
        self.path(&[SCHEDULED_AREAS, area_id, GROUPS, group_id])
    }

    pub fn groups_list<F: ListFilters>(
        &self,
        area_id: &str,
        page: PageRequest,
        filters: &F,
    ) -> Url {
        with_query(self.groups(area_id), page, filters)
    }

    fn path(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // `new` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(API).extend(segments);
        }
        url
    }
}

fn with_query<F: ListFilters>(mut url: Url, page: PageRequest, filters: &F) -> Url {
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("page", &page.page.to_string());
        query.append_pair("limit", &page.limit.to_string());
        for (key, value) in filters.query_pairs() {
            query.append_pair(key, &value);
        }
    }
    url
}
