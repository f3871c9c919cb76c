use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{
    AbsenceType, AbsenceTypeFilters, AbsenceTypePayload, AppError, AreaGroup, CommentPayload,
    GroupFilters, ListFilters, Page, PageRequest, Resource, Schedule, ScheduleComment,
    ScheduleFilters, ScheduleGeneration, ScheduleUpdate, ScheduledAbsence,
    ScheduledAbsenceFilters, ScheduledAbsencePayload, ScheduledAbsenceUpdate,
    delete_failure_message,
};
use crate::ports::{
    AbsenceTypesApi, GroupsApi, ScheduleGenerationsApi, ScheduledAbsencesApi, SchedulesApi,
};

/// In-memory API that records every call.
#[derive(Clone, Default)]
pub struct FakeAdminApi {
    state: Arc<Mutex<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    absence_types: Vec<AbsenceType>,
    absences: Vec<ScheduledAbsence>,
    schedules: Vec<Schedule>,
    generations: Vec<ScheduleGeneration>,
    groups: Vec<AreaGroup>,
    calls: Vec<String>,
    failure: Option<(String, u16)>,
    next_id: u32,
}

impl FakeAdminApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_absence_types(self, items: Vec<AbsenceType>) -> Self {
        self.lock().absence_types = items;
        self
    }

    pub fn with_absences(self, items: Vec<ScheduledAbsence>) -> Self {
        self.lock().absences = items;
        self
    }

    pub fn with_schedules(self, items: Vec<Schedule>) -> Self {
        self.lock().schedules = items;
        self
    }

    pub fn with_generations(self, items: Vec<ScheduleGeneration>) -> Self {
        self.lock().generations = items;
        self
    }

    pub fn with_groups(self, items: Vec<AreaGroup>) -> Self {
        self.lock().groups = items;
        self
    }

    /// Make every following call fail with `message` and `status`.
    pub fn fail_with(&self, message: &str, status: u16) {
        self.lock().failure = Some((message.to_string(), status));
    }

    pub fn recover(&self) {
        self.lock().failure = None;
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn absences(&self) -> Vec<ScheduledAbsence> {
        self.lock().absences.clone()
    }

    pub fn absence_types(&self) -> Vec<AbsenceType> {
        self.lock().absence_types.clone()
    }

    pub fn schedules(&self) -> Vec<Schedule> {
        self.lock().schedules.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn record<F: ListFilters>(
        &self,
        call: &str,
        page: Option<PageRequest>,
        filters: &F,
    ) -> Result<(), AppError> {
        let mut state = self.lock();
        let mut entry = call.to_string();
        if let Some(page) = page {
            entry.push_str(&format!(" page={} limit={}", page.page, page.limit));
        }
        for (key, value) in filters.query_pairs() {
            entry.push_str(&format!(" {}={}", key, value));
        }
        state.calls.push(entry);
        match &state.failure {
            Some((message, status)) => Err(AppError::api(message.clone(), Some(*status))),
            None => Ok(()),
        }
    }

    fn record_delete(&self, call: &str, resource: Resource) -> Result<(), AppError> {
        let mut state = self.lock();
        state.calls.push(call.to_string());
        match &state.failure {
            Some((_, status)) => Err(AppError::DeleteFailed {
                resource,
                status: *status,
                message: delete_failure_message(resource, *status),
            }),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut state = self.lock();
        state.next_id += 1;
        format!("{}-new-{}", prefix, state.next_id)
    }
}

fn paginate<T: Clone>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let start = ((page.page - 1) * page.limit) as usize;
    let data = items.into_iter().skip(start).take(page.limit as usize).collect();
    Page {
        data,
        page: page.page,
        limit: page.limit,
        total,
        total_pages: total.div_ceil(u64::from(page.limit)) as u32,
    }
}

fn not_found(what: &str) -> AppError {
    AppError::api(format!("{} not found", what), Some(404))
}

/// PATCH semantics: `None` keeps the stored value, an empty string clears it.
fn patch_text(stored: &mut Option<String>, sent: &Option<String>) {
    if let Some(value) = sent {
        *stored = (!value.is_empty()).then(|| value.clone());
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl AbsenceTypesApi for FakeAdminApi {
    fn list_absence_types(
        &self,
        page: PageRequest,
        filters: &AbsenceTypeFilters,
    ) -> Result<Page<AbsenceType>, AppError> {
        self.record("list_absence_types", Some(page), filters)?;
        let items = self
            .absence_types()
            .into_iter()
            .filter(|t| filters.active.is_none_or(|active| t.active == active))
            .filter(|t| {
                filters.name.as_deref().is_none_or(|n| contains_ignore_case(&t.name, n))
            })
            .collect();
        Ok(paginate(items, page))
    }

    fn get_absence_type(&self, id: &str) -> Result<AbsenceType, AppError> {
        self.record(&format!("get_absence_type {}", id), None, &())?;
        self.absence_types()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("Absence type"))
    }

    fn create_absence_type(&self, payload: &AbsenceTypePayload) -> Result<AbsenceType, AppError> {
        self.record("create_absence_type", None, &())?;
        let created = AbsenceType {
            id: self.next_id("type"),
            name: payload.name.clone(),
            description: payload.description.clone(),
            color: payload.color.clone(),
            icon: payload.icon.clone(),
            active: payload.active.unwrap_or(true),
            created_at: None,
            updated_at: None,
        };
        self.lock().absence_types.push(created.clone());
        Ok(created)
    }

    fn update_absence_type(
        &self,
        id: &str,
        payload: &AbsenceTypePayload,
    ) -> Result<AbsenceType, AppError> {
        self.record(&format!("update_absence_type {}", id), None, &())?;
        let mut state = self.lock();
        let existing = state
            .absence_types
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("Absence type"))?;
        existing.name = payload.name.clone();
        patch_text(&mut existing.description, &payload.description);
        patch_text(&mut existing.color, &payload.color);
        patch_text(&mut existing.icon, &payload.icon);
        if let Some(active) = payload.active {
            existing.active = active;
        }
        Ok(existing.clone())
    }

    fn delete_absence_type(&self, id: &str) -> Result<(), AppError> {
        self.record_delete(&format!("delete_absence_type {}", id), Resource::AbsenceType)?;
        self.lock().absence_types.retain(|t| t.id != id);
        Ok(())
    }
}

impl ScheduledAbsencesApi for FakeAdminApi {
    fn list_scheduled_absences(
        &self,
        page: PageRequest,
        filters: &ScheduledAbsenceFilters,
    ) -> Result<Page<ScheduledAbsence>, AppError> {
        self.record("list_scheduled_absences", Some(page), filters)?;
        let items = self
            .absences()
            .into_iter()
            .filter(|a| filters.person_id.as_deref().is_none_or(|p| a.person_id == p))
            .filter(|a| filters.absence_type_id.as_deref().is_none_or(|t| a.absence_type_id == t))
            .filter(|a| filters.start_date.is_none_or(|start| a.end_date >= start))
            .filter(|a| filters.end_date.is_none_or(|end| a.start_date <= end))
            .collect();
        Ok(paginate(items, page))
    }

    fn get_scheduled_absence(&self, id: &str) -> Result<ScheduledAbsence, AppError> {
        self.record(&format!("get_scheduled_absence {}", id), None, &())?;
        self.absences()
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("Scheduled absence"))
    }

    fn create_scheduled_absence(
        &self,
        payload: &ScheduledAbsencePayload,
    ) -> Result<ScheduledAbsence, AppError> {
        self.record("create_scheduled_absence", None, &())?;
        let created = ScheduledAbsence {
            id: self.next_id("absence"),
            person_id: payload.person_id.clone(),
            person: None,
            absence_type_id: payload.absence_type_id.clone(),
            absence_type: None,
            start_date: payload.start_date,
            end_date: payload.end_date,
            description: payload.description.clone(),
            created_at: None,
            updated_at: None,
        };
        self.lock().absences.push(created.clone());
        Ok(created)
    }

    fn update_scheduled_absence(
        &self,
        id: &str,
        update: &ScheduledAbsenceUpdate,
    ) -> Result<ScheduledAbsence, AppError> {
        self.record(&format!("update_scheduled_absence {}", id), None, &())?;
        let mut state = self.lock();
        let existing = state
            .absences
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("Scheduled absence"))?;
        if let Some(type_id) = &update.absence_type_id {
            existing.absence_type_id = type_id.clone();
        }
        if let Some(start) = update.start_date {
            existing.start_date = start;
        }
        if let Some(end) = update.end_date {
            existing.end_date = end;
        }
        if update.description.is_some() {
            existing.description = update.description.clone();
        }
        Ok(existing.clone())
    }

    fn delete_scheduled_absence(&self, id: &str) -> Result<(), AppError> {
        let call = format!("delete_scheduled_absence {}", id);
        self.record_delete(&call, Resource::ScheduledAbsence)?;
        self.lock().absences.retain(|a| a.id != id);
        Ok(())
    }
}

impl SchedulesApi for FakeAdminApi {
    fn list_schedules(
        &self,
        area_id: &str,
        page: PageRequest,
        filters: &ScheduleFilters,
    ) -> Result<Page<Schedule>, AppError> {
        self.record(&format!("list_schedules {}", area_id), Some(page), filters)?;
        let items = self
            .schedules()
            .into_iter()
            .filter(|s| s.scheduled_area_id == area_id)
            .filter(|s| {
                filters
                    .schedule_generation_id
                    .as_deref()
                    .is_none_or(|g| s.schedule_generation_id.as_deref() == Some(g))
            })
            .collect();
        Ok(paginate(items, page))
    }

    fn get_schedule(&self, area_id: &str, schedule_id: &str) -> Result<Schedule, AppError> {
        self.record(&format!("get_schedule {} {}", area_id, schedule_id), None, &())?;
        self.schedules()
            .into_iter()
            .find(|s| s.scheduled_area_id == area_id && s.id == schedule_id)
            .ok_or_else(|| not_found("Schedule"))
    }

    fn update_schedule(
        &self,
        area_id: &str,
        schedule_id: &str,
        update: &ScheduleUpdate,
    ) -> Result<Schedule, AppError> {
        self.record(&format!("update_schedule {} {}", area_id, schedule_id), None, &())?;
        let mut state = self.lock();
        let existing = state
            .schedules
            .iter_mut()
            .find(|s| s.scheduled_area_id == area_id && s.id == schedule_id)
            .ok_or_else(|| not_found("Schedule"))?;
        if let Some(start) = update.start_datetime {
            existing.start_datetime = start;
        }
        if let Some(end) = update.end_datetime {
            existing.end_datetime = end;
        }
        if update.status.is_some() {
            existing.status = update.status.clone();
        }
        Ok(existing.clone())
    }

    fn delete_schedule(&self, area_id: &str, schedule_id: &str) -> Result<(), AppError> {
        let call = format!("delete_schedule {} {}", area_id, schedule_id);
        self.record_delete(&call, Resource::Schedule)?;
        self.lock().schedules.retain(|s| s.id != schedule_id);
        Ok(())
    }

    fn add_schedule_comment(
        &self,
        area_id: &str,
        schedule_id: &str,
        comment: &CommentPayload,
    ) -> Result<ScheduleComment, AppError> {
        self.record(&format!("add_schedule_comment {} {}", area_id, schedule_id), None, &())?;
        let created = ScheduleComment {
            id: self.next_id("comment"),
            content: comment.content.clone(),
            author_id: None,
            author: None,
            created_at: None,
            updated_at: None,
        };
        let mut state = self.lock();
        let schedule = state
            .schedules
            .iter_mut()
            .find(|s| s.scheduled_area_id == area_id && s.id == schedule_id)
            .ok_or_else(|| not_found("Schedule"))?;
        schedule.comments.push(created.clone());
        Ok(created)
    }

    fn delete_schedule_comment(
        &self,
        area_id: &str,
        schedule_id: &str,
        comment_id: &str,
    ) -> Result<(), AppError> {
        let call = format!("delete_schedule_comment {} {} {}", area_id, schedule_id, comment_id);
        self.record_delete(&call, Resource::ScheduleComment)?;
        let mut state = self.lock();
        if let Some(schedule) = state.schedules.iter_mut().find(|s| s.id == schedule_id) {
            schedule.comments.retain(|c| c.id != comment_id);
        }
        Ok(())
    }
}

impl ScheduleGenerationsApi for FakeAdminApi {
    fn list_schedule_generations(
        &self,
        area_id: &str,
        page: PageRequest,
    ) -> Result<Page<ScheduleGeneration>, AppError> {
        self.record(&format!("list_schedule_generations {}", area_id), Some(page), &())?;
        let items: Vec<ScheduleGeneration> = self
            .lock()
            .generations
            .iter()
            .filter(|g| g.scheduled_area_id == area_id)
            .cloned()
            .collect();
        Ok(paginate(items, page))
    }

    fn get_schedule_generation(
        &self,
        area_id: &str,
        generation_id: &str,
    ) -> Result<ScheduleGeneration, AppError> {
        self.record(&format!("get_schedule_generation {} {}", area_id, generation_id), None, &())?;
        self.lock()
            .generations
            .iter()
            .find(|g| g.scheduled_area_id == area_id && g.id == generation_id)
            .cloned()
            .ok_or_else(|| not_found("Schedule generation"))
    }

    fn delete_schedule_generation(
        &self,
        area_id: &str,
        generation_id: &str,
    ) -> Result<(), AppError> {
        let call = format!("delete_schedule_generation {} {}", area_id, generation_id);
        self.record_delete(&call, Resource::ScheduleGeneration)?;
        let mut state = self.lock();
        state.generations.retain(|g| g.id != generation_id);
        state.schedules.retain(|s| s.schedule_generation_id.as_deref() != Some(generation_id));
        Ok(())
    }
}

impl GroupsApi for FakeAdminApi {
    fn list_groups(
        &self,
        area_id: &str,
        page: PageRequest,
        filters: &GroupFilters,
    ) -> Result<Page<AreaGroup>, AppError> {
        self.record(&format!("list_groups {}", area_id), Some(page), filters)?;
        let items: Vec<AreaGroup> = self
            .lock()
            .groups
            .iter()
            .filter(|g| g.scheduled_area_id.as_deref().is_none_or(|a| a == area_id))
            .filter(|g| {
                filters.name.as_deref().is_none_or(|n| contains_ignore_case(&g.name, n))
            })
            .cloned()
            .collect();
        Ok(paginate(items, page))
    }

    fn get_group(&self, area_id: &str, group_id: &str) -> Result<AreaGroup, AppError> {
        self.record(&format!("get_group {} {}", area_id, group_id), None, &())?;
        let state = self.lock();
        state.groups.iter().find(|g| g.id == group_id).cloned().ok_or_else(|| not_found("Group"))
    }
}
