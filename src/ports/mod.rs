mod absence_types;
mod admin_api;
mod groups;
mod schedule_generations;
mod scheduled_absences;
mod schedules;
mod token_store;

pub use absence_types::AbsenceTypesApi;
pub use admin_api::AdminApi;
pub use groups::GroupsApi;
pub use schedule_generations::ScheduleGenerationsApi;
pub use scheduled_absences::ScheduledAbsencesApi;
pub use schedules::SchedulesApi;
pub use token_store::TokenStore;
