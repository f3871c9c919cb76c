pub mod absence;
pub mod configuration;
pub mod delete_status;
pub mod error;
pub mod filters;
pub mod generation;
pub mod generation_config;
pub mod group;
pub mod pagination;
pub mod person;
pub mod schedule;
pub mod validation;

pub use absence::{
    AbsenceType, AbsenceTypeFilters, AbsenceTypePayload, ScheduledAbsence,
    ScheduledAbsenceFilters, ScheduledAbsencePayload, ScheduledAbsenceUpdate,
};
pub use configuration::{AdminConfig, ApiConfig, AuthConfig, ViewsConfig, parse_config_content};
pub use delete_status::{DeleteFailure, Resource, delete_failure_message};
pub use error::AppError;
pub use filters::ListFilters;
pub use generation::{GenerationType, ScheduleGeneration};
pub use generation_config::{
    ConfigurationMapper, ScheduleGroupConfiguration, map_generation_configuration,
};
pub use group::{AreaGroup, GroupFilters, GroupSummary, TeamSummary};
pub use pagination::{Page, PageRequest};
pub use person::Person;
pub use schedule::{
    CommentPayload, Responsibility, Schedule, ScheduleComment, ScheduleFilters, ScheduleMember,
    ScheduleUpdate,
};
pub use validation::RequiredFields;
