mod absence_types;
mod endpoints;
mod groups;
mod http;
mod schedule_generations;
mod scheduled_absences;
mod schedules;

pub use self::endpoints::Endpoints;
pub use self::http::HttpApiClient;
