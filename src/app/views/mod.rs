//! List and detail view-models.

mod absence_types;
mod absences;
mod generation_detail;
mod generations;
mod groups;
mod list_state;
mod schedule_detail;
mod schedules;

pub use absence_types::{AbsenceTypeRow, AbsenceTypesView};
pub use absences::{AbsenceRow, AbsencesView};
pub use generation_detail::GenerationDetail;
pub use generations::{GenerationRow, GenerationsView};
pub use groups::{GroupRow, GroupsView};
pub use list_state::{ListState, LoadRequest};
pub use schedule_detail::{CommentRow, MemberRow, ScheduleDetail};
pub use schedules::{ScheduleRow, SchedulesView};
