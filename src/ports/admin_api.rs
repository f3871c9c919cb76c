//! Aggregate port over every REST resource.

use super::{
    AbsenceTypesApi, GroupsApi, ScheduleGenerationsApi, ScheduledAbsencesApi, SchedulesApi,
};

/// Every resource port the admin client uses. Implemented automatically for
/// any type that implements all of them.
pub trait AdminApi:
    AbsenceTypesApi + ScheduledAbsencesApi + SchedulesApi + ScheduleGenerationsApi + GroupsApi
{
}

impl<T> AdminApi for T where
    T: AbsenceTypesApi + ScheduledAbsencesApi + SchedulesApi + ScheduleGenerationsApi + GroupsApi
{
}
