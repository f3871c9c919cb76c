use chrono::NaiveDate;
use log::info;

use super::{NavigateTo, Submitted, optional_text};
use crate::domain::{
    AppError, RequiredFields, ScheduledAbsence, ScheduledAbsencePayload, ScheduledAbsenceUpdate,
};
use crate::ports::ScheduledAbsencesApi;

/// Create/edit form for a scheduled absence. The person cannot be changed
/// once the absence exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduledAbsenceForm {
    pub person_id: String,
    pub absence_type_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    editing: Option<String>,
}

impl ScheduledAbsenceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(api: &impl ScheduledAbsencesApi, id: &str) -> Result<Self, AppError> {
        api.get_scheduled_absence(id).map(|absence| Self::from_entity(&absence))
    }

    pub fn from_entity(absence: &ScheduledAbsence) -> Self {
        Self {
            person_id: absence.person_id.clone(),
            absence_type_id: absence.absence_type_id.clone(),
            start_date: Some(absence.start_date),
            end_date: Some(absence.end_date),
            description: absence.description.clone().unwrap_or_default(),
            editing: Some(absence.id.clone()),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Checks required fields, then the date order. Returns the validated range.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        RequiredFields::new()
            .text("personId", Some(self.person_id.as_str()))
            .text("absenceTypeId", Some(self.absence_type_id.as_str()))
            .present("startDate", self.start_date.as_ref())
            .present("endDate", self.end_date.as_ref())
            .finish()?;

        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err(AppError::MissingFields(vec!["startDate".into(), "endDate".into()]));
        };
        if end < start {
            return Err(AppError::InvalidInput(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }
        Ok((start, end))
    }

    pub fn submit(
        &self,
        api: &impl ScheduledAbsencesApi,
    ) -> Result<Submitted<ScheduledAbsence>, AppError> {
        let (start_date, end_date) = self.validate()?;
        let entity = match &self.editing {
            Some(id) => {
                let update = ScheduledAbsenceUpdate {
                    absence_type_id: Some(self.absence_type_id.trim().to_string()),
                    start_date: Some(start_date),
                    end_date: Some(end_date),
                    description: Some(self.description.trim().to_string()),
                };
                api.update_scheduled_absence(id, &update)?
            }
            None => {
                let payload = ScheduledAbsencePayload {
                    person_id: self.person_id.trim().to_string(),
                    absence_type_id: self.absence_type_id.trim().to_string(),
                    start_date,
                    end_date,
                    description: optional_text(&self.description),
                };
                api.create_scheduled_absence(&payload)?
            }
        };
        info!("Saved scheduled absence {}", entity.id);
        Ok(Submitted { entity, navigate_to: NavigateTo::ScheduledAbsences })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeAdminApi;
    use crate::testing::fixtures::{date, scheduled_absence};

    #[test]
    fn lists_every_missing_field() {
        let form = ScheduledAbsenceForm { person_id: "p-1".into(), ..Default::default() };

        match form.validate().unwrap_err() {
            AppError::MissingFields(fields) => {
                assert_eq!(fields, vec!["absenceTypeId", "startDate", "endDate"])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn end_before_start_is_rejected() {
        let api = FakeAdminApi::new();
        let form = ScheduledAbsenceForm {
            person_id: "p-1".into(),
            absence_type_id: "t-1".into(),
            start_date: Some(date(2024, 5, 10)),
            end_date: Some(date(2024, 5, 9)),
            ..Default::default()
        };

        let err = form.submit(&api).unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn single_day_absence_is_valid() {
        let api = FakeAdminApi::new();
        let form = ScheduledAbsenceForm {
            person_id: "p-1".into(),
            absence_type_id: "t-1".into(),
            start_date: Some(date(2024, 5, 10)),
            end_date: Some(date(2024, 5, 10)),
            description: "  ".into(),
            ..Default::default()
        };

        let submitted = form.submit(&api).unwrap();

        assert_eq!(submitted.navigate_to, NavigateTo::ScheduledAbsences);
        assert_eq!(submitted.entity.description, None);
        assert_eq!(submitted.entity.duration_days(), 1);
    }

    #[test]
    fn edit_keeps_person_and_updates_dates() {
        let api = FakeAdminApi::new().with_absences(vec![scheduled_absence(
            "a-1",
            "p-1",
            "t-1",
            date(2024, 5, 1),
            date(2024, 5, 3),
        )]);
        let mut form = ScheduledAbsenceForm::edit(&api, "a-1").unwrap();
        assert_eq!(form.start_date, Some(date(2024, 5, 1)));

        form.person_id = "p-2".into();
        form.end_date = Some(date(2024, 5, 5));
        let submitted = form.submit(&api).unwrap();

        assert_eq!(submitted.entity.person_id, "p-1");
        assert_eq!(api.absences()[0].end_date, date(2024, 5, 5));
    }
}
