use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::domain::{
    AbsenceType, AreaGroup, GenerationType, Person, Schedule, ScheduleComment, ScheduleGeneration,
    ScheduleMember, ScheduledAbsence,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn person(id: &str, name: &str) -> Person {
    Person { id: id.into(), full_name: name.into(), email: None, phone: None, photo_url: None }
}

pub fn absence_type(id: &str, name: &str) -> AbsenceType {
    AbsenceType {
        id: id.into(),
        name: name.into(),
        description: None,
        color: Some("#3366ff".into()),
        icon: None,
        active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn scheduled_absence(
    id: &str,
    person_id: &str,
    type_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> ScheduledAbsence {
    ScheduledAbsence {
        id: id.into(),
        person_id: person_id.into(),
        person: Some(person(person_id, &format!("Person {}", person_id))),
        absence_type_id: type_id.into(),
        absence_type: None,
        start_date: start,
        end_date: end,
        description: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn member(id: &str, person_id: &str, name: &str) -> ScheduleMember {
    ScheduleMember {
        id: id.into(),
        person_id: person_id.into(),
        person: Some(person(person_id, name)),
        responsibility_id: None,
        responsibility: None,
        status: Some("pending".into()),
        present: None,
    }
}

pub fn comment(id: &str, content: &str, hour: u32) -> ScheduleComment {
    ScheduleComment {
        id: id.into(),
        content: content.into(),
        author_id: None,
        author: None,
        created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()),
        updated_at: None,
    }
}

pub fn schedule(id: &str, area_id: &str, generation_id: Option<&str>) -> Schedule {
    Schedule {
        id: id.into(),
        scheduled_area_id: area_id.into(),
        schedule_generation_id: generation_id.map(Into::into),
        start_datetime: Utc.with_ymd_and_hms(2024, 5, 5, 9, 0, 0).unwrap(),
        end_datetime: Utc.with_ymd_and_hms(2024, 5, 5, 12, 0, 0).unwrap(),
        schedule_type: Some("group".into()),
        group_id: None,
        group: None,
        team_id: None,
        team: None,
        status: None,
        participants_count: None,
        members: Vec::new(),
        comments: Vec::new(),
        created_at: None,
    }
}

pub fn generation(
    id: &str,
    area_id: &str,
    generation_type: GenerationType,
    configuration: Value,
) -> ScheduleGeneration {
    ScheduleGeneration {
        id: id.into(),
        scheduled_area_id: area_id.into(),
        generation_type,
        period_type: Some("monthly".into()),
        period_start_date: Some("2024-05-01".into()),
        period_end_date: Some("2024-05-31".into()),
        configuration,
        total_schedules_generated: Some(4),
        created_at: None,
        created_by: None,
    }
}

pub fn area_group(id: &str, area_id: &str, name: &str) -> AreaGroup {
    AreaGroup {
        id: id.into(),
        scheduled_area_id: Some(area_id.into()),
        name: name.into(),
        description: None,
        image_url: None,
        members_count: Some(3),
    }
}
