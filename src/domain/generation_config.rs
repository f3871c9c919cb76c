//! Flattening of schedule-generation configurations.
//!
//! A generation stores its settings as a nested object whose shape depends on
//! the generation type:
//!
//! - `group` reads `groupConfig`
//! - `people` reads `peopleConfig`
//! - `team_with_restriction` / `team_without_restriction` read `teamConfig`
//!
//! Period settings (weekdays, time window, included/excluded dates) live at the
//! configuration root or under `periodConfig`. Group references arrive either
//! as bare IDs or as `{id, name, imageUrl}` objects.
//!
//! Mapping is best-effort: fields that are absent or have an unexpected shape
//! are left as `None`, and no error is ever returned.

use serde::Serialize;

use crate::domain::{AreaGroup, GenerationType, GroupSummary, ScheduleGeneration};

/// Flat view of a generation's configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGroupConfiguration {
    pub generation_type: GenerationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end_date: Option<String>,
    /// Days of week, 0 = Sunday through 6 = Saturday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_groups: Option<Vec<GroupSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_group_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_per_schedule: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_distribution_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_person_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_per_schedule: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_team_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_selection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consider_absences: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_dates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_dates: Option<Vec<String>>,
}

/// Flatten a generation's configuration without group name lookup.
pub fn map_generation_configuration(generation: &ScheduleGeneration) -> ScheduleGroupConfiguration {
    ConfigurationMapper::default().map(generation)
}

/// Configuration mapper with an optional lookup used to name bare group IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationMapper<'a> {
    known_groups: &'a [AreaGroup],
}

impl<'a> ConfigurationMapper<'a> {
    pub fn with_known_groups(known_groups: &'a [AreaGroup]) -> Self {
        Self { known_groups }
    }

    pub fn map(&self, generation: &ScheduleGeneration) -> ScheduleGroupConfiguration {
        let raw = raw::ConfigurationDto::from_value(&generation.configuration);
        let period = raw.period_config.clone().unwrap_or_default();

        let mut flat = ScheduleGroupConfiguration {
            generation_type: generation.generation_type,
            period_type: raw
                .period_type
                .clone()
                .or_else(|| period.period_type.clone())
                .or_else(|| generation.period_type.clone()),
            period_start_date: raw
                .period_start_date
                .clone()
                .or_else(|| period.period_start_date.clone())
                .or_else(|| generation.period_start_date.clone()),
            period_end_date: raw
                .period_end_date
                .clone()
                .or_else(|| period.period_end_date.clone())
                .or_else(|| generation.period_end_date.clone()),
            weekdays: raw
                .weekdays
                .clone()
                .or_else(|| period.weekdays.clone())
                .map(|days| days.iter().filter_map(raw::WeekdayDto::index).collect()),
            start_time: raw.start_time.clone().or_else(|| period.start_time.clone()),
            end_time: raw.end_time.clone().or_else(|| period.end_time.clone()),
            included_dates: raw.included_dates.clone().or_else(|| period.included_dates.clone()),
            excluded_dates: raw.excluded_dates.clone().or_else(|| period.excluded_dates.clone()),
            ..Default::default()
        };

        match generation.generation_type {
            GenerationType::Group => {
                if let Some(config) = &raw.group_config {
                    self.apply_group_config(&mut flat, config);
                }
            }
            GenerationType::People => {
                if let Some(config) = &raw.people_config {
                    apply_people_config(&mut flat, config);
                }
            }
            GenerationType::TeamWithRestriction | GenerationType::TeamWithoutRestriction => {
                if let Some(config) = &raw.team_config {
                    self.apply_team_config(&mut flat, config, generation.generation_type);
                }
            }
            GenerationType::Unknown => {}
        }

        if flat.consider_absences.is_none() && generation.generation_type != GenerationType::Unknown
        {
            flat.consider_absences = raw.consider_absences;
        }

        flat
    }

    fn apply_group_config(
        &self,
        flat: &mut ScheduleGroupConfiguration,
        config: &raw::GroupConfigDto,
    ) {
        self.set_groups(flat, config.groups.as_deref(), config.group_ids.as_deref());
        flat.groups_per_schedule = config.groups_per_schedule;
        flat.group_distribution_order = config.distribution_order.clone();
        flat.consider_absences = config.consider_absences;
    }

    fn apply_team_config(
        &self,
        flat: &mut ScheduleGroupConfiguration,
        config: &raw::TeamConfigDto,
        generation_type: GenerationType,
    ) {
        flat.selected_team_id = config
            .team_id
            .clone()
            .or_else(|| config.team.as_ref().map(|team| team.id.clone()));
        flat.selected_team_name = config
            .team
            .as_ref()
            .and_then(|team| team.name.clone())
            .or_else(|| config.team_name.clone());
        flat.participant_selection = config.participant_selection.clone();
        flat.consider_absences = config.consider_absences;

        if generation_type == GenerationType::TeamWithRestriction {
            self.set_groups(flat, config.groups.as_deref(), config.group_ids.as_deref());
        }
    }

    fn set_groups(
        &self,
        flat: &mut ScheduleGroupConfiguration,
        objects: Option<&[raw::EntityRefDto]>,
        ids: Option<&[raw::EntityRefDto]>,
    ) {
        if objects.is_none() && ids.is_none() {
            return;
        }

        let mut groups: Vec<GroupSummary> = Vec::new();
        for reference in objects.unwrap_or_default().iter().chain(ids.unwrap_or_default()) {
            let summary = self.resolve_group(reference);
            if summary.id.is_empty() || groups.iter().any(|g| g.id == summary.id) {
                continue;
            }
            groups.push(summary);
        }

        flat.selected_group_ids = Some(groups.iter().map(|g| g.id.clone()).collect());
        flat.selected_group_names = Some(
            groups.iter().filter(|g| !g.name.is_empty()).map(|g| g.name.clone()).collect(),
        );
        flat.selected_groups = Some(groups);
    }

    fn resolve_group(&self, reference: &raw::EntityRefDto) -> GroupSummary {
        let known = self.known_groups.iter().find(|g| g.id == reference.id());
        let name = reference
            .name()
            .map(ToOwned::to_owned)
            .or_else(|| known.map(|g| g.name.clone()))
            .unwrap_or_default();
        let image_url = reference
            .image_url()
            .map(ToOwned::to_owned)
            .or_else(|| known.and_then(|g| g.image_url.clone()));

        GroupSummary { id: reference.id(), name, image_url }
    }
}

fn apply_people_config(flat: &mut ScheduleGroupConfiguration, config: &raw::PeopleConfigDto) {
    if config.people.is_some() || config.person_ids.is_some() {
        let mut ids: Vec<String> = Vec::new();
        let refs = config.people.as_deref().unwrap_or_default().iter();
        for reference in refs.chain(config.person_ids.as_deref().unwrap_or_default()) {
            let id = reference.id();
            if !id.is_empty() && !ids.contains(&id) {
                ids.push(id);
            }
        }
        flat.selected_person_ids = Some(ids);
    }
    flat.people_per_schedule = config.people_per_schedule;
    flat.participant_selection =
        config.participant_selection.clone().or_else(|| config.distribution_order.clone());
    flat.consider_absences = config.consider_absences;
}

mod raw {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Keep the field only if it has the expected shape.
    fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }

    /// Keep the array, dropping elements with an unexpected shape.
    fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => {
                let kept = items.into_iter().filter_map(|item| serde_json::from_value(item).ok());
                Some(kept.collect())
            }
            _ => None,
        })
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ConfigurationDto {
        #[serde(default, deserialize_with = "lenient")]
        pub period_type: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub period_start_date: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub period_end_date: Option<String>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub weekdays: Option<Vec<WeekdayDto>>,
        #[serde(default, deserialize_with = "lenient")]
        pub start_time: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub end_time: Option<String>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub included_dates: Option<Vec<String>>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub excluded_dates: Option<Vec<String>>,
        #[serde(default, deserialize_with = "lenient")]
        pub consider_absences: Option<bool>,
        #[serde(default, deserialize_with = "lenient")]
        pub period_config: Option<PeriodDto>,
        #[serde(default, deserialize_with = "lenient")]
        pub group_config: Option<GroupConfigDto>,
        #[serde(default, deserialize_with = "lenient")]
        pub people_config: Option<PeopleConfigDto>,
        #[serde(default, deserialize_with = "lenient")]
        pub team_config: Option<TeamConfigDto>,
    }

    impl ConfigurationDto {
        pub fn from_value(value: &Value) -> Self {
            Self::deserialize(value).unwrap_or_default()
        }
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PeriodDto {
        #[serde(default, deserialize_with = "lenient")]
        pub period_type: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub period_start_date: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub period_end_date: Option<String>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub weekdays: Option<Vec<WeekdayDto>>,
        #[serde(default, deserialize_with = "lenient")]
        pub start_time: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub end_time: Option<String>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub included_dates: Option<Vec<String>>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub excluded_dates: Option<Vec<String>>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GroupConfigDto {
        #[serde(default, deserialize_with = "lenient_list")]
        pub group_ids: Option<Vec<EntityRefDto>>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub groups: Option<Vec<EntityRefDto>>,
        #[serde(default, deserialize_with = "lenient")]
        pub groups_per_schedule: Option<u32>,
        #[serde(default, deserialize_with = "lenient")]
        pub distribution_order: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub consider_absences: Option<bool>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PeopleConfigDto {
        #[serde(default, deserialize_with = "lenient_list")]
        pub person_ids: Option<Vec<EntityRefDto>>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub people: Option<Vec<EntityRefDto>>,
        #[serde(default, deserialize_with = "lenient")]
        pub people_per_schedule: Option<u32>,
        #[serde(default, deserialize_with = "lenient")]
        pub participant_selection: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub distribution_order: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub consider_absences: Option<bool>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TeamConfigDto {
        #[serde(default, deserialize_with = "lenient")]
        pub team_id: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub team_name: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub team: Option<TeamDto>,
        #[serde(default, deserialize_with = "lenient")]
        pub participant_selection: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        pub consider_absences: Option<bool>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub group_ids: Option<Vec<EntityRefDto>>,
        #[serde(default, deserialize_with = "lenient_list")]
        pub groups: Option<Vec<EntityRefDto>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TeamDto {
        pub id: String,
        #[serde(default)]
        pub name: Option<String>,
    }

    /// Reference to a group or person: a bare ID or an object.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(untagged)]
    pub enum EntityRefDto {
        Id(String),
        NumericId(i64),
        Object {
            id: IdDto,
            #[serde(default, alias = "fullName")]
            name: Option<String>,
            #[serde(default, rename = "imageUrl")]
            image_url: Option<String>,
        },
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(untagged)]
    pub enum IdDto {
        Text(String),
        Number(i64),
    }

    impl EntityRefDto {
        pub fn id(&self) -> String {
            match self {
                EntityRefDto::Id(id) => id.clone(),
                EntityRefDto::NumericId(id) => id.to_string(),
                EntityRefDto::Object { id: IdDto::Text(id), .. } => id.clone(),
                EntityRefDto::Object { id: IdDto::Number(id), .. } => id.to_string(),
            }
        }

        pub fn name(&self) -> Option<&str> {
            match self {
                EntityRefDto::Object { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
                _ => None,
            }
        }

        pub fn image_url(&self) -> Option<&str> {
            match self {
                EntityRefDto::Object { image_url, .. } => image_url.as_deref(),
                _ => None,
            }
        }
    }

    /// Weekday as index (0 = Sunday) or English/Portuguese name.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(untagged)]
    pub enum WeekdayDto {
        Index(i64),
        Name(String),
    }

    impl WeekdayDto {
        pub fn index(&self) -> Option<u8> {
            match self {
                WeekdayDto::Index(i) => u8::try_from(*i).ok().filter(|d| *d <= 6),
                WeekdayDto::Name(name) => match name.trim().to_lowercase().as_str() {
                    "sunday" | "sun" | "domingo" => Some(0),
                    "monday" | "mon" | "segunda" => Some(1),
                    "tuesday" | "tue" | "terca" | "terça" => Some(2),
                    "wednesday" | "wed" | "quarta" => Some(3),
                    "thursday" | "thu" | "quinta" => Some(4),
                    "friday" | "fri" | "sexta" => Some(5),
                    "saturday" | "sat" | "sabado" | "sábado" => Some(6),
                    other => other.parse::<u8>().ok().filter(|d| *d <= 6),
                },
            }
        }
    }
}
