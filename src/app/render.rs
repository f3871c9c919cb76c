//! Plain-text rendering of view-models with minijinja templates.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::app::views::{GenerationDetail, ListState, ScheduleDetail};
use crate::domain::{AppError, ListFilters, ScheduleGroupConfiguration};

const ABSENCE_TYPES: &str = "\
{% for row in rows %}
{{ row.id }}  {{ row.name }}  [{{ row.status }}]{% if row.color %}  {{ row.color }}{% endif %}

{% if row.description %}    {{ row.description }}
{% endif %}
{% else %}
No absence types found.
{% endfor %}
Page {{ page }}/{{ total_pages }} ({{ total }} total)
";

const ABSENCES: &str = "\
{% for row in rows %}
{{ row.id }}  {{ row.person }}  {{ row.absence_type }}  {{ row.start_date }} to {{ row.end_date }} ({{ row.days }} day{% if row.days != 1 %}s{% endif %})
{% if row.description %}    {{ row.description }}
{% endif %}
{% else %}
No scheduled absences found.
{% endfor %}
Page {{ page }}/{{ total_pages }} ({{ total }} total)
";

const SCHEDULES: &str = "\
{% for row in rows %}
{{ row.id }}  {{ row.start }} - {{ row.end }}  {{ row.assignee }}  {{ row.participants }} participant(s){% if row.status %}  [{{ row.status }}]{% endif %}

{% else %}
No schedules found.
{% endfor %}
Page {{ page }}/{{ total_pages }} ({{ total }} total)
";

const GENERATIONS: &str = "\
{% for row in rows %}
{{ row.id }}  {{ row.generation_type }}  {{ row.period }}  {{ row.total_schedules }} schedule(s)
{% else %}
No schedule generations found.
{% endfor %}
Page {{ page }}/{{ total_pages }} ({{ total }} total)
";

const GROUPS: &str = "\
{% for row in rows %}
{{ row.id }}  {{ row.name }}{% if row.members is not none %}  {{ row.members }} member(s){% endif %}

{% else %}
No groups found.
{% endfor %}
Page {{ page }}/{{ total_pages }} ({{ total }} total)
";

const SCHEDULE_DETAIL: &str = "\
Schedule {{ detail.id }}
  When:         {{ detail.start }} - {{ detail.end }}
  Assigned to:  {{ detail.assignee }}
{% if detail.status %}
  Status:       {{ detail.status }}
{% endif %}
{% if detail.generation_id %}
  Generation:   {{ detail.generation_id }}
{% endif %}

Members ({{ detail.participants }}):
{% for m in detail.members %}
  - {{ m.name }}{% if m.responsibility %} ({{ m.responsibility }}){% endif %}{% if m.status %} [{{ m.status }}]{% endif %}{% if m.present is not none %} present: {{ 'yes' if m.present else 'no' }}{% endif %}

{% else %}
  (none)
{% endfor %}

Comments:
{% for c in detail.comments %}
  - {% if c.created_at %}{{ c.created_at }} {% endif %}{% if c.author %}{{ c.author }}: {% endif %}{{ c.content }}
{% else %}
  (none)
{% endfor %}
";

const GENERATION_DETAIL: &str = "\
Generation {{ detail.id }} ({{ detail.generation_type }})
{% if detail.created_at %}
  Created:      {{ detail.created_at }}{% if detail.created_by %} by {{ detail.created_by }}{% endif %}

{% endif %}
  Schedules:    {{ detail.total_schedules_generated }}

Configuration:
{% for setting in settings %}
  {{ setting.label }}: {{ setting.value }}
{% endfor %}

Schedules ({{ detail.schedules_total }}):
{% for row in detail.schedules %}
  - {{ row.id }}  {{ row.start }} - {{ row.end }}  {{ row.assignee }}
{% else %}
  (none)
{% endfor %}
";

/// Built-in text templates, one per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    AbsenceTypes,
    Absences,
    Schedules,
    Generations,
    Groups,
    ScheduleDetail,
    GenerationDetail,
}

impl Template {
    fn name(&self) -> &'static str {
        match self {
            Template::AbsenceTypes => "absence_types",
            Template::Absences => "absences",
            Template::Schedules => "schedules",
            Template::Generations => "generations",
            Template::Groups => "groups",
            Template::ScheduleDetail => "schedule_detail",
            Template::GenerationDetail => "generation_detail",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Template::AbsenceTypes => ABSENCE_TYPES,
            Template::Absences => ABSENCES,
            Template::Schedules => SCHEDULES,
            Template::Generations => GENERATIONS,
            Template::Groups => GROUPS,
            Template::ScheduleDetail => SCHEDULE_DETAIL,
            Template::GenerationDetail => GENERATION_DETAIL,
        }
    }

    const ALL: [Template; 7] = [
        Template::AbsenceTypes,
        Template::Absences,
        Template::Schedules,
        Template::Generations,
        Template::Groups,
        Template::ScheduleDetail,
        Template::GenerationDetail,
    ];
}

/// One page of display rows plus its pagination footer.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput<R> {
    pub rows: Vec<R>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl<R> ListOutput<R> {
    pub fn from_state<F: ListFilters, T>(state: &ListState<F, T>, rows: Vec<R>) -> Self {
        Self { rows, page: state.page(), total_pages: state.total_pages(), total: state.total() }
    }
}

#[derive(Debug, Serialize)]
struct Setting {
    label: &'static str,
    value: String,
}

static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

fn environment() -> Result<&'static Environment<'static>, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        for template in Template::ALL {
            env.add_template(template.name(), template.source()).map_err(|err| err.to_string())?;
        }
        Ok(env)
    });
    env.as_ref()
        .map_err(|err| AppError::config_error(format!("Failed to load templates: {}", err)))
}

fn render_with<C: Serialize>(template: Template, ctx: C) -> Result<String, AppError> {
    environment()?
        .get_template(template.name())
        .and_then(|tmpl| tmpl.render(ctx))
        .map_err(|err| {
            AppError::config_error(format!("Failed to render {} view: {}", template.name(), err))
        })
}

/// Render a list page with one of the list templates.
pub fn render_list<R: Serialize>(
    template: Template,
    output: &ListOutput<R>,
) -> Result<String, AppError> {
    render_with(template, output)
}

pub fn render_schedule_detail(detail: &ScheduleDetail) -> Result<String, AppError> {
    render_with(Template::ScheduleDetail, context! { detail => detail })
}

pub fn render_generation_detail(detail: &GenerationDetail) -> Result<String, AppError> {
    let settings = configuration_settings(&detail.configuration);
    render_with(Template::GenerationDetail, context! { detail => detail, settings => settings })
}

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Labelled lines for every configuration field that is set.
fn configuration_settings(config: &ScheduleGroupConfiguration) -> Vec<Setting> {
    let mut settings = Vec::new();
    let mut push = |label: &'static str, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            settings.push(Setting { label, value });
        }
    };
    let join = |values: &Option<Vec<String>>| values.as_ref().map(|v| v.join(", "));

    push("Period", config.period_type.clone());
    push(
        "Dates",
        match (&config.period_start_date, &config.period_end_date) {
            (Some(start), Some(end)) => Some(format!("{} to {}", start, end)),
            (Some(start), None) => Some(format!("from {}", start)),
            (None, Some(end)) => Some(format!("until {}", end)),
            (None, None) => None,
        },
    );
    push(
        "Weekdays",
        config.weekdays.as_ref().map(|days| {
            days.iter()
                .filter_map(|d| WEEKDAY_NAMES.get(usize::from(*d)).copied())
                .collect::<Vec<_>>()
                .join(", ")
        }),
    );
    push(
        "Time",
        match (&config.start_time, &config.end_time) {
            (Some(start), Some(end)) => Some(format!("{}-{}", start, end)),
            (Some(start), None) => Some(start.clone()),
            (None, Some(end)) => Some(format!("until {}", end)),
            (None, None) => None,
        },
    );
    push("Groups", join(&config.selected_group_names));
    push("Group IDs", join(&config.selected_group_ids));
    push("Groups per schedule", config.groups_per_schedule.map(|n| n.to_string()));
    push("Group order", config.group_distribution_order.clone());
    push("People", join(&config.selected_person_ids));
    push("People per schedule", config.people_per_schedule.map(|n| n.to_string()));
    push(
        "Team",
        config.selected_team_name.clone().or_else(|| config.selected_team_id.clone()),
    );
    push("Participant selection", config.participant_selection.clone());
    push(
        "Consider absences",
        config.consider_absences.map(|v| String::from(if v { "yes" } else { "no" })),
    );
    push("Included dates", join(&config.included_dates));
    push("Excluded dates", join(&config.excluded_dates));
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::views::{AbsenceTypeRow, GroupRow};
    use crate::domain::{GenerationType, Page, Responsibility};
    use crate::testing::fixtures::{absence_type, comment, member, schedule};

    #[test]
    fn list_renders_rows_and_footer() {
        let rows = vec![AbsenceTypeRow::from(&absence_type("t-1", "Férias"))];
        let output = ListOutput { rows, page: 1, total_pages: 3, total: 21 };

        let text = render_list(Template::AbsenceTypes, &output).unwrap();

        assert!(text.contains("t-1  Férias  [active]  #3366ff"));
        assert!(text.contains("Page 1/3 (21 total)"));
    }

    #[test]
    fn empty_list_says_so() {
        let output: ListOutput<GroupRow> =
            ListOutput { rows: vec![], page: 1, total_pages: 0, total: 0 };
        let text = render_list(Template::Groups, &output).unwrap();
        assert!(text.starts_with("No groups found."));
    }

    #[test]
    fn list_output_reads_state_footer() {
        let mut state: ListState<(), u32> = ListState::new(10);
        let page = Page { data: vec![1], page: 1, limit: 10, total: 11, total_pages: 2 };
        state.load_with(|_, _| Ok(page)).unwrap();
        let output = ListOutput::from_state(&state, vec!["x"]);
        assert_eq!((output.page, output.total_pages, output.total), (1, 2, 11));
    }

    #[test]
    fn schedule_detail_lists_members_then_comments() {
        let mut s = schedule("s-1", "area-1", Some("gen-1"));
        let mut ana = member("m-1", "p-1", "Ana");
        ana.responsibility =
            Some(Responsibility { id: "r-1".into(), name: "Vocal".into(), image_url: None });
        ana.present = Some(false);
        s.members = vec![ana];
        s.comments = vec![comment("c-2", "segundo", 10), comment("c-1", "primeiro", 9)];

        let text = render_schedule_detail(&ScheduleDetail::from_schedule(&s)).unwrap();

        assert!(text.contains("Schedule s-1"));
        assert!(text.contains("- Ana (Vocal) [pending] present: no"));
        let first = text.find("primeiro").unwrap();
        let second = text.find("segundo").unwrap();
        assert!(first < second);
    }

    #[test]
    fn configuration_settings_skip_unset_fields() {
        let config = ScheduleGroupConfiguration {
            generation_type: GenerationType::People,
            weekdays: Some(vec![0, 6]),
            start_time: Some("08:00".into()),
            end_time: Some("12:00".into()),
            people_per_schedule: Some(3),
            ..Default::default()
        };

        let settings = configuration_settings(&config);
        let labels: Vec<&str> = settings.iter().map(|s| s.label).collect();

        assert_eq!(labels, vec!["Weekdays", "Time", "People per schedule"]);
        assert_eq!(settings[0].value, "Sun, Sat");
        assert_eq!(settings[1].value, "08:00-12:00");
    }
}
