use chrono::NaiveDate;
use clap::Subcommand;

use super::Output;
use super::output::confirm_delete;
use crate::app::AppContext;
use crate::app::forms::ScheduledAbsenceForm;
use crate::app::render::{ListOutput, Template};
use crate::app::views::{AbsenceRow, AbsencesView};
use crate::domain::{AppError, ScheduledAbsenceFilters};
use crate::ports::AdminApi;

#[derive(Subcommand)]
pub enum AbsenceCommands {
    /// List scheduled absences
    #[clap(visible_alias = "ls")]
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
        /// Only absences of this person
        #[arg(long)]
        person_id: Option<String>,
        /// Filter by person name
        #[arg(long)]
        person_name: Option<String>,
        /// Filter by absence type
        #[arg(long = "type-id")]
        absence_type_id: Option<String>,
        /// Absences ending on or after this date (YYYY-MM-DD)
        #[arg(long = "from")]
        start_date: Option<NaiveDate>,
        /// Absences starting on or before this date (YYYY-MM-DD)
        #[arg(long = "to")]
        end_date: Option<NaiveDate>,
    },
    /// Show one scheduled absence
    Show { id: String },
    /// Schedule an absence for a person
    Create {
        #[arg(long)]
        person_id: String,
        #[arg(long = "type-id")]
        absence_type_id: String,
        /// First day (YYYY-MM-DD)
        #[arg(long = "start")]
        start_date: NaiveDate,
        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long = "end")]
        end_date: NaiveDate,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a scheduled absence; omitted fields keep their current value
    Update {
        id: String,
        #[arg(long = "type-id")]
        absence_type_id: Option<String>,
        #[arg(long = "start")]
        start_date: Option<NaiveDate>,
        #[arg(long = "end")]
        end_date: Option<NaiveDate>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a scheduled absence
    #[clap(visible_alias = "rm")]
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run<A: AdminApi>(
    ctx: &AppContext<A>,
    out: &Output,
    command: AbsenceCommands,
) -> Result<(), AppError> {
    let api = ctx.api();
    match command {
        AbsenceCommands::List {
            page,
            limit,
            person_id,
            person_name,
            absence_type_id,
            start_date,
            end_date,
        } => {
            let limit = ctx.limit(limit);
            let mut view = match &person_id {
                Some(person_id) => AbsencesView::for_person(person_id.clone(), limit),
                None => AbsencesView::new(limit),
            };
            view.set_filters(ScheduledAbsenceFilters {
                person_id,
                person_name,
                absence_type_id,
                start_date,
                end_date,
            });
            view.state.set_page(page);
            view.load(api)?;
            out.list(Template::Absences, &ListOutput::from_state(&view.state, view.rows()))
        }
        AbsenceCommands::Show { id } => {
            let absence = api.get_scheduled_absence(&id)?;
            out.emit(&absence, |a| {
                let row = AbsenceRow::from(a);
                let mut text = format!(
                    "{}  {}\n  Type:         {}\n  Period:       {} to {} ({} days)",
                    row.id, row.person, row.absence_type, row.start_date, row.end_date, row.days
                );
                if !row.description.is_empty() {
                    text.push_str(&format!("\n  Description:  {}", row.description));
                }
                Ok(text)
            })
        }
        AbsenceCommands::Create {
            person_id,
            absence_type_id,
            start_date,
            end_date,
            description,
        } => {
            let mut form = ScheduledAbsenceForm::new();
            form.person_id = person_id;
            form.absence_type_id = absence_type_id;
            form.start_date = Some(start_date);
            form.end_date = Some(end_date);
            form.description = description.unwrap_or_default();
            let entity = form.submit(api)?.entity;
            out.done(&format!("Created scheduled absence {}", entity.id), &entity.id)
        }
        AbsenceCommands::Update { id, absence_type_id, start_date, end_date, description } => {
            let mut form = ScheduledAbsenceForm::edit(api, &id)?;
            if let Some(type_id) = absence_type_id {
                form.absence_type_id = type_id;
            }
            if start_date.is_some() {
                form.start_date = start_date;
            }
            if end_date.is_some() {
                form.end_date = end_date;
            }
            if let Some(description) = description {
                form.description = description;
            }
            let entity = form.submit(api)?.entity;
            out.done(&format!("Updated scheduled absence {}", entity.id), &entity.id)
        }
        AbsenceCommands::Delete { id, yes } => {
            if !confirm_delete(&format!("scheduled absence {}", id), yes)? {
                return Ok(());
            }
            api.delete_scheduled_absence(&id)?;
            out.done(&format!("Deleted scheduled absence {}", id), &id)
        }
    }
}
