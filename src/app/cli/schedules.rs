use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;

use super::Output;
use super::output::confirm_delete;
use crate::app::AppContext;
use crate::app::forms::CommentForm;
use crate::app::render::{ListOutput, Template, render_schedule_detail};
use crate::app::views::{ScheduleDetail, SchedulesView};
use crate::domain::{AppError, ScheduleFilters, ScheduleUpdate};
use crate::ports::AdminApi;

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// List schedules of a scheduled area
    #[clap(visible_alias = "ls")]
    List {
        area_id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
        /// Only schedules produced by this generation
        #[arg(long = "generation")]
        schedule_generation_id: Option<String>,
        /// Schedules from this date (YYYY-MM-DD)
        #[arg(long = "from")]
        start_date: Option<NaiveDate>,
        /// Schedules until this date (YYYY-MM-DD)
        #[arg(long = "to")]
        end_date: Option<NaiveDate>,
        #[arg(long)]
        person_id: Option<String>,
        #[arg(long)]
        group_id: Option<String>,
        #[arg(long)]
        team_id: Option<String>,
    },
    /// Show a schedule with its members and comments
    Show { area_id: String, schedule_id: String },
    /// Change a schedule's time window or status
    Update {
        area_id: String,
        schedule_id: String,
        /// New start, RFC 3339 (e.g. 2024-05-05T09:00:00Z)
        #[arg(long = "start")]
        start_datetime: Option<DateTime<Utc>>,
        /// New end, RFC 3339
        #[arg(long = "end")]
        end_datetime: Option<DateTime<Utc>>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Add a comment to a schedule
    Comment { area_id: String, schedule_id: String, content: String },
    /// Remove a comment from a schedule
    DeleteComment {
        area_id: String,
        schedule_id: String,
        comment_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete a schedule
    #[clap(visible_alias = "rm")]
    Delete {
        area_id: String,
        schedule_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run<A: AdminApi>(
    ctx: &AppContext<A>,
    out: &Output,
    command: ScheduleCommands,
) -> Result<(), AppError> {
    let api = ctx.api();
    match command {
        ScheduleCommands::List {
            area_id,
            page,
            limit,
            schedule_generation_id,
            start_date,
            end_date,
            person_id,
            group_id,
            team_id,
        } => {
            let mut view = SchedulesView::new(area_id, ctx.limit(limit));
            view.state.set_filters(ScheduleFilters {
                schedule_generation_id,
                start_date,
                end_date,
                person_id,
                group_id,
                team_id,
            });
            view.state.set_page(page);
            view.load(api)?;
            out.list(Template::Schedules, &ListOutput::from_state(&view.state, view.rows()))
        }
        ScheduleCommands::Show { area_id, schedule_id } => {
            let detail = ScheduleDetail::load(api, &area_id, &schedule_id)?;
            out.emit(&detail, render_schedule_detail)
        }
        ScheduleCommands::Update { area_id, schedule_id, start_datetime, end_datetime, status } => {
            let update = ScheduleUpdate { start_datetime, end_datetime, status };
            if update == ScheduleUpdate::default() {
                return Err(AppError::InvalidInput(
                    "Nothing to update: pass --start, --end or --status".to_string(),
                ));
            }
            if let (Some(start), Some(end)) = (update.start_datetime, update.end_datetime)
                && end <= start
            {
                return Err(AppError::InvalidInput("end must be after start".to_string()));
            }
            let schedule = api.update_schedule(&area_id, &schedule_id, &update)?;
            out.done(&format!("Updated schedule {}", schedule.id), &schedule.id)
        }
        ScheduleCommands::Comment { area_id, schedule_id, content } => {
            let submitted = CommentForm::new(content).submit(api, &area_id, &schedule_id)?;
            let comment = submitted.entity;
            let message = format!("Added comment {} to schedule {}", comment.id, schedule_id);
            out.done(&message, &comment.id)
        }
        ScheduleCommands::DeleteComment { area_id, schedule_id, comment_id, yes } => {
            if !confirm_delete(&format!("comment {}", comment_id), yes)? {
                return Ok(());
            }
            api.delete_schedule_comment(&area_id, &schedule_id, &comment_id)?;
            out.done(&format!("Deleted comment {}", comment_id), &comment_id)
        }
        ScheduleCommands::Delete { area_id, schedule_id, yes } => {
            if !confirm_delete(&format!("schedule {}", schedule_id), yes)? {
                return Ok(());
            }
            api.delete_schedule(&area_id, &schedule_id)?;
            out.done(&format!("Deleted schedule {}", schedule_id), &schedule_id)
        }
    }
}
