use clap::Subcommand;

use super::Output;
use super::output::confirm_delete;
use crate::app::AppContext;
use crate::app::render::{ListOutput, Template, render_generation_detail};
use crate::app::views::{GenerationDetail, GenerationsView};
use crate::domain::AppError;
use crate::ports::AdminApi;

#[derive(Subcommand)]
pub enum GenerationCommands {
    /// List schedule generations of a scheduled area
    #[clap(visible_alias = "ls")]
    List {
        area_id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a generation's configuration and the schedules it produced
    Show {
        area_id: String,
        generation_id: String,
        /// Number of schedules to include
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete a generation together with its schedules
    #[clap(visible_alias = "rm")]
    Delete {
        area_id: String,
        generation_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run<A: AdminApi>(
    ctx: &AppContext<A>,
    out: &Output,
    command: GenerationCommands,
) -> Result<(), AppError> {
    let api = ctx.api();
    match command {
        GenerationCommands::List { area_id, page, limit } => {
            let mut view = GenerationsView::new(area_id, ctx.limit(limit));
            view.state.set_page(page);
            view.load(api)?;
            out.list(Template::Generations, &ListOutput::from_state(&view.state, view.rows()))
        }
        GenerationCommands::Show { area_id, generation_id, limit } => {
            let detail = GenerationDetail::load(api, &area_id, &generation_id, ctx.limit(limit))?;
            out.emit(&detail, render_generation_detail)
        }
        GenerationCommands::Delete { area_id, generation_id, yes } => {
            let what = format!("schedule generation {} and all of its schedules", generation_id);
            if !confirm_delete(&what, yes)? {
                return Ok(());
            }
            api.delete_schedule_generation(&area_id, &generation_id)?;
            out.done(&format!("Deleted schedule generation {}", generation_id), &generation_id)
        }
    }
}
