use clap::Subcommand;

use super::Output;
use crate::app::AppContext;
use crate::app::render::{ListOutput, Template};
use crate::app::views::{GroupRow, GroupsView};
use crate::domain::{AppError, GroupFilters};
use crate::ports::AdminApi;

#[derive(Subcommand)]
pub enum GroupCommands {
    /// List groups of a scheduled area
    #[clap(visible_alias = "ls")]
    List {
        area_id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
    },
    /// Show one group
    Show { area_id: String, group_id: String },
}

pub fn run<A: AdminApi>(
    ctx: &AppContext<A>,
    out: &Output,
    command: GroupCommands,
) -> Result<(), AppError> {
    let api = ctx.api();
    match command {
        GroupCommands::List { area_id, page, limit, name } => {
            let mut view = GroupsView::new(area_id, ctx.limit(limit));
            view.state.set_filters(GroupFilters { name });
            view.state.set_page(page);
            view.load(api)?;
            out.list(Template::Groups, &ListOutput::from_state(&view.state, view.rows()))
        }
        GroupCommands::Show { area_id, group_id } => {
            let group = api.get_group(&area_id, &group_id)?;
            out.emit(&group, |g| {
                let row = GroupRow::from(g);
                let mut text = format!("{}  {}", row.id, row.name);
                if let Some(members) = row.members {
                    text.push_str(&format!("\n  Members:      {}", members));
                }
                if !row.description.is_empty() {
                    text.push_str(&format!("\n  Description:  {}", row.description));
                }
                Ok(text)
            })
        }
    }
}
