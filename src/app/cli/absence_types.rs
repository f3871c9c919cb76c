use clap::Subcommand;

use super::Output;
use super::output::confirm_delete;
use crate::app::AppContext;
use crate::app::forms::AbsenceTypeForm;
use crate::app::render::{ListOutput, Template};
use crate::app::views::{AbsenceTypeRow, AbsenceTypesView};
use crate::domain::{AbsenceTypeFilters, AppError};
use crate::ports::AdminApi;

#[derive(Subcommand)]
pub enum AbsenceTypeCommands {
    /// List absence types
    #[clap(visible_alias = "ls")]
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,
    },
    /// Show one absence type
    Show { id: String },
    /// Create an absence type
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Display color, e.g. #3366ff
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        /// Create the type as inactive
        #[arg(long)]
        inactive: bool,
    },
    /// Update an absence type; omitted fields keep their current value
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete an absence type
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
    command: AbsenceTypeCommands,
) -> Result<(), AppError> {
    let api = ctx.api();
    match command {
        AbsenceTypeCommands::List { page, limit, name, active } => {
            let mut view = AbsenceTypesView::new(ctx.limit(limit));
            view.state.set_filters(AbsenceTypeFilters { name, active });
            view.state.set_page(page);
            view.load(api)?;
            out.list(Template::AbsenceTypes, &ListOutput::from_state(&view.state, view.rows()))
        }
        AbsenceTypeCommands::Show { id } => {
            let absence_type = api.get_absence_type(&id)?;
            out.emit(&absence_type, |t| {
                let row = AbsenceTypeRow::from(t);
                let mut text = format!("{}  {}  [{}]", row.id, row.name, row.status);
                if !row.color.is_empty() {
                    text.push_str(&format!("\n  Color:        {}", row.color));
                }
                if !row.description.is_empty() {
                    text.push_str(&format!("\n  Description:  {}", row.description));
                }
                Ok(text)
            })
        }
        AbsenceTypeCommands::Create { name, description, color, icon, inactive } => {
            let mut form = AbsenceTypeForm::new();
            form.name = name;
            form.description = description.unwrap_or_default();
            form.color = color.unwrap_or_default();
            form.icon = icon.unwrap_or_default();
            form.active = !inactive;
            let entity = form.submit(api)?.entity;
            out.done(&format!("Created absence type {} ({})", entity.name, entity.id), &entity.id)
        }
        AbsenceTypeCommands::Update { id, name, description, color, icon, active } => {
            let mut form = AbsenceTypeForm::edit(api, &id)?;
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(color) = color {
                form.color = color;
            }
            if let Some(icon) = icon {
                form.icon = icon;
            }
            if let Some(active) = active {
                form.active = active;
            }
            let entity = form.submit(api)?.entity;
            out.done(&format!("Updated absence type {}", entity.id), &entity.id)
        }
        AbsenceTypeCommands::Delete { id, yes } => {
            if !confirm_delete(&format!("absence type {}", id), yes)? {
                return Ok(());
            }
            api.delete_absence_type(&id)?;
            out.done(&format!("Deleted absence type {}", id), &id)
        }
    }
}
