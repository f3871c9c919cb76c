//! CLI Adapter.

mod absence_types;
mod absences;
mod generations;
mod groups;
mod output;
mod schedules;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

pub use output::Output;

#[derive(Parser)]
#[command(name = "escala-admin")]
#[command(version)]
#[command(about = "Manage scheduled absences, schedules and generations", long_about = None)]
struct Cli {
    /// Path to escala.toml (defaults to $ESCALA_CONFIG, then ./escala.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print view-models as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage absence types
    #[clap(visible_alias = "at")]
    AbsenceTypes {
        #[command(subcommand)]
        command: absence_types::AbsenceTypeCommands,
    },
    /// Manage scheduled absences
    #[clap(visible_alias = "ab")]
    Absences {
        #[command(subcommand)]
        command: absences::AbsenceCommands,
    },
    /// Browse and edit schedules of a scheduled area
    #[clap(visible_alias = "sc")]
    Schedules {
        #[command(subcommand)]
        command: schedules::ScheduleCommands,
    },
    /// Browse schedule generations of a scheduled area
    #[clap(visible_alias = "gen")]
    Generations {
        #[command(subcommand)]
        command: generations::GenerationCommands,
    },
    /// Browse groups of a scheduled area
    #[clap(visible_alias = "gr")]
    Groups {
        #[command(subcommand)]
        command: groups::GroupCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_logger();
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let ctx = crate::connect(cli.config.as_deref())?;
    let out = Output::new(cli.json);

    match cli.command {
        Commands::AbsenceTypes { command } => absence_types::run(&ctx, &out, command),
        Commands::Absences { command } => absences::run(&ctx, &out, command),
        Commands::Schedules { command } => schedules::run(&ctx, &out, command),
        Commands::Generations { command } => generations::run(&ctx, &out, command),
        Commands::Groups { command } => groups::run(&ctx, &out, command),
    }
}

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
