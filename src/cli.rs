use clap::{Parser, Subcommand, ValueEnum};
use furlough::{CycleLength, DEFAULT_COHORT};

/// Leave calendar for conscript cohorts.
#[derive(Parser)]
#[command(
    name = "furlough",
    version,
    about = "Leave schedule and calendar for conscript cohorts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the cohort table.
    Cohorts(CohortsArgs),
    /// Show the schedule of a listed cohort.
    Show(ShowArgs),
    /// Plan a schedule from explicit anchor dates.
    Plan(PlanArgs),
}

/// Output encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Options shared by every command that renders a schedule.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Leave cycle in weeks (6 or 8).
    #[arg(short, long, env = "FURLOUGH_CYCLE", default_value = "6")]
    pub cycle: CycleLength,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Skip the month grids in text output.
    #[arg(long)]
    pub no_grid: bool,
}

/// Arguments for the `cohorts` subcommand.
#[derive(clap::Args)]
pub struct CohortsArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Cohort number.
    #[arg(short = 'n', long, env = "FURLOUGH_COHORT", default_value_t = DEFAULT_COHORT)]
    pub cohort: u16,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Enlistment date (YYYY-MM-DD).
    #[arg(short, long)]
    pub enlistment: String,

    /// Graduation date (YYYY-MM-DD); enlistment + 35 days when omitted.
    #[arg(short, long)]
    pub graduation: Option<String>,

    /// Discharge date (YYYY-MM-DD).
    #[arg(short, long)]
    pub discharge: String,

    #[command(flatten)]
    pub render: RenderArgs,
}
