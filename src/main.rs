mod cli;
mod logging;
mod report;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use furlough::{AnchorDates, Schedule, cohort, cohorts};
use tracing::info;

use crate::cli::{Cli, CohortsArgs, Command, PlanArgs, ShowArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let output = match command {
        Command::Cohorts(args) => list_cohorts(&args)?,
        Command::Show(args) => show(&args)?,
        Command::Plan(args) => plan(&args)?,
    };
    print!("{output}");
    Ok(())
}

fn list_cohorts(args: &CohortsArgs) -> Result<String> {
    let table: Vec<_> = cohorts().collect();
    info!(count = table.len(), "listing cohorts");
    report::cohorts(&table, args.format)
}

fn show(args: &ShowArgs) -> Result<String> {
    let anchors = cohort(args.cohort)?;
    info!(cohort = args.cohort, cycle = %args.render.cycle, "showing cohort schedule");
    let schedule = Schedule::new(anchors, args.render.cycle)
        .with_context(|| format!("failed to build schedule for cohort {}", args.cohort))?;
    report::schedule(&schedule, &args.render)
}

fn plan(args: &PlanArgs) -> Result<String> {
    let anchors = AnchorDates::parse(&args.enlistment, args.graduation.as_deref(), &args.discharge)
        .context("invalid anchor dates")?;
    if anchors.discharge < anchors.resolved_graduation()? {
        tracing::warn!("discharge precedes graduation; only the first leave will be listed");
    }
    let schedule = Schedule::new(anchors, args.render.cycle).context("failed to build schedule")?;
    report::schedule(&schedule, &args.render)
}
