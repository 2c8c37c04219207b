use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workout_planner::WorkoutPlanner;
use workout_planner::config::{Cli, OutputFormat};
use workout_planner::console;
use workout_planner::registry::StrategyRegistry;
use workout_planner::report::UsageReport;
use workout_planner::schedule::{Schedule, run_schedule};
use workout_planner::strategy::{
    CardioStrategy, FlexibilityStrategy, StrengthTrainingStrategy, WorkoutStrategy,
};

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the plan output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let strength = StrengthTrainingStrategy::new();
    let cardio = CardioStrategy::new();
    let flexibility = FlexibilityStrategy::new();

    let registry = StrategyRegistry::new()
        .register("Strength Training", &strength)
        .and_then(|r| r.register("Cardio Training", &cardio))
        .and_then(|r| r.register("Flexibility Training", &flexibility))
        .context("Failed to build strategy registry")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        let specs: Vec<_> = registry.iter().map(|(_, strategy)| strategy.spec()).collect();
        console::write_strategy_list(&mut out, &specs).context("Failed to list strategies")?;
        return Ok(());
    }

    let mut planner = WorkoutPlanner::new(&strength);

    console::write_banner(&mut out).context("Failed to write banner")?;
    run_schedule(&mut out, &mut planner, &registry, &Schedule::five_day())
        .context("Failed to run workout schedule")?;

    match cli.format {
        OutputFormat::Text => WorkoutPlanner::write_usage_statistics(&mut out, &registry)
            .context("Failed to write usage statistics")?,
        OutputFormat::Json => UsageReport::collect(&registry)
            .write_json(&mut out)
            .context("Failed to write usage report")?,
    }
    out.flush()?;

    info!(total = UsageReport::collect(&registry).total(), "schedule complete");

    if !cli.no_pause {
        console::pause_for_keypress(&mut out).context("Failed waiting for keypress")?;
    }
    Ok(())
}
