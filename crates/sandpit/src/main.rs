use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use sandpit::SandpitConfig;
use sandpit::headless::run_ticks;
use sandpit::scenario::{ScenarioDefinition, ScenarioExecutor, ScenarioExecutorConfig};
use sandpit_core::World;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file to run (RON)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Ticks to simulate when no scenario is given
    #[arg(long)]
    ticks: Option<u64>,

    /// RNG seed (overrides config and scenario)
    #[arg(long)]
    seed: Option<u64>,

    /// Write a JSON report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Grid width override
    #[arg(long)]
    width: Option<u32>,

    /// Grid height override
    #[arg(long)]
    height: Option<u32>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("Starting Sandpit");

    let mut config = SandpitConfig::load()?;
    if args.width.is_some() || args.height.is_some() {
        let width = args.width.unwrap_or(config.sim.grid.width);
        let height = args.height.unwrap_or(config.sim.grid.height);
        config.sim = config.sim.resized(width, height);
    }

    match &args.scenario {
        Some(path) => run_scenario(&args, &config, path),
        None => run_free(&args, &config),
    }
}

fn run_scenario(args: &Args, config: &SandpitConfig, path: &Path) -> anyhow::Result<()> {
    let scenario = ScenarioDefinition::from_file(path)?;
    let mut world = ScenarioExecutor::build_world(&scenario, &config.sim)?;

    let mut executor = ScenarioExecutor::with_config(ScenarioExecutorConfig {
        seed_override: args.seed,
        verbose: args.verbose,
    });
    let report = executor.execute_scenario(&scenario, &mut world)?;

    if let Some(report_path) = &args.report {
        report.save_json(report_path)?;
        log::info!("Report written to {}", report_path.display());
    }

    if !report.passed {
        for failure in &report.verification_failures {
            log::error!("{}", failure.message);
        }
        bail!(
            "Scenario '{}' failed {} verification(s)",
            scenario.name,
            report.verification_failures.len()
        );
    }
    Ok(())
}

fn run_free(args: &Args, config: &SandpitConfig) -> anyhow::Result<()> {
    let ticks = args.ticks.unwrap_or(config.run.ticks);
    let seed = args.seed.unwrap_or(config.run.seed);
    let mut world = World::new(config.sim.clone()).context("Failed to create world")?;

    let summary = run_ticks(&mut world, ticks, seed, config.run.progress_interval);
    log::info!(
        "Ran {} ticks in {:.1}ms ({:.3}ms/tick), {} active cells",
        summary.ticks,
        summary.duration_ms,
        summary.avg_tick_ms(),
        summary.active_cells
    );

    if let Some(report_path) = &args.report {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize run summary to JSON")?;
        std::fs::write(report_path, json)
            .with_context(|| format!("Failed to write run summary: {}", report_path.display()))?;
        log::info!("Summary written to {}", report_path.display());
    }
    Ok(())
}
