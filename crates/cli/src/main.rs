mod config;
mod report;

use crate::{config::Scenario, report::Report};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the reference scenario to a TOML file.
    Init {
        #[arg(long)]
        config: PathBuf,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Run a scenario and write the trajectory report as JSON.
    Run {
        #[arg(long)]
        config: PathBuf,

        #[arg(long)]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Cli::parse();
    log::info!("{args:#?}");

    match args.command {
        Command::Init { config, force } => init(config, force)?,
        Command::Run { config, output } => run(config, output)?,
    }

    Ok(())
}

fn init(config: PathBuf, force: bool) -> Result<()> {
    if config.exists() && !force {
        bail!("{config:?} already exists (use --force to overwrite)");
    }

    let contents = Scenario::default().to_toml()?;
    fs::write(&config, contents).with_context(|| format!("failed to write {config:?}"))?;
    log::info!("wrote {config:?}");

    Ok(())
}

fn run(config: PathBuf, output: PathBuf) -> Result<()> {
    let scenario = Scenario::from_file(&config).context("failed to load scenario")?;
    log::info!("{scenario:#?}");

    let grid = scenario.time_grid()?;
    let schedule = scenario.schedule(&grid);
    let ecosystem = scenario.ecosystem()?;
    let solver = scenario.solver()?;

    let run = lamprey_solvers::simulate_unobserved(
        &ecosystem,
        &solver,
        grid.as_slice(),
        schedule.as_slice(),
        &scenario.initial.to_array(),
    )
    .context("failed to run simulation")?;

    if let Some(last) = run.trajectory().last() {
        log::info!("final state at t = {}: {last:?}", grid.end());
    }

    Report::new(&scenario, &run)
        .write(&output)
        .context("failed to write report")?;
    log::info!("wrote {output:?}");

    Ok(())
}
