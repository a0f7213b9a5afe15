//! CLI entry point for glissade.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glissade_cli::{run_loaded_scenario, Inspection, RunConfig, Scenario};
use glissade_slider::SliderConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glissade", version, about = "Inspect and replay slider interactions")]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON interaction scenario against a slider
    Replay {
        /// Slider config (TOML); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scenario file (JSON)
        #[arg(short, long)]
        scenario: PathBuf,

        /// Write the JSON report here (relative path) instead of stdout
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Logical frame length for `wait` steps
        #[arg(long, default_value_t = 16)]
        tick_ms: u64,
    },

    /// Show what a slider config starts out as
    Inspect {
        /// Slider config (TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether the command succeeded
fn run(command: Command) -> Result<bool> {
    match command {
        Command::Replay {
            config,
            scenario,
            report,
            tick_ms,
        } => replay(config.as_deref(), &scenario, report.as_deref(), tick_ms),
        Command::Inspect { config, json } => {
            let config = load_config(&config)?;
            let inspection = Inspection::of(&config);
            if json {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
            } else {
                print!("{}", inspection.render());
            }
            Ok(true)
        }
    }
}

fn replay(
    config: Option<&Path>,
    scenario_path: &Path,
    report_path: Option<&Path>,
    tick_ms: u64,
) -> Result<bool> {
    let config = match config {
        Some(path) => load_config(path)?,
        None => SliderConfig::default(),
    };
    let scenario = Scenario::from_path(scenario_path)?;
    tracing::info!(
        steps = scenario.steps.len(),
        scenario = %scenario_path.display(),
        "replaying scenario"
    );

    let outcome = run_loaded_scenario(&scenario, &config, RunConfig { tick_ms })?;
    let report = outcome.report();
    match report_path {
        Some(path) => report
            .write_to_path(path)
            .with_context(|| format!("failed to write report {}", path.display()))?,
        None => report.write_to_writer(&mut std::io::stdout().lock())?,
    }

    if let (Some(step), Some(message)) = (report.failed_step_index, report.message.as_deref()) {
        tracing::error!(step, "{}", message);
    }
    Ok(!outcome.is_failed())
}

fn load_config(path: &Path) -> Result<SliderConfig> {
    SliderConfig::load(path).with_context(|| format!("invalid slider config {}", path.display()))
}
