//! # periop
//!
//! Command-line entry point: reads a patient record as JSON, prints the risk
//! assessment and scheduling plan as JSON.

#![deny(unsafe_code)]

mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use periop_core::PatientRecord;
use periop_core::logging::init_subscriber;
use periop_risk::default_engine;
use periop_settings::{PeriopSettings, get_settings, load_settings_from_path};
use serde::Serialize;
use tracing::info;

use crate::report::build_report;

/// Pre-operative risk assessment.
#[derive(Parser, Debug)]
#[command(name = "periop", about = "Pre-operative risk assessment and scheduling advice")]
struct Cli {
    /// Settings file (defaults to `~/.periop/settings.json`).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log filter directive (overrides settings).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess a patient record and derive the scheduling plan.
    Assess {
        /// Record JSON file; reads stdin when omitted.
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the intake form's default record.
    Sample,
    /// Print the built-in risk rule table.
    Rules,
}

fn load(path: Option<&Path>) -> Result<PeriopSettings> {
    match path {
        Some(path) => load_settings_from_path(path)
            .with_context(|| format!("Failed to load settings: {}", path.display())),
        None => Ok(get_settings().clone()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read record: {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read record from stdin"),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load(cli.settings.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&settings.logging.level);
    init_subscriber(level);

    match cli.command {
        Command::Assess { input, pretty } => {
            let text = read_input(input.as_deref())?;
            let report = build_report(&text, &settings.scheduling.slots)
                .context("Patient record rejected")?;
            info!(
                tier = %report.assessment.overall_risk(),
                factors = report.assessment.risk_factors().len(),
                "assessment complete"
            );
            print_json(&report, pretty || settings.output.pretty)
        }
        Command::Sample => print_json(&PatientRecord::default(), true),
        Command::Rules => print_json(&default_engine().rules(), true),
    }
}
