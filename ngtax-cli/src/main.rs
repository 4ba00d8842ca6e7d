use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::error;

use ngtax_cli::app::{self, Outcome, RunOptions};
use ngtax_cli::logging;
use ngtax_cli::report::{ComparisonReport, PeriodReport, ResultReport};
use ngtax_data::TimeFrame;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Nigerian personal and company income tax estimator.
///
/// Reads a taxpayer profile (TOML) and an optional transaction ledger (CSV),
/// then prints the liability under the chosen regime.
#[derive(Debug, Parser)]
#[command(name = "ngtax", version)]
struct Cli {
    /// Taxpayer profile (TOML).
    #[arg(long)]
    profile: PathBuf,

    /// Transaction ledger (CSV). Without one the profile's declared income is used.
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// Policy regime: ACT_2024 or ACT_2026_PROPOSED.
    /// Defaults to the profile's preferred policy.
    #[arg(long)]
    policy: Option<String>,

    /// Add a summary for the month, quarter or year containing --as-of.
    /// Liability is still assessed on the whole ledger.
    #[arg(long)]
    period: Option<TimeFrame>,

    /// Reference date for --period (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Print the result as JSON instead of a text report.
    #[arg(long)]
    json: bool,

    /// Assess under both regimes side by side.
    #[arg(long)]
    compare: bool,

    /// Log filter: a level ("debug") or a full directive. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file as well as stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let options = RunOptions {
        profile: cli.profile,
        ledger: cli.ledger,
        policy: cli.policy,
        period: cli.period,
        as_of: cli.as_of.unwrap_or_else(|| Local::now().date_naive()),
        compare: cli.compare,
    };

    let output = app::run(&options).inspect_err(|e| error!("{e:#}"))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("failed to serialize result")?;
        println!("{json}");
    } else {
        match &output.assessment {
            Outcome::Single(result) => print!("{}", ResultReport(result)),
            Outcome::Comparison(comparison) => print!("{}", ComparisonReport(comparison)),
        }
        if let Some(summary) = &output.period {
            println!();
            print!("{}", PeriodReport(summary));
        }
    }

    Ok(())
}
