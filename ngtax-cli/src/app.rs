//! Glue between the command line, the loaders and the engine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ngtax_core::{PolicyComparison, PolicyYear, TaxEngine, TaxProfile, TaxResult, Transaction};
use ngtax_data::{LedgerLoader, PeriodSummary, ProfileLoader, TimeFrame};
use serde::Serialize;
use tracing::info;

/// Everything one invocation needs, already parsed.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub profile: PathBuf,
    pub ledger: Option<PathBuf>,
    /// Policy code; the profile's preferred policy when absent.
    pub policy: Option<String>,
    pub period: Option<TimeFrame>,
    pub as_of: NaiveDate,
    pub compare: bool,
}

/// Result of a run: one regime, or both side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Single(TaxResult),
    Comparison(PolicyComparison),
}

/// What one invocation prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutput {
    pub assessment: Outcome,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodSummary>,
}

pub fn load_profile(path: &Path) -> Result<TaxProfile> {
    ProfileLoader::load_from_file(path)
        .with_context(|| format!("failed to load profile '{}'", path.display()))
}

/// Loads the ledger, or an empty one when no path is given.
pub fn load_ledger(path: Option<&Path>) -> Result<Vec<Transaction>> {
    match path {
        Some(path) => LedgerLoader::load_from_file(path)
            .with_context(|| format!("failed to load ledger '{}'", path.display())),
        None => Ok(Vec::new()),
    }
}

/// Picks the regime: an explicit code wins, otherwise the profile's preference.
pub fn resolve_policy(
    code: Option<&str>,
    profile: &TaxProfile,
) -> Result<PolicyYear> {
    match code {
        Some(code) => Ok(code.parse()?),
        None => Ok(profile.preferred_policy),
    }
}

/// Computes the outcome for already-loaded inputs.
pub fn assess(
    profile: &TaxProfile,
    transactions: &[Transaction],
    policy: PolicyYear,
    compare: bool,
) -> Outcome {
    if compare {
        Outcome::Comparison(TaxEngine::compare(profile, transactions))
    } else {
        Outcome::Single(TaxEngine::calculate(profile, transactions, policy))
    }
}

/// Builds the period analytics when a period was requested.
pub fn summarize_period(
    profile: &TaxProfile,
    ledger: &[Transaction],
    period: Option<TimeFrame>,
    as_of: NaiveDate,
) -> Option<PeriodSummary> {
    period.map(|frame| PeriodSummary::build(profile, ledger, frame, as_of))
}

/// Loads the inputs, assesses the full ledger and attaches any period summary.
///
/// The period never narrows the assessment: thresholds, bands and reliefs are
/// annual, so liability is always computed on the whole ledger.
pub fn run(options: &RunOptions) -> Result<RunOutput> {
    let profile = load_profile(&options.profile)?;
    let policy = resolve_policy(options.policy.as_deref(), &profile)?;
    let ledger = load_ledger(options.ledger.as_deref())?;

    info!(
        profile = %profile.name,
        entity = profile.entity_type.as_str(),
        %policy,
        transactions = ledger.len(),
        "Assessing"
    );

    Ok(RunOutput {
        assessment: assess(&profile, &ledger, policy, options.compare),
        period: summarize_period(&profile, &ledger, options.period, options.as_of),
    })
}
