//! # Analyze Subcommand
//!
//! Scores a policy document against the clause corpus and writes the result
//! in one of three formats:
//!
//! - `json` (default): the full [`AnalysisOutcome`] envelope.
//! - `csv`: one row per finding, labelled by gap type.
//! - `summary`: a short human-readable digest.
//!
//! Flags override the config file; the config file overrides defaults.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use polgap_analysis::{
    gap_report_csv, load_clauses, load_policy_text, run_analysis, AnalysisMode, AnalysisOptions,
    AnalysisOutcome, RiskSensitivity,
};

use crate::config::AnalyzerConfig;

/// Report encoding.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Summary,
}

/// Arguments for `polgap analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Policy document (plain text).
    pub policy: PathBuf,

    /// Clause corpus (JSON array). Overrides the config file.
    #[arg(long)]
    pub clauses: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Review depth: quick-scan, standard, or deep-review.
    #[arg(long)]
    pub mode: Option<AnalysisMode>,

    /// Risk sensitivity, 1 (lenient) to 5 (strict).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub sensitivity: Option<u8>,

    /// Framework label shown in the report.
    #[arg(long)]
    pub framework: Option<String>,
}

impl AnalyzeArgs {
    /// Merge flags over the config file.
    pub fn options(&self, config: &AnalyzerConfig) -> Result<AnalysisOptions> {
        let mut options = config.to_options();
        if let Some(mode) = self.mode {
            options.mode = mode;
        }
        if let Some(level) = self.sensitivity {
            options.sensitivity = RiskSensitivity::new(level)?;
        }
        if let Some(framework) = &self.framework {
            options.framework = framework.clone();
        }
        Ok(options)
    }

    /// Clause corpus path: flag first, then the config file.
    pub fn clauses_path(&self, config: &AnalyzerConfig) -> PathBuf {
        match &self.clauses {
            Some(path) => path.clone(),
            None => config.clauses_path(),
        }
    }
}

/// Run the analyze subcommand.
pub fn run_analyze(args: &AnalyzeArgs, config: &AnalyzerConfig) -> Result<u8> {
    let options = args.options(config)?;
    let clauses_path = args.clauses_path(config);

    tracing::info!(
        policy = %args.policy.display(),
        clauses = %clauses_path.display(),
        mode = %options.mode,
        sensitivity = options.sensitivity.level(),
        "starting analysis"
    );

    let clauses = load_clauses(&clauses_path)?;
    let policy_text = load_policy_text(&args.policy)?;
    let outcome = run_analysis(&clauses, &policy_text, &options)?;

    let rendered = render(&outcome, args.format)?;
    crate::emit(&rendered, args.out.as_deref())?;
    Ok(0)
}

/// Encode an outcome in the requested format.
pub fn render(outcome: &AnalysisOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(outcome).context("failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => Ok(gap_report_csv(&outcome.report)),
        OutputFormat::Summary => Ok(SummaryView(outcome).to_string()),
    }
}

/// Human-readable digest of an [`AnalysisOutcome`].
pub struct SummaryView<'a>(pub &'a AnalysisOutcome);

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        let stats = &outcome.report.statistics;

        writeln!(f, "Framework:         {}", outcome.framework)?;
        writeln!(
            f,
            "Settings:          {} / sensitivity {}",
            outcome.analysis_mode,
            outcome.risk_sensitivity.level()
        )?;
        writeln!(
            f,
            "Compliance score:  {}/100 ({})",
            outcome.compliance_score, outcome.risk_level
        )?;
        writeln!(f, "Verdict:           {}", outcome.verdict)?;
        writeln!(f, "Posture:           {}", outcome.report.summary.overall_posture)?;
        writeln!(
            f,
            "Clauses:           {} total, {} covered, {} partial, {} missing ({:.2}% covered)",
            stats.total_clauses, stats.covered, stats.partial, stats.missing, stats.coverage_percentage
        )?;

        if !outcome.function_coverage.is_empty() {
            writeln!(f, "\nBy function:")?;
            for fc in &outcome.function_coverage {
                writeln!(
                    f,
                    "  {:<12} {}/{} covered, {} partial, {} missing ({:.2}%)",
                    fc.function, fc.covered, fc.total, fc.partial, fc.missing, fc.coverage_percentage
                )?;
            }
        }

        if !outcome.report.roadmap.is_empty() {
            writeln!(f, "\nRoadmap:")?;
            for item in &outcome.report.roadmap {
                writeln!(
                    f,
                    "  [{}] {} {}: {}",
                    item.priority, item.clause_id, item.title, item.action
                )?;
            }
        }
        Ok(())
    }
}
