//! # Analysis Pipeline
//!
//! Wires the stages together:
//!
//! ```text
//! policy text ─► segment ─┐
//!                         ├─► match/classify ─► suggest ─┐
//! clauses ─► preprocess ──┘                  ─► prioritize ─┴─► join ─► aggregate
//! ```
//!
//! Every clause flows through matching, classification, suggestion and
//! prioritization independently of every other clause; only aggregation
//! needs all of them. Each run is a pure function of its inputs, so two
//! runs over the same inputs serialize to identical bytes.

use serde::{Deserialize, Serialize};

use polgap_core::{Clause, PolgapError, Posture};

use crate::gap_report::{build_gap_report, AssessedFinding};
use crate::preprocess::preprocess_clauses;
use crate::report::{
    function_coverage, generate_compliance_report, merge_findings, ComplianceReport,
    FunctionCoverage,
};
use crate::roadmap::generate_improvement_roadmap;
use crate::score::{
    adjusted_compliance_score, risk_level, AnalysisMode, ComplianceVerdict, RiskSensitivity,
};
use crate::segment::{segment_policy_with, Segment, MIN_SEGMENT_LENGTH};
use crate::suggestion::generate_policy_suggestions;

/// Default framework label.
pub const DEFAULT_FRAMEWORK: &str = "NIST CSF";

/// Reviewer settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Display label of the benchmark framework. Opaque to scoring.
    pub framework: String,
    pub mode: AnalysisMode,
    pub sensitivity: RiskSensitivity,
    pub min_segment_length: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            framework: DEFAULT_FRAMEWORK.to_string(),
            mode: AnalysisMode::default(),
            sensitivity: RiskSensitivity::default(),
            min_segment_length: MIN_SEGMENT_LENGTH,
        }
    }
}

impl AnalysisOptions {
    /// Reject settings that would make the run meaningless.
    pub fn validate(&self) -> Result<(), PolgapError> {
        if self.min_segment_length == 0 {
            return Err(PolgapError::Config(
                "min_segment_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Everything `polgap analyze` reports for one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub framework: String,
    pub analysis_mode: AnalysisMode,
    pub risk_sensitivity: RiskSensitivity,
    /// Adjusted 0–100 headline score.
    pub compliance_score: u8,
    /// Score-based risk level.
    pub risk_level: Posture,
    pub verdict: ComplianceVerdict,
    pub function_coverage: Vec<FunctionCoverage>,
    pub report: ComplianceReport,
}

/// Run stages 1–8 and join their partial results.
pub fn assess_policy(
    clauses: &[Clause],
    policy_text: &str,
    min_segment_length: usize,
) -> Vec<AssessedFinding> {
    let segments: Vec<Segment> = segment_policy_with(policy_text, min_segment_length).collect();
    tracing::debug!(segments = segments.len(), "segmented policy text");

    let preprocessed = preprocess_clauses(clauses);
    tracing::debug!(clauses = preprocessed.len(), "preprocessed clauses");

    let findings = build_gap_report(&preprocessed, &segments);
    let suggestions = generate_policy_suggestions(&findings);
    let priorities = generate_improvement_roadmap(&findings);

    merge_findings(findings, &suggestions, &priorities)
}

/// Full pipeline with the default segment length.
pub fn analyze_policy(clauses: &[Clause], policy_text: &str) -> ComplianceReport {
    generate_compliance_report(&assess_policy(clauses, policy_text, MIN_SEGMENT_LENGTH))
}

/// Full pipeline plus the adjusted score, verdict, and function breakdown.
pub fn run_analysis(
    clauses: &[Clause],
    policy_text: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisOutcome, PolgapError> {
    options.validate()?;

    let assessed = assess_policy(clauses, policy_text, options.min_segment_length);
    let report = generate_compliance_report(&assessed);
    let breakdown = function_coverage(&assessed);

    let score = adjusted_compliance_score(&report.statistics, options.mode, options.sensitivity);

    tracing::info!(
        framework = %options.framework,
        total = report.statistics.total_clauses,
        covered = report.statistics.covered,
        partial = report.statistics.partial,
        missing = report.statistics.missing,
        posture = %report.summary.overall_posture,
        compliance_score = score,
        "analysis complete"
    );

    Ok(AnalysisOutcome {
        framework: options.framework.clone(),
        analysis_mode: options.mode,
        risk_sensitivity: options.sensitivity,
        compliance_score: score,
        risk_level: risk_level(score),
        verdict: ComplianceVerdict::from_score(score),
        function_coverage: breakdown,
        report,
    })
}
