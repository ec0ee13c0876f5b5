//! # polgap-analysis: Clause/Policy Gap Analysis
//!
//! Implements the matching and gap-classification pipeline:
//!
//! - **Segmentation** (`segment.rs`): sentence-level policy segments with
//!   stable positional ids.
//! - **Preprocessing** (`preprocess.rs`): normalized requirement text and
//!   keywords per clause.
//! - **Matching** (`matching.rs`): keyword-overlap scoring and best-segment
//!   selection.
//! - **Classification** (`classify.rs`): score → Missing / Partial / Covered.
//! - **Gap report** (`gap_report.rs`): one finding per clause.
//! - **Suggestions** (`suggestion.rs`) and **roadmap** (`roadmap.rs`):
//!   per-clause remediation text and priority, keyed by clause id.
//! - **Report** (`report.rs`): join, statistics, posture, roadmap.
//! - **Score** (`score.rs`): adjusted headline score and verdict.
//! - **Export** (`export.rs`): CSV projection.
//! - **Loader** (`loader.rs`): corpus and policy text input.
//! - **Pipeline** (`pipeline.rs`): end-to-end orchestration.
//!
//! ## Crate Policy
//!
//! - Every stage is a pure function of its inputs; no shared mutable state.
//! - Malformed clause records degrade to a missing finding rather than
//!   aborting the run.

pub mod classify;
pub mod export;
pub mod gap_report;
pub mod loader;
pub mod matching;
pub mod pipeline;
pub mod preprocess;
pub mod report;
pub mod roadmap;
pub mod score;
pub mod segment;
pub mod suggestion;

// Re-export primary types.
pub use classify::classify_coverage;
pub use export::gap_report_csv;
pub use gap_report::{build_gap_report, AssessedFinding, GapFinding};
pub use loader::{load_clauses, load_policy_text, parse_clauses};
pub use matching::{find_best_match, keyword_overlap_score, MatchResult};
pub use pipeline::{analyze_policy, run_analysis, AnalysisOptions, AnalysisOutcome};
pub use preprocess::preprocess_clauses;
pub use report::{
    generate_compliance_report, ComplianceReport, FindingView, FunctionCoverage, RoadmapItem,
    Statistics, Summary,
};
pub use roadmap::determine_priority;
pub use score::{AnalysisMode, ComplianceVerdict, RiskSensitivity};
pub use segment::{segment_policy, Segment, MIN_SEGMENT_LENGTH};
pub use suggestion::generate_policy_suggestions;

/// Round to two decimal places.
///
/// Rounds the exact binary value of `value`, so `0.025` (stored slightly
/// above the tie) becomes `0.03` while `0.075` (stored below) becomes
/// `0.07`. Exact ties go to even.
pub(crate) fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
