//! # Gap Report
//!
//! Runs matching and classification for every preprocessed clause and
//! emits one [`GapFinding`] per clause, in clause order.
//!
//! A finding is later enriched with its remediation suggestion and
//! priority. Enrichment consumes the finding and returns an
//! [`AssessedFinding`]; nothing is mutated in place.

use serde::{Deserialize, Serialize};

use polgap_core::{ClauseId, Coverage, PreprocessedClause, Priority, Severity};

use crate::classify::classify_coverage;
use crate::matching::find_best_match;
use crate::round2;
use crate::segment::Segment;

/// Matching outcome for one clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapFinding {
    pub clause_id: ClauseId,
    pub title: String,
    pub nist_function: String,
    pub nist_category: String,
    pub severity: Severity,
    pub coverage: Coverage,
    /// Best score rounded to two decimals, for display only.
    pub match_score: f64,
    /// Unrounded best score. All comparisons use this value.
    #[serde(skip)]
    pub raw_score: f64,
    pub matched_segment_id: Option<usize>,
    pub matched_segment_text: Option<String>,
}

impl GapFinding {
    /// Attach a suggestion and a priority.
    pub fn assess(self, suggestion: String, priority: Priority) -> AssessedFinding {
        AssessedFinding {
            finding: self,
            suggestion,
            priority,
        }
    }
}

/// A finding with its remediation suggestion and priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessedFinding {
    #[serde(flatten)]
    pub finding: GapFinding,
    pub suggestion: String,
    pub priority: Priority,
}

/// Build the per-clause gap report.
pub fn build_gap_report(clauses: &[PreprocessedClause], segments: &[Segment]) -> Vec<GapFinding> {
    clauses
        .iter()
        .map(|clause| assess_clause(clause, segments))
        .collect()
}

/// Match and classify a single clause.
pub fn assess_clause(clause: &PreprocessedClause, segments: &[Segment]) -> GapFinding {
    let m = find_best_match(clause, segments);
    let coverage = classify_coverage(m.best_score);
    let c = &clause.clause;

    GapFinding {
        clause_id: c.clause_id.clone(),
        title: c.title.clone(),
        nist_function: c.nist_function.clone(),
        nist_category: c.nist_category.clone(),
        severity: c.severity,
        coverage,
        match_score: round2(m.best_score),
        raw_score: m.best_score,
        matched_segment_id: m.best_segment_id,
        matched_segment_text: m.best_segment_text,
    }
}
