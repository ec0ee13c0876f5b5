//! # Compliance Report Aggregation
//!
//! Fan-in stage of the pipeline. Joins the per-stage partial results onto
//! the gap findings, then folds all findings into a [`ComplianceReport`]:
//! coverage statistics, overall posture, per-finding projections, and the
//! remediation roadmap.
//!
//! ## Posture
//!
//! ```text
//! missing > covered                      → High Risk
//! missing == 0 && partial <= covered     → Low Risk
//! otherwise                              → Moderate Risk
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use polgap_core::{ClauseId, Coverage, Posture, Priority, Severity};

use crate::gap_report::{AssessedFinding, GapFinding};
use crate::roadmap::determine_priority;
use crate::round2;
use crate::suggestion::DEFAULT_SUGGESTION;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Coverage counts across all clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_clauses: usize,
    pub covered: usize,
    pub partial: usize,
    pub missing: usize,
    /// `covered / total * 100`, rounded to two decimals; `0` for an empty corpus.
    pub coverage_percentage: f64,
}

/// Qualitative summary of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub overall_posture: Posture,
    /// Number of missing clauses.
    pub key_risks: usize,
}

/// Per-finding projection carried in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindingView {
    pub clause_id: ClauseId,
    pub title: String,
    pub coverage: Coverage,
    pub severity: Severity,
    pub match_score: f64,
    pub matched_text: Option<String>,
    pub suggestion: String,
    pub priority: Priority,
}

/// One remediation item. Only non-covered clauses appear on the roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub clause_id: ClauseId,
    pub title: String,
    pub priority: Priority,
    pub action: String,
}

/// Terminal artifact of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub summary: Summary,
    pub statistics: Statistics,
    pub findings: Vec<FindingView>,
    pub roadmap: Vec<RoadmapItem>,
}

/// Coverage breakdown for one framework function (e.g. "Protect").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCoverage {
    pub function: String,
    pub total: usize,
    pub covered: usize,
    pub partial: usize,
    pub missing: usize,
    pub coverage_percentage: f64,
}

/// Label for clauses that carry no framework function.
pub const UNASSIGNED_FUNCTION: &str = "Unassigned";

// ---------------------------------------------------------------------------
// Join
// ---------------------------------------------------------------------------

/// Left-join suggestions and priorities onto findings, preserving order.
///
/// A finding with no suggestion entry receives [`DEFAULT_SUGGESTION`]; a
/// finding with no priority entry is prioritized directly from its severity
/// and coverage. Every output finding therefore carries exactly one of each.
pub fn merge_findings(
    findings: Vec<GapFinding>,
    suggestions: &BTreeMap<ClauseId, String>,
    priorities: &BTreeMap<ClauseId, Priority>,
) -> Vec<AssessedFinding> {
    findings
        .into_iter()
        .map(|finding| {
            let suggestion = suggestions
                .get(&finding.clause_id)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SUGGESTION.to_string());
            let priority = priorities
                .get(&finding.clause_id)
                .copied()
                .unwrap_or_else(|| determine_priority(finding.severity, finding.coverage));
            finding.assess(suggestion, priority)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Overall posture from coverage counts.
pub fn determine_posture(covered: usize, partial: usize, missing: usize) -> Posture {
    if missing > covered {
        Posture::HighRisk
    } else if missing == 0 && partial <= covered {
        Posture::LowRisk
    } else {
        Posture::ModerateRisk
    }
}

/// Percentage of `covered` in `total`, rounded to two decimals; `0` if empty.
pub fn coverage_percentage(covered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(covered as f64 / total as f64 * 100.0)
}

#[derive(Default)]
struct Tally {
    covered: usize,
    partial: usize,
    missing: usize,
}

impl Tally {
    fn add(&mut self, coverage: Coverage) {
        match coverage {
            Coverage::Covered => self.covered += 1,
            Coverage::Partial => self.partial += 1,
            Coverage::Missing => self.missing += 1,
        }
    }

    fn total(&self) -> usize {
        self.covered + self.partial + self.missing
    }
}

/// Aggregate assessed findings into the final report.
pub fn generate_compliance_report(findings: &[AssessedFinding]) -> ComplianceReport {
    let mut tally = Tally::default();
    for f in findings {
        tally.add(f.finding.coverage);
    }
    let total = tally.total();

    let statistics = Statistics {
        total_clauses: total,
        covered: tally.covered,
        partial: tally.partial,
        missing: tally.missing,
        coverage_percentage: coverage_percentage(tally.covered, total),
    };

    let summary = Summary {
        overall_posture: determine_posture(tally.covered, tally.partial, tally.missing),
        key_risks: tally.missing,
    };

    let views = findings
        .iter()
        .map(|a| FindingView {
            clause_id: a.finding.clause_id.clone(),
            title: a.finding.title.clone(),
            coverage: a.finding.coverage,
            severity: a.finding.severity,
            match_score: a.finding.match_score,
            matched_text: a.finding.matched_segment_text.clone(),
            suggestion: a.suggestion.clone(),
            priority: a.priority,
        })
        .collect();

    let roadmap = findings
        .iter()
        .filter(|a| a.finding.coverage.is_gap())
        .map(|a| RoadmapItem {
            clause_id: a.finding.clause_id.clone(),
            title: a.finding.title.clone(),
            priority: a.priority,
            action: a.suggestion.clone(),
        })
        .collect();

    ComplianceReport {
        summary,
        statistics,
        findings: views,
        roadmap,
    }
}

/// Coverage per framework function, in order of first appearance.
pub fn function_coverage(findings: &[AssessedFinding]) -> Vec<FunctionCoverage> {
    let mut order: Vec<String> = Vec::new();
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for a in findings {
        let function = match a.finding.nist_function.trim() {
            "" => UNASSIGNED_FUNCTION.to_string(),
            f => f.to_string(),
        };
        if !tallies.contains_key(&function) {
            order.push(function.clone());
        }
        tallies.entry(function).or_default().add(a.finding.coverage);
    }

    order
        .into_iter()
        .filter_map(|function| {
            let t = tallies.remove(&function)?;
            Some(FunctionCoverage {
                total: t.total(),
                covered: t.covered,
                partial: t.partial,
                missing: t.missing,
                coverage_percentage: coverage_percentage(t.covered, t.total()),
                function,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::suggestion_for;

    fn finding(id: &str, function: &str, severity: Severity, coverage: Coverage) -> GapFinding {
        let raw = match coverage {
            Coverage::Missing => 0.0,
            Coverage::Partial => 0.5,
            Coverage::Covered => 1.0,
        };
        GapFinding {
            clause_id: id.into(),
            title: format!("Title {id}"),
            nist_function: function.into(),
            nist_category: String::new(),
            severity,
            coverage,
            match_score: raw,
            raw_score: raw,
            matched_segment_id: None,
            matched_segment_text: None,
        }
    }

    fn assessed(id: &str, coverage: Coverage) -> AssessedFinding {
        let f = finding(id, "Protect", Severity::High, coverage);
        let suggestion = suggestion_for(f.coverage, &f.title);
        let priority = determine_priority(f.severity, f.coverage);
        f.assess(suggestion, priority)
    }

    // ── posture ─────────────────────────────────────────────────────

    #[test]
    fn posture_rules() {
        assert_eq!(determine_posture(1, 0, 2), Posture::HighRisk);
        assert_eq!(determine_posture(3, 3, 0), Posture::LowRisk);
        assert_eq!(determine_posture(0, 0, 0), Posture::LowRisk);
        assert_eq!(determine_posture(2, 3, 0), Posture::ModerateRisk);
        assert_eq!(determine_posture(2, 0, 2), Posture::ModerateRisk);
    }

    // ── aggregation ─────────────────────────────────────────────────

    #[test]
    fn empty_findings_give_zero_report() {
        let report = generate_compliance_report(&[]);
        assert_eq!(
            report.statistics,
            Statistics {
                total_clauses: 0,
                covered: 0,
                partial: 0,
                missing: 0,
                coverage_percentage: 0.0,
            }
        );
        assert!(report.findings.is_empty());
        assert!(report.roadmap.is_empty());
        assert_eq!(report.summary.key_risks, 0);
    }

    #[test]
    fn counts_percentage_and_roadmap() {
        let findings = vec![
            assessed("A", Coverage::Covered),
            assessed("B", Coverage::Missing),
            assessed("C", Coverage::Partial),
        ];
        let report = generate_compliance_report(&findings);

        assert_eq!(report.statistics.total_clauses, 3);
        assert_eq!(report.statistics.covered, 1);
        assert_eq!(report.statistics.partial, 1);
        assert_eq!(report.statistics.missing, 1);
        assert_eq!(report.statistics.coverage_percentage, 33.33);
        assert_eq!(report.summary.overall_posture, Posture::ModerateRisk);
        assert_eq!(report.summary.key_risks, 1);

        let roadmap: Vec<_> = report
            .roadmap
            .iter()
            .map(|r| (r.clause_id.as_str(), r.priority))
            .collect();
        assert_eq!(
            roadmap,
            vec![("B", Priority::Immediate), ("C", Priority::ShortTerm)]
        );
        assert_eq!(report.roadmap[0].action, findings[1].suggestion);
    }

    // ── join ────────────────────────────────────────────────────────

    #[test]
    fn merge_falls_back_for_absent_entries() {
        let findings = vec![
            finding("A", "Protect", Severity::Medium, Coverage::Missing),
            finding("B", "Detect", Severity::Low, Coverage::Covered),
        ];
        let mut suggestions = BTreeMap::new();
        suggestions.insert(ClauseId::from("A"), "Write it down.".to_string());
        let merged = merge_findings(findings, &suggestions, &BTreeMap::new());

        assert_eq!(merged[0].suggestion, "Write it down.");
        assert_eq!(merged[0].priority, Priority::ShortTerm);
        assert_eq!(merged[1].suggestion, DEFAULT_SUGGESTION);
        assert_eq!(merged[1].priority, Priority::NoAction);
    }

    // ── function coverage ───────────────────────────────────────────

    #[test]
    fn function_coverage_groups_in_first_seen_order() {
        let findings: Vec<_> = [
            ("A", "Protect", Coverage::Covered),
            ("B", "Detect", Coverage::Missing),
            ("C", "Protect", Coverage::Partial),
            ("D", "", Coverage::Missing),
        ]
        .into_iter()
        .map(|(id, func, cov)| {
            finding(id, func, Severity::Low, cov).assess(String::new(), Priority::LongTerm)
        })
        .collect();

        let breakdown = function_coverage(&findings);
        let names: Vec<_> = breakdown.iter().map(|f| f.function.as_str()).collect();
        assert_eq!(names, vec!["Protect", "Detect", UNASSIGNED_FUNCTION]);
        assert_eq!(breakdown[0].total, 2);
        assert_eq!(breakdown[0].covered, 1);
        assert_eq!(breakdown[0].coverage_percentage, 50.0);
        assert_eq!(breakdown[1].missing, 1);
        assert_eq!(breakdown[1].coverage_percentage, 0.0);
    }
}
