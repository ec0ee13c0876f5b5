//! Determinism and structural invariants of the full pipeline.
//!
//! Two runs over the same inputs must serialize to identical bytes, and for
//! arbitrary inputs the report must stay internally consistent.

use polgap_analysis::{analyze_policy, run_analysis, AnalysisOptions};
use polgap_core::{Clause, Coverage, Priority, Severity};
use proptest::prelude::*;

fn clause(id: String, keywords: Vec<String>, severity: Severity) -> Clause {
    Clause {
        clause_id: id.as_str().into(),
        title: "Control".into(),
        description: String::new(),
        requirement_text: String::new(),
        keywords,
        nist_function: "Protect".into(),
        nist_category: String::new(),
        severity,
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let clauses = vec![
        clause("A".into(), vec!["password".into(), "rotation".into()], Severity::High),
        clause("B".into(), vec!["encryption".into()], Severity::Medium),
        clause("C".into(), vec!["badge".into(), "visitor".into()], Severity::Low),
    ];
    let text = "Passwords must meet complexity standards. Visitors must wear a badge at all times.";

    let first = serde_json::to_string(&run_analysis(&clauses, text, &AnalysisOptions::default()).unwrap()).unwrap();
    let second = serde_json::to_string(&run_analysis(&clauses, text, &AnalysisOptions::default()).unwrap()).unwrap();
    assert_eq!(first, second);
}

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::Low), Just(Severity::Medium), Just(Severity::High)]
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Clause>> {
    prop::collection::vec(
        (prop::collection::vec("[a-z]{3,8}", 0..4), severity_strategy()),
        0..8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (keywords, severity))| clause(format!("C-{i}"), keywords, severity))
            .collect()
    })
}

proptest! {
    #[test]
    fn report_is_consistent(
        clauses in corpus_strategy(),
        text in "([a-z]{2,9} ){3,12}[a-z]{2,9}[.!?] ?",
    ) {
        let report = analyze_policy(&clauses, &text);
        let s = &report.statistics;

        prop_assert_eq!(report.findings.len(), clauses.len());
        prop_assert_eq!(s.total_clauses, clauses.len());
        prop_assert_eq!(s.covered + s.partial + s.missing, s.total_clauses);
        prop_assert_eq!(report.summary.key_risks, s.missing);
        prop_assert!((0.0..=100.0).contains(&s.coverage_percentage));

        for (finding, clause) in report.findings.iter().zip(&clauses) {
            prop_assert_eq!(&finding.clause_id, &clause.clause_id);
            prop_assert!((0.0..=1.0).contains(&finding.match_score));
            prop_assert_eq!(finding.coverage == Coverage::Covered, finding.priority == Priority::NoAction);
            prop_assert_eq!(finding.coverage == Coverage::Missing, finding.matched_text.is_none());
        }

        let gaps = report.findings.iter().filter(|f| f.coverage != Coverage::Covered).count();
        prop_assert_eq!(report.roadmap.len(), gaps);
    }

    #[test]
    fn identical_inputs_give_identical_json(
        clauses in corpus_strategy(),
        text in "([a-z]{2,9} ){3,12}[a-z]{2,9}[.!?] ?",
    ) {
        let a = serde_json::to_string(&analyze_policy(&clauses, &text)).unwrap();
        let b = serde_json::to_string(&analyze_policy(&clauses, &text)).unwrap();
        prop_assert_eq!(a, b);
    }
}
