//! # Remediation Suggestions
//!
//! Deterministic text templates keyed by coverage. The generator returns a
//! partial result keyed by clause id; the pipeline joins it back onto the
//! findings, falling back to [`DEFAULT_SUGGESTION`] for any clause without
//! an entry.

use std::collections::BTreeMap;

use polgap_core::{ClauseId, Coverage};

use crate::gap_report::GapFinding;

/// Text used when no suggestion was generated for a finding.
pub const DEFAULT_SUGGESTION: &str = "No improvement required. Policy is adequately covered.";

/// Text for a fully covered clause.
pub const COVERED_SUGGESTION: &str =
    "No changes required. Existing policy sufficiently addresses this requirement.";

/// Remediation text for one clause.
pub fn suggestion_for(coverage: Coverage, title: &str) -> String {
    match coverage {
        Coverage::Missing => format!(
            "Add a policy statement that addresses the following requirement: {title}. \
             The policy should clearly define responsibilities, processes, and \
             enforcement mechanisms."
        ),
        Coverage::Partial => format!(
            "Enhance the existing policy section related to {title} by providing more \
             detailed guidance, roles, and implementation procedures to fully meet the \
             requirement."
        ),
        Coverage::Covered => COVERED_SUGGESTION.to_string(),
    }
}

/// Generate a suggestion for every finding, keyed by clause id.
pub fn generate_policy_suggestions(findings: &[GapFinding]) -> BTreeMap<ClauseId, String> {
    findings
        .iter()
        .map(|f| (f.clause_id.clone(), suggestion_for(f.coverage, &f.title)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_template() {
        assert_eq!(
            suggestion_for(Coverage::Missing, "Multi-factor authentication"),
            "Add a policy statement that addresses the following requirement: \
             Multi-factor authentication. The policy should clearly define \
             responsibilities, processes, and enforcement mechanisms."
        );
    }

    #[test]
    fn partial_template() {
        assert_eq!(
            suggestion_for(Coverage::Partial, "Access control"),
            "Enhance the existing policy section related to Access control by providing \
             more detailed guidance, roles, and implementation procedures to fully meet \
             the requirement."
        );
    }

    #[test]
    fn covered_template_ignores_title() {
        assert_eq!(suggestion_for(Coverage::Covered, "anything"), COVERED_SUGGESTION);
    }
}
