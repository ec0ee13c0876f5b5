//! # Remediation Roadmap Priorities
//!
//! Priority is a pure lookup on severity × coverage:
//!
//! | severity | coverage | priority   |
//! |----------|----------|------------|
//! | any      | Covered  | No Action  |
//! | High     | Missing  | Immediate  |
//! | High     | Partial  | Short-Term |
//! | Medium   | Missing  | Short-Term |
//! | Medium   | Partial  | Long-Term  |
//! | Low      | Missing  | Long-Term  |
//! | Low      | Partial  | Long-Term  |
//! | Unrated  | Missing  | Long-Term  |
//! | Unrated  | Partial  | Long-Term  |

use std::collections::BTreeMap;

use polgap_core::{ClauseId, Coverage, Priority, Severity};

use crate::gap_report::GapFinding;

/// Remediation priority for a clause.
pub fn determine_priority(severity: Severity, coverage: Coverage) -> Priority {
    match (severity, coverage) {
        (_, Coverage::Covered) => Priority::NoAction,
        (Severity::High, Coverage::Missing) => Priority::Immediate,
        (Severity::High, Coverage::Partial) => Priority::ShortTerm,
        (Severity::Medium, Coverage::Missing) => Priority::ShortTerm,
        (Severity::Medium, Coverage::Partial) => Priority::LongTerm,
        (Severity::Low | Severity::Unrated, Coverage::Missing | Coverage::Partial) => {
            Priority::LongTerm
        }
    }
}

/// Assign a priority to every finding, keyed by clause id.
pub fn generate_improvement_roadmap(findings: &[GapFinding]) -> BTreeMap<ClauseId, Priority> {
    findings
        .iter()
        .map(|f| (f.clause_id.clone(), determine_priority(f.severity, f.coverage)))
        .collect()
}
