//! # Assessment Vocabulary
//!
//! Closed enums produced by the gap analysis pipeline: per-clause
//! [`Coverage`], remediation [`Priority`], and the aggregate [`Posture`].
//! Each serializes to the exact label shown in reports.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

/// How well a clause is addressed by the policy.
///
/// Ordered worst → best: `Missing < Partial < Covered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coverage {
    /// No clause keyword occurs in any policy segment.
    Missing,
    /// Some, but not all, keywords occur in the best segment.
    Partial,
    /// Every keyword occurs in the best segment.
    Covered,
}

impl Coverage {
    /// All variants, worst first.
    pub const ALL: [Coverage; 3] = [Self::Missing, Self::Partial, Self::Covered];

    fn ordering(self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Partial => 1,
            Self::Covered => 2,
        }
    }

    /// Report label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "Missing",
            Self::Partial => "Partial",
            Self::Covered => "Covered",
        }
    }

    /// Whether the clause needs remediation.
    pub fn is_gap(self) -> bool {
        !matches!(self, Self::Covered)
    }
}

impl PartialOrd for Coverage {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coverage {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordering().cmp(&other.ordering())
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Remediation urgency derived from severity × coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Immediate")]
    Immediate,
    #[serde(rename = "Short-Term")]
    ShortTerm,
    #[serde(rename = "Long-Term")]
    LongTerm,
    #[serde(rename = "No Action")]
    NoAction,
}

impl Priority {
    /// Report label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::ShortTerm => "Short-Term",
            Self::LongTerm => "Long-Term",
            Self::NoAction => "No Action",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Posture
// ---------------------------------------------------------------------------

/// Overall qualitative risk rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Posture {
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl Posture {
    /// Report label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LowRisk => "Low Risk",
            Self::ModerateRisk => "Moderate Risk",
            Self::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_orders_worst_to_best() {
        assert!(Coverage::Missing < Coverage::Partial);
        assert!(Coverage::Partial < Coverage::Covered);
        let mut sorted = vec![Coverage::Covered, Coverage::Missing, Coverage::Partial];
        sorted.sort();
        assert_eq!(sorted, Coverage::ALL.to_vec());
    }

    #[test]
    fn only_covered_is_not_a_gap() {
        assert!(Coverage::Missing.is_gap());
        assert!(Coverage::Partial.is_gap());
        assert!(!Coverage::Covered.is_gap());
    }

    #[test]
    fn labels_match_serialized_form() {
        for p in [
            Priority::Immediate,
            Priority::ShortTerm,
            Priority::LongTerm,
            Priority::NoAction,
        ] {
            assert_eq!(serde_json::to_string(&p).unwrap(), format!("\"{p}\""));
        }
        for p in [Posture::LowRisk, Posture::ModerateRisk, Posture::HighRisk] {
            assert_eq!(serde_json::to_string(&p).unwrap(), format!("\"{p}\""));
        }
        for c in Coverage::ALL {
            assert_eq!(serde_json::to_string(&c).unwrap(), format!("\"{c}\""));
        }
    }
}
