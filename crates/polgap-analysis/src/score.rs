//! # Adjusted Compliance Score
//!
//! A single 0–100 headline score derived from the coverage statistics and
//! two reviewer settings:
//!
//! - [`AnalysisMode`] scales strictness: the base score is divided by
//!   0.9 (quick scan), 1.0 (standard) or 1.2 (deep review).
//! - [`RiskSensitivity`] (1–5, neutral 3) subtracts 5 points per step
//!   above neutral and adds 5 per step below.
//!
//! The result is clamped to `[0, 100]` and rounded to an integer. The score
//! drives a score-based risk level and a verdict; it does not affect the
//! count-based posture in the report.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use polgap_core::{PolgapError, Posture};

use crate::report::Statistics;

// ---------------------------------------------------------------------------
// AnalysisMode
// ---------------------------------------------------------------------------

/// Review depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Lenient.
    QuickScan,
    #[default]
    Standard,
    /// Strict.
    DeepReview,
}

impl AnalysisMode {
    /// Divisor applied to the base score.
    pub fn factor(self) -> f64 {
        match self {
            Self::QuickScan => 0.9,
            Self::Standard => 1.0,
            Self::DeepReview => 1.2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuickScan => "quick_scan",
            Self::Standard => "standard",
            Self::DeepReview => "deep_review",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "quick" | "quick_scan" => Ok(Self::QuickScan),
            "standard" => Ok(Self::Standard),
            "deep" | "deep_review" => Ok(Self::DeepReview),
            other => Err(format!(
                "unknown analysis mode {other:?} (expected quick-scan, standard, or deep-review)"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// RiskSensitivity
// ---------------------------------------------------------------------------

/// Detection strictness on a 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskSensitivity(u8);

impl RiskSensitivity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const NEUTRAL: u8 = 3;

    /// Validate a sensitivity level.
    pub fn new(level: u8) -> Result<Self, PolgapError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(PolgapError::Config(format!(
                "risk sensitivity must be between {} and {}, got {level}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Points subtracted from the score.
    pub fn penalty(self) -> f64 {
        (f64::from(self.0) - f64::from(Self::NEUTRAL)) * 5.0
    }
}

impl Default for RiskSensitivity {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

impl TryFrom<u8> for RiskSensitivity {
    type Error = PolgapError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<RiskSensitivity> for u8 {
    fn from(s: RiskSensitivity) -> u8 {
        s.0
    }
}

// ---------------------------------------------------------------------------
// Score, risk level, verdict
// ---------------------------------------------------------------------------

/// Adjusted headline score in `0..=100`.
pub fn adjusted_compliance_score(
    stats: &Statistics,
    mode: AnalysisMode,
    sensitivity: RiskSensitivity,
) -> u8 {
    let base = if stats.total_clauses == 0 {
        0.0
    } else {
        stats.covered as f64 / stats.total_clauses as f64 * 100.0
    };
    let adjusted = base / mode.factor() - sensitivity.penalty();
    adjusted.clamp(0.0, 100.0).round_ties_even() as u8
}

/// Score-based risk level: below 50 is high, below 80 moderate.
pub fn risk_level(score: u8) -> Posture {
    match score {
        0..=49 => Posture::HighRisk,
        50..=79 => Posture::ModerateRisk,
        _ => Posture::LowRisk,
    }
}

/// Overall compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceVerdict {
    LargelyCompliant,
    PartiallyCompliant,
    NonCompliant,
}

impl ComplianceVerdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::LargelyCompliant,
            50..=79 => Self::PartiallyCompliant,
            _ => Self::NonCompliant,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::LargelyCompliant => "The policy is largely compliant.",
            Self::PartiallyCompliant => {
                "The policy is partially compliant and requires improvements."
            }
            Self::NonCompliant => {
                "The policy is non-compliant and requires immediate remediation."
            }
        }
    }
}

impl fmt::Display for ComplianceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
