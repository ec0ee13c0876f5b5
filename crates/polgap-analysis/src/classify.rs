//! # Coverage Classification
//!
//! Fixed thresholds partition the unit interval into three bands:
//!
//! ```text
//! score == 0        → Missing
//! 0 < score < 1     → Partial
//! score == 1        → Covered   (every keyword matched)
//! ```
//!
//! Classification is monotone: raising the score never moves a clause to a
//! worse band.

use polgap_core::Coverage;

/// Map a match score to a coverage verdict.
///
/// Scores outside `[0, 1]` are clamped into the nearest band; `NaN` is
/// treated as no match.
pub fn classify_coverage(score: f64) -> Coverage {
    if score.is_nan() || score <= 0.0 {
        Coverage::Missing
    } else if score >= 1.0 {
        Coverage::Covered
    } else {
        Coverage::Partial
    }
}
