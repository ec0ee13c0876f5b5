//! # Keyword Overlap Matching
//!
//! Scores a clause against each policy segment by the fraction of its
//! normalized keywords that occur in the segment text, and keeps the best
//! segment.
//!
//! ## Matching Semantics
//!
//! A keyword matches when it is a case-insensitive *substring* of the
//! segment's original text: `"password"` matches `"Passwords"`. There is no
//! tokenization or word-boundary check. The permissive rule favors recall,
//! since wrongly reporting an addressed clause as missing is the more
//! harmful error in a compliance review.

use serde::{Deserialize, Serialize};

use polgap_core::PreprocessedClause;

use crate::segment::Segment;

/// The best-scoring segment for one clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Fraction of clause keywords found in the best segment, in `[0, 1]`.
    pub best_score: f64,
    /// Id of the winning segment; `None` if no segment scored above zero.
    pub best_segment_id: Option<usize>,
    /// Text of the winning segment; `None` if no segment scored above zero.
    pub best_segment_text: Option<String>,
}

impl MatchResult {
    /// Result for a clause that matched nothing.
    pub fn none() -> Self {
        Self {
            best_score: 0.0,
            best_segment_id: None,
            best_segment_text: None,
        }
    }
}

/// Fraction of `keywords` that occur, case-insensitively, in `segment_text`.
///
/// Returns `0.0` for an empty keyword list: a clause with nothing to match
/// gets the lowest possible score.
pub fn keyword_overlap_score<S: AsRef<str>>(keywords: &[S], segment_text: &str) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let haystack = segment_text.to_lowercase();
    let matched = keywords
        .iter()
        .filter(|kw| haystack.contains(&kw.as_ref().to_lowercase()))
        .count();
    matched as f64 / keywords.len() as f64
}

/// Find the segment that best matches `clause`.
///
/// A later segment replaces the current best only on a strictly higher
/// score, so the earliest segment wins ties.
pub fn find_best_match(clause: &PreprocessedClause, segments: &[Segment]) -> MatchResult {
    let mut best_score = 0.0;
    let mut best: Option<&Segment> = None;

    for segment in segments {
        let score = keyword_overlap_score(clause.normalized_keywords.as_slice(), &segment.text);
        if score > best_score {
            best_score = score;
            best = Some(segment);
        }
    }

    tracing::trace!(
        clause_id = %clause.id(),
        best_score,
        best_segment_id = ?best.map(|s| s.id),
        "clause matched"
    );

    MatchResult {
        best_score,
        best_segment_id: best.map(|s| s.id),
        best_segment_text: best.map(|s| s.text.clone()),
    }
}
