//! # Clause Preprocessing
//!
//! Attaches the normalized requirement text and normalized keyword list to
//! each benchmark clause. The input slice is borrowed, never mutated, and
//! output order matches input order.

use polgap_core::{Clause, PreprocessedClause, Severity};

/// Preprocess every clause of a corpus.
pub fn preprocess_clauses(clauses: &[Clause]) -> Vec<PreprocessedClause> {
    clauses
        .iter()
        .map(|clause| {
            if clause.keywords.is_empty() {
                tracing::warn!(
                    clause_id = %clause.clause_id,
                    "clause has no keywords; it will be classified as missing"
                );
            }
            if clause.severity == Severity::Unrated {
                tracing::warn!(
                    clause_id = %clause.clause_id,
                    "clause has an unrecognized severity; it will be prioritized as low"
                );
            }
            PreprocessedClause::from_clause(clause)
        })
        .collect()
}
