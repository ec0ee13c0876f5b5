//! # Error Types: Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Input-absence errors name the missing resource and its path, and are
//!   raised before any pipeline stage runs.
//! - Malformed clause records are *not* errors: absent `requirement_text`
//!   or `keywords` default to empty values during deserialization.
//! - Empty corpora and empty policy text are not errors either; they yield
//!   a zero-valued report.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the policy gap analyzer.
#[derive(Error, Debug)]
pub enum PolgapError {
    /// Loading or validating the clause corpus or policy text failed.
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Analyzer configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading analysis inputs.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A required input file does not exist.
    #[error("{resource} not found: {path}")]
    NotFound {
        /// Human-readable name of the missing resource ("policy clauses file").
        resource: &'static str,
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The clause corpus is not valid JSON or does not match the clause shape.
    #[error("failed to parse clause corpus at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two clauses share an identifier. Per-stage results are keyed by
    /// clause id, so ids must be unique within one corpus.
    #[error("duplicate clause id {clause_id:?} in clause corpus")]
    DuplicateClauseId { clause_id: String },

    /// Reading an input file failed for a reason other than absence.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for results carrying a [`CorpusError`].
pub type CorpusResult<T> = Result<T, CorpusError>;
