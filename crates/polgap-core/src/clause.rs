//! # Benchmark Clauses
//!
//! A [`Clause`] is one requirement drawn from a compliance framework such
//! as NIST CSF. Clause records arrive from an external corpus and are
//! deserialized permissively: a clause without `requirement_text` or
//! `keywords` loads with empty values, scores zero against every segment,
//! and ends up classified as missing instead of aborting the run.
//!
//! Preprocessing never rewrites a [`Clause`]; it produces a
//! [`PreprocessedClause`] that owns the original next to the derived fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::normalize;

// ---------------------------------------------------------------------------
// ClauseId
// ---------------------------------------------------------------------------

/// Stable identifier of a benchmark clause (e.g. `"PR.AC-1"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseId(String);

impl ClauseId {
    /// Wrap a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClauseId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Clause-intrinsic importance rating, independent of coverage.
///
/// Labels are matched case-insensitively. A label outside the three known
/// ratings loads as [`Severity::Unrated`] so that one oddly rated clause
/// does not reject the whole corpus; unrated clauses are prioritized like
/// low-severity ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    /// Any label other than low, medium or high.
    Unrated,
}

impl Severity {
    /// Report label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unrated => "Unrated",
        }
    }

    /// Parse a corpus label, falling back to [`Severity::Unrated`].
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("low") {
            Self::Low
        } else if label.eq_ignore_ascii_case("medium") {
            Self::Medium
        } else if label.eq_ignore_ascii_case("high") {
            Self::High
        } else {
            Self::Unrated
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Clause
// ---------------------------------------------------------------------------

/// A benchmark compliance requirement as it appears in the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// Unique, stable identifier.
    pub clause_id: ClauseId,
    /// Short human-readable name, used in remediation text.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// The literal requirement statement.
    #[serde(default)]
    pub requirement_text: String,
    /// Terms matched against policy segments. Order is irrelevant to scoring.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Framework function (e.g. "Protect"). Opaque to scoring.
    #[serde(default)]
    pub nist_function: String,
    /// Framework category (e.g. "PR.AC"). Opaque to scoring.
    #[serde(default)]
    pub nist_category: String,
    pub severity: Severity,
}

// ---------------------------------------------------------------------------
// PreprocessedClause
// ---------------------------------------------------------------------------

/// A clause together with its normalized requirement and keywords.
///
/// `normalized_keywords[i]` is always `normalize(&clause.keywords[i])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessedClause {
    #[serde(flatten)]
    pub clause: Clause,
    pub normalized_requirement: String,
    pub normalized_keywords: Vec<String>,
}

impl PreprocessedClause {
    /// Derive the normalized fields from a borrowed clause.
    pub fn from_clause(clause: &Clause) -> Self {
        Self {
            normalized_requirement: normalize(&clause.requirement_text),
            normalized_keywords: clause.keywords.iter().map(|k| normalize(k)).collect(),
            clause: clause.clone(),
        }
    }

    /// Identifier of the underlying clause.
    pub fn id(&self) -> &ClauseId {
        &self.clause.clause_id
    }
}
