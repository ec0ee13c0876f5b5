//! # polgap-core: Foundational Types for the Policy Gap Analyzer
//!
//! Leaf crate of the workspace. Every other `polgap-*` crate depends on it;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Typed records per stage.** A benchmark [`Clause`] is never mutated.
//!    Derived data lives in a separate [`PreprocessedClause`] so a field
//!    cannot be read before the stage that produces it has run.
//!
//! 2. **Closed vocabularies are enums.** [`Severity`], [`Coverage`],
//!    [`Priority`], and [`Posture`] serialize to the exact labels used in
//!    reports ("Short-Term", "High Risk", ...). Every `match` on them is
//!    exhaustive.
//!
//! 3. **One normalizer.** Clause keywords and policy segments are cleaned by
//!    the same [`normalize`] function, so the two sides of a comparison can
//!    never drift apart.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `polgap-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod assessment;
pub mod clause;
pub mod error;
pub mod text;

// Re-export primary types for ergonomic imports.
pub use assessment::{Coverage, Posture, Priority};
pub use clause::{Clause, ClauseId, PreprocessedClause, Severity};
pub use error::{CorpusError, CorpusResult, PolgapError};
pub use text::normalize;
