//! # Inspection Subcommands
//!
//! `polgap segments` and `polgap clauses` show the intermediate inputs to
//! matching, which is the quickest way to see why a clause did or did not
//! match a policy sentence.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use polgap_analysis::segment::segment_policy_with;
use polgap_analysis::{load_clauses, load_policy_text, preprocess_clauses};
use polgap_core::PreprocessedClause;

use crate::config::AnalyzerConfig;

/// Arguments for `polgap segments`.
#[derive(Args, Debug)]
pub struct SegmentsArgs {
    /// Policy document (plain text).
    pub policy: PathBuf,

    /// Minimum segment length in characters. Overrides the config file.
    #[arg(long)]
    pub min_length: Option<usize>,
}

/// Arguments for `polgap clauses`.
#[derive(Args, Debug)]
pub struct ClausesArgs {
    /// Clause corpus (JSON array). Overrides the config file.
    #[arg(long)]
    pub clauses: Option<PathBuf>,
}

/// List the policy's segments as `[id] text`.
pub fn run_segments(args: &SegmentsArgs, config: &AnalyzerConfig) -> Result<u8> {
    let min_length = args.min_length.unwrap_or(config.min_segment_length);
    if min_length == 0 {
        anyhow::bail!("--min-length must be at least 1");
    }

    let text = load_policy_text(&args.policy)?;
    let mut out = String::new();
    let mut count = 0usize;
    for segment in segment_policy_with(&text, min_length) {
        let _ = writeln!(out, "[{}] {}", segment.id, segment.text);
        count += 1;
    }
    tracing::info!(policy = %args.policy.display(), segments = count, "listed segments");

    crate::emit(&out, None)?;
    Ok(0)
}

/// List preprocessed clauses.
pub fn run_clauses(args: &ClausesArgs, config: &AnalyzerConfig) -> Result<u8> {
    let path = match &args.clauses {
        Some(p) => p.clone(),
        None => config.clauses_path(),
    };
    let clauses = load_clauses(&path)?;
    let preprocessed = preprocess_clauses(&clauses);
    tracing::info!(path = %path.display(), clauses = preprocessed.len(), "listed clauses");

    crate::emit(&render_clauses(&preprocessed), None)?;
    Ok(0)
}

/// Text listing of preprocessed clauses.
pub fn render_clauses(clauses: &[PreprocessedClause]) -> String {
    let mut out = String::new();
    for pc in clauses {
        let c = &pc.clause;
        let _ = writeln!(out, "{} [{}] {}", c.clause_id, c.severity, c.title);
        if !c.nist_function.is_empty() {
            let _ = writeln!(out, "  function:    {} / {}", c.nist_function, c.nist_category);
        }
        let _ = writeln!(out, "  requirement: {}", pc.normalized_requirement);
        let _ = writeln!(out, "  keywords:    {}", pc.normalized_keywords.join(", "));
    }
    out
}
