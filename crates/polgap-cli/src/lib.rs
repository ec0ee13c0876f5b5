//! # polgap-cli: Policy Gap Analyzer Command-Line Interface
//!
//! Provides the `polgap` binary.
//!
//! ## Subcommands
//!
//! - `polgap analyze`: score a policy against a clause corpus and emit the
//!   report as JSON, CSV, or a text summary.
//! - `polgap segments`: list the sentence segments of a policy.
//! - `polgap clauses`: list preprocessed clauses with normalized keywords.
//!
//! ```bash
//! polgap analyze data/sample_policies/sample_policy.txt --format summary
//! polgap -v --config polgap.yaml analyze policy.txt --format csv --out gaps.csv
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; analysis logic lives in `polgap-analysis`.
//! - Handlers return an exit code; errors propagate as `anyhow::Error`.

pub mod analyze;
pub mod config;
pub mod inspect;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to a base directory.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `base` resolves there; otherwise it is left relative to the current
/// directory.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let based = base.join(path);
    if based.exists() {
        based
    } else {
        path.to_path_buf()
    }
}

/// Write `content` to `out`, or to stdout when `out` is `None`.
pub fn emit(content: &str, out: Option<&Path>) -> anyhow::Result<()> {
    use anyhow::Context;

    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let abs = dir.path().join("x.json");
        assert_eq!(resolve_path(&abs, Path::new("/elsewhere")), abs);
    }

    #[test]
    fn relative_path_prefers_existing_file_under_base() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("clauses.json"), "[]").unwrap();
        assert_eq!(
            resolve_path(Path::new("clauses.json"), dir.path()),
            dir.path().join("clauses.json")
        );
        assert_eq!(
            resolve_path(Path::new("absent.json"), dir.path()),
            PathBuf::from("absent.json")
        );
    }

    #[test]
    fn emit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.csv");
        emit("a,b\n", Some(&out)).unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "a,b\n");
    }
}
