//! # Input Loading
//!
//! Reads the benchmark clause corpus (a JSON array of clause records) and
//! the policy text (UTF-8). Absent inputs fail fast with an error naming
//! the missing resource, before any pipeline stage runs.

use std::collections::HashSet;
use std::path::Path;

use polgap_core::{Clause, CorpusError, CorpusResult};

/// Load and validate the clause corpus at `path`.
pub fn load_clauses(path: &Path) -> CorpusResult<Vec<Clause>> {
    let content = read_input(path, "policy clauses file")?;
    let clauses = parse_clauses(&content, path)?;
    tracing::info!(path = %path.display(), count = clauses.len(), "loaded policy clauses");
    Ok(clauses)
}

/// Parse a clause corpus from JSON text. `origin` is used in error messages.
pub fn parse_clauses(content: &str, origin: &Path) -> CorpusResult<Vec<Clause>> {
    let clauses: Vec<Clause> =
        serde_json::from_str(content).map_err(|source| CorpusError::JsonParse {
            path: origin.to_path_buf(),
            source,
        })?;
    ensure_unique_ids(&clauses)?;
    Ok(clauses)
}

/// Load the organizational policy text at `path`.
pub fn load_policy_text(path: &Path) -> CorpusResult<String> {
    let text = read_input(path, "policy file")?;
    tracing::info!(path = %path.display(), bytes = text.len(), "loaded policy text");
    Ok(text)
}

/// Reject corpora in which two clauses share an id.
pub fn ensure_unique_ids(clauses: &[Clause]) -> CorpusResult<()> {
    let mut seen = HashSet::new();
    for clause in clauses {
        if !seen.insert(clause.clause_id.as_str()) {
            return Err(CorpusError::DuplicateClauseId {
                clause_id: clause.clause_id.to_string(),
            });
        }
    }
    Ok(())
}

fn read_input(path: &Path, resource: &'static str) -> CorpusResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CorpusError::NotFound {
                resource,
                path: path.to_path_buf(),
            }
        } else {
            CorpusError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polgap_core::{Coverage, Priority, Severity};
    use std::io::Write;

    #[test]
    fn missing_corpus_names_the_resource() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy_clauses.json");
        let err = load_clauses(&path).unwrap_err();
        assert!(matches!(err, CorpusError::NotFound { .. }));
        let msg = err.to_string();
        assert!(msg.starts_with("policy clauses file not found"), "got: {msg}");
        assert!(msg.contains("policy_clauses.json"));
    }

    #[test]
    fn missing_policy_names_the_resource() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_policy_text(&dir.path().join("policy.txt")).unwrap_err();
        assert!(err.to_string().starts_with("policy file not found"));
    }

    #[test]
    fn loads_corpus_with_permissive_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"clause_id": "PR.AC-1", "title": "Identities managed",
                  "requirement_text": "Identities and credentials are managed.",
                  "keywords": ["identity", "credential"], "severity": "High"}},
                {{"clause_id": "DE.CM-1", "title": "Network monitoring", "severity": "Low"}}
            ]"#
        )
        .unwrap();
        let clauses = load_clauses(file.path()).unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[1].keywords.len(), 0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_clauses("{not json", Path::new("corpus.json")).unwrap_err();
        assert!(matches!(err, CorpusError::JsonParse { .. }));
        assert!(err.to_string().contains("corpus.json"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"clause_id": "A", "title": "a", "severity": "Low"},
            {"clause_id": "A", "title": "b", "severity": "High"}
        ]"#;
        let err = parse_clauses(json, Path::new("corpus.json")).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateClauseId { ref clause_id } if clause_id == "A"));
    }

    #[test]
    fn unrecognized_severity_does_not_reject_corpus() {
        let json = r#"[
            {"clause_id": "A", "title": "Key escrow", "keywords": ["escrow"], "severity": "Critical"},
            {"clause_id": "B", "title": "Passwords", "keywords": ["password"], "severity": "High"}
        ]"#;
        let clauses = parse_clauses(json, Path::new("c.json")).unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].severity, Severity::Unrated);

        let report = crate::analyze_policy(
            &clauses,
            "Passwords are rotated every ninety days by all staff.",
        );
        assert_eq!(report.findings[0].coverage, Coverage::Missing);
        assert_eq!(report.findings[0].priority, Priority::LongTerm);
        assert_eq!(report.findings[1].coverage, Coverage::Covered);
        assert_eq!(report.findings[1].priority, Priority::NoAction);
    }

    #[test]
    fn empty_corpus_is_not_an_error() {
        assert!(parse_clauses("[]", Path::new("corpus.json")).unwrap().is_empty());
    }
}
