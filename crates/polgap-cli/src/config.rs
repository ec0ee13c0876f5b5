//! # Analyzer Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, so
//! an empty file (or no file) is valid. Command-line flags override values
//! from the file.
//!
//! ```yaml
//! framework: CIS Controls v8
//! analysis_mode: deep_review
//! risk_sensitivity: 4
//! min_segment_length: 25
//! clauses: data/cis_v8/policy_clauses.json
//! ```
//!
//! A relative `clauses` path is resolved against the directory that holds
//! the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use polgap_analysis::pipeline::DEFAULT_FRAMEWORK;
use polgap_analysis::{AnalysisMode, AnalysisOptions, RiskSensitivity, MIN_SEGMENT_LENGTH};

/// Default location of the benchmark clause corpus.
pub const DEFAULT_CLAUSES_PATH: &str = "data/nist_csf/policy_clauses.json";

/// Settings read from the YAML config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub framework: String,
    pub analysis_mode: AnalysisMode,
    pub risk_sensitivity: RiskSensitivity,
    pub min_segment_length: usize,
    pub clauses: PathBuf,
    /// Directory that relative paths in this config resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            framework: DEFAULT_FRAMEWORK.to_string(),
            analysis_mode: AnalysisMode::default(),
            risk_sensitivity: RiskSensitivity::default(),
            min_segment_length: MIN_SEGMENT_LENGTH,
            clauses: PathBuf::from(DEFAULT_CLAUSES_PATH),
            base_dir: PathBuf::from("."),
        }
    }
}

impl AnalyzerConfig {
    /// Load the config at `path`, or the defaults when `path` is `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        config.base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.to_options().validate()?;
        Ok(config)
    }

    /// Analysis options carried by this config.
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            framework: self.framework.clone(),
            mode: self.analysis_mode,
            sensitivity: self.risk_sensitivity,
            min_segment_length: self.min_segment_length,
        }
    }

    /// Clause corpus path, resolved against the config directory.
    pub fn clauses_path(&self) -> PathBuf {
        crate::resolve_path(&self.clauses, &self.base_dir)
    }
}
