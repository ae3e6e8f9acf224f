//! Scoring configuration.
//!
//! A [`ScoringConfig`] pins down the parameters the scoring algorithms
//! leave open: the stopword language, deployment-specific extra stopwords,
//! the token ceiling applied at the analysis boundary, and strictness. Two
//! pipelines built from equal configs produce identical scores for
//! identical inputs.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "language": "en",
//!   "extra_stopwords": ["referencesavailable"],
//!   "max_tokens": 200000,
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nlp::stopwords::StopwordFilter;

/// Scoring engine configuration (all fields optional in JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Stopword language for the TF-IDF vocabulary.
    #[serde(default = "default_language")]
    pub language: String,

    /// Deployment-specific additions to the stopword list.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    /// Ceiling on tokens per document, applied at the analysis boundary by
    /// truncation. `None` disables the guard.
    #[serde(default)]
    pub max_tokens: Option<usize>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation check.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            extra_stopwords: Vec::new(),
            max_tokens: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

impl ScoringConfig {
    /// Build the frozen stopword filter this config describes.
    pub fn stopword_filter(&self) -> StopwordFilter {
        let mut filter = StopwordFilter::new(&self.language);
        if !self.extra_stopwords.is_empty() {
            let extras: Vec<&str> = self.extra_stopwords.iter().map(String::as_str).collect();
            filter.add_stopwords(&extras);
        }
        filter
    }

    /// Run every validation check and collect all diagnostics; never
    /// short-circuits on the first problem.
    pub fn validate(&self) -> ConfigReport {
        let mut report = ConfigReport::default();

        if self.max_tokens == Some(0) {
            report
                .diagnostics
                .push(ConfigDiagnostic::error(ConfigError::ZeroMaxTokens));
        }

        for key in self.unknown_fields.keys() {
            let diag_fn = if self.strict {
                ConfigDiagnostic::error
            } else {
                ConfigDiagnostic::warning
            };
            report
                .diagnostics
                .push(diag_fn(ConfigError::UnknownField(key.clone())));
        }

        report
    }
}

// ─── Diagnostics ────────────────────────────────────────────────────────────

/// A configuration problem found by [`ScoringConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "code", content = "detail")]
pub enum ConfigError {
    #[error("max_tokens must be greater than 0")]
    ZeroMaxTokens,

    #[error("unrecognized field \"{0}\"")]
    UnknownField(String),
}

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub error: ConfigError,
}

impl ConfigDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

/// Collected diagnostics from validating one config.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigReport {
    pub diagnostics: Vec<ConfigDiagnostic>,
}

impl ConfigReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let config: ScoringConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.language, "en");
        assert!(config.extra_stopwords.is_empty());
        assert!(config.max_tokens.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "language": "de",
            "extra_stopwords": ["lebenslauf"],
            "max_tokens": 100000,
            "strict": true
        }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.language, "de");
        assert_eq!(config.extra_stopwords, vec!["lebenslauf"]);
        assert_eq!(config.max_tokens, Some(100000));
        assert!(config.strict);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{ "language": "en", "bogus_knob": 42 }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        assert!(config.unknown_fields.contains_key("bogus_knob"));
    }

    #[test]
    fn test_default_config_is_valid() {
        let report = ScoringConfig::default().validate();
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_zero_max_tokens_is_an_error() {
        let config = ScoringConfig {
            max_tokens: Some(0),
            ..Default::default()
        };
        let report = config.validate();
        assert!(report.has_errors());
        assert!(report.errors().any(|e| *e == ConfigError::ZeroMaxTokens));
    }

    #[test]
    fn test_unknown_fields_warn_by_default() {
        let json = r#"{ "bogus_knob": 42 }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        let report = config.validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_unknown_fields_fail_in_strict_mode() {
        let json = r#"{ "strict": true, "bogus_knob": 42 }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        let report = config.validate();
        assert!(report.has_errors());
        assert!(report
            .errors()
            .any(|e| *e == ConfigError::UnknownField("bogus_knob".to_string())));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::ZeroMaxTokens.to_string(),
            "max_tokens must be greater than 0"
        );
        assert_eq!(
            ConfigError::UnknownField("bogus".to_string()).to_string(),
            "unrecognized field \"bogus\""
        );
    }

    #[test]
    fn test_stopword_filter_includes_extras() {
        let config = ScoringConfig {
            extra_stopwords: vec!["referencesavailable".to_string()],
            ..Default::default()
        };
        let filter = config.stopword_filter();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("referencesavailable"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = r#"{"language":"fr","max_tokens":5000}"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["language"], "fr");
        assert_eq!(back["max_tokens"], 5000);
    }
}
