//! Core data types shared across the scoring engine.
//!
//! Everything here is call-local: a [`Document`] goes in, a [`ScorePair`]
//! (or a [`MatchReport`] at the analysis boundary) comes out, and nothing
//! survives the call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the comparison a document sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    Resume,
    Job,
}

impl DocumentRole {
    /// Name used in JSON payloads and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Job => "job",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw input document: a role plus arbitrary UTF-8 text.
///
/// The optional label is pass-through identification (a job name, a file
/// name). Scoring never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub role: DocumentRole,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Document {
    pub fn resume(text: impl Into<String>) -> Self {
        Self {
            role: DocumentRole::Resume,
            text: text.into(),
            label: None,
        }
    }

    pub fn job(text: impl Into<String>) -> Self {
        Self {
            role: DocumentRole::Job,
            text: text.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// The two independent scores produced by one comparison, unrounded, each
/// in `[0, 100]`.
///
/// `ats_score` and `matching_score` are computed from the same token
/// sequences but never influence each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    /// Share of the job description's keyword mass (with multiplicity)
    /// covered by the resume.
    pub ats_score: f64,
    /// Cosine similarity between the TF-IDF vectors of the two documents.
    pub matching_score: f64,
}

impl ScorePair {
    pub const ZERO: ScorePair = ScorePair {
        ats_score: 0.0,
        matching_score: 0.0,
    };

    /// Copy with both scores rounded to two decimal places, the rendering
    /// precision of every report surface.
    pub fn rounded(&self) -> Self {
        Self {
            ats_score: round_two_decimals(self.ats_score),
            matching_score: round_two_decimals(self.matching_score),
        }
    }
}

impl fmt::Display for ScorePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ats {:.2}% / matching {:.2}%",
            self.ats_score, self.matching_score
        )
    }
}

/// The record handed back to callers: rounded scores plus the pass-through
/// job name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// Keyword-overlap score, rounded to two decimals.
    pub ats_score: f64,
    /// Cosine-similarity score, rounded to two decimals.
    pub matching_score: f64,
}

impl MatchReport {
    pub fn new(job_name: Option<String>, scores: ScorePair) -> Self {
        let rounded = scores.rounded();
        Self {
            job_name,
            ats_score: rounded.ats_score,
            matching_score: rounded.matching_score,
        }
    }

    /// `"61.54%"` presentation of the ATS score.
    pub fn ats_percent(&self) -> String {
        format_percent(self.ats_score)
    }

    /// `"61.54%"` presentation of the matching score.
    pub fn matching_percent(&self) -> String {
        format_percent(self.matching_score)
    }

    /// `"61.54/100"` presentation of the ATS score.
    pub fn ats_fraction(&self) -> String {
        format_fraction(self.ats_score)
    }

    /// `"61.54/100"` presentation of the matching score.
    pub fn matching_fraction(&self) -> String {
        format_fraction(self.matching_score)
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn format_fraction(value: f64) -> String {
    format!("{value:.2}/100")
}
