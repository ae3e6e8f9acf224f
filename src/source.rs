//! Text-source boundary for the analysis flow.
//!
//! The engine scores already-decoded plain text; turning uploads (PDF,
//! DOCX) into text belongs to an external collaborator. This module fixes
//! the contract such a collaborator must satisfy, ships the one source the
//! engine owns itself, and provides [`analyze`], the orchestration that
//! runs extraction, scoring, and report assembly end to end.

use thiserror::Error;

use crate::nlp::normalizer::normalize;
use crate::pipeline::runner::ScoringPipeline;
use crate::types::MatchReport;

/// Failure modes a text-extraction collaborator may signal.
///
/// Empty extracted text is not one of them. A readable document with no
/// recoverable text must yield `Ok` with an empty string; it means "no
/// signal" and scores as the defined zeros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The input format is outside the collaborator's supported set.
    #[error("unsupported document format \"{format}\"")]
    UnsupportedFormat { format: String },

    /// The format is supported but extraction failed (corrupt file,
    /// decode error).
    #[error("text extraction failed: {0}")]
    Extraction(String),
}

/// A source of already-decoded document text.
pub trait TextSource {
    /// Produce the document's plain text.
    fn extract(&self) -> Result<String, ExtractionError>;
}

/// Text that needs no extraction. Infallible.
#[derive(Debug, Clone, Default)]
pub struct PlainText(pub String);

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl TextSource for PlainText {
    fn extract(&self) -> Result<String, ExtractionError> {
        Ok(self.0.clone())
    }
}

/// Run the full analysis flow: extract the resume text, score it against
/// the job description, and wrap the rounded scores in a [`MatchReport`].
///
/// `job_name` is pass-through identification; scoring never reads it.
/// Extraction failures propagate. When the pipeline's config sets
/// `max_tokens`, each document is truncated to that many tokens before
/// scoring, so the reported scores cover the kept prefix.
pub fn analyze(
    pipeline: &ScoringPipeline,
    resume: &dyn TextSource,
    job_name: Option<&str>,
    job_description: &str,
) -> Result<MatchReport, ExtractionError> {
    let resume_text = resume.extract()?;

    let mut resume_tokens = normalize(&resume_text);
    let mut job_tokens = normalize(job_description);
    if let Some(max_tokens) = pipeline.config().max_tokens {
        resume_tokens.truncate(max_tokens);
        job_tokens.truncate(max_tokens);
    }

    let scores = pipeline.score_normalized(&resume_tokens, &job_tokens);
    Ok(MatchReport::new(job_name.map(str::to_string), scores))
}
