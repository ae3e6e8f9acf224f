//! Resume / job-description match scoring.
//!
//! Produces two independent signals for one comparison:
//!
//! - **ATS score** — how much of the job description's keyword mass (with
//!   multiplicity) the resume covers.
//! - **Matching score** — cosine similarity between TF-IDF vectors built
//!   over the two-document corpus.
//!
//! Both are percentages in `[0, 100]`. The engine is pure and stateless:
//! no I/O, no persistence, no shared mutable state, and no errors for any
//! pair of well-formed strings. Degenerate inputs (empty documents,
//! symbol-only text, all-stopword text) resolve to defined zero scores.
//!
//! ```
//! use resume_match::ScoringPipeline;
//!
//! let pipeline = ScoringPipeline::default();
//! let scores = pipeline.score(
//!     "Seasoned Rust engineer with systems programming experience.",
//!     "Rust engineer wanted for systems programming.",
//! );
//! assert!(scores.ats_score > 0.0 && scores.ats_score <= 100.0);
//! assert!(scores.matching_score > 0.0 && scores.matching_score <= 100.0);
//! ```
//!
//! Turning uploads (PDF, DOCX) into text is an external collaborator's
//! job; the [`source`] module fixes that boundary and provides
//! [`analyze`] for the extract-score-report flow.

pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod source;
pub mod types;

pub use nlp::normalizer::normalize;
pub use nlp::stopwords::StopwordFilter;
pub use pipeline::config::{ConfigError, ConfigReport, ScoringConfig};
pub use pipeline::observer::{NoopObserver, ScoreObserver, StageTimingObserver};
pub use pipeline::runner::ScoringPipeline;
pub use scoring::overlap::overlap_score;
pub use scoring::similarity::cosine_percent;
pub use scoring::vector_space::{TermVector, VectorSpaceBuilder, Vocabulary};
pub use source::{analyze, ExtractionError, PlainText, TextSource};
pub use types::{Document, DocumentRole, MatchReport, ScorePair};
