//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::scoring::vector_space::{TermVector, Vocabulary};
use crate::types::ScorePair;

/// Stage names, in execution order.
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_OVERLAP: &str = "overlap";
pub const STAGE_VECTORIZE: &str = "vectorize";
pub const STAGE_SIMILARITY: &str = "similarity";

/// Wall-clock timer for a single stage.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Measurements reported at a stage boundary.
#[derive(Debug, Clone, Copy)]
pub struct StageReport {
    duration: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            items: None,
        }
    }

    /// Report with an item count, for stages that produce a countable
    /// artifact (tokens, vocabulary terms).
    pub fn with_items(duration: Duration, items: usize) -> Self {
        Self {
            duration,
            items: Some(items),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Observer over one scoring run.
///
/// All methods default to no-ops, so implementations override only what
/// they need. Artifact callbacks borrow the pipeline's intermediates;
/// observers that keep them must copy.
pub trait ScoreObserver {
    /// Called immediately before a stage runs.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// Called after a stage completes, with its measurements.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Both normalized token sequences, resume first.
    fn on_tokens(&mut self, _resume_tokens: &[String], _job_tokens: &[String]) {}

    /// The shared vocabulary and the two TF-IDF vectors over it.
    fn on_vectors(&mut self, _vocabulary: &Vocabulary, _resume: &TermVector, _job: &TermVector) {}

    /// The final scores, before any rounding.
    fn on_scores(&mut self, _scores: &ScorePair) {}
}

/// Observer that does nothing. Zero-overhead default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScoreObserver for NoopObserver {}

/// Records a `(stage, report)` pair for every executed stage.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Total wall-clock time across all recorded stages.
    pub fn total_duration(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.duration()).sum()
    }
}

impl ScoreObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
