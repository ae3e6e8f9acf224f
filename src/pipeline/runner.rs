//! Pipeline runner — orchestrates stage execution for one comparison.
//!
//! [`ScoringPipeline`] normalizes both documents once, then feeds the token
//! sequences to the keyword-overlap scorer and, independently, through the
//! vector-space builder into the cosine scorer. The two scores never
//! influence each other; they only share the normalization stage.
//!
//! The pipeline holds no per-call state. The only thing it owns is the
//! stopword filter frozen from its [`ScoringConfig`], so one instance can
//! be shared across threads and every call is a pure function of its
//! arguments.

use crate::nlp::normalizer::normalize;
use crate::pipeline::config::ScoringConfig;
use crate::pipeline::observer::{
    NoopObserver, ScoreObserver, StageClock, StageReport, STAGE_NORMALIZE, STAGE_OVERLAP,
    STAGE_SIMILARITY, STAGE_VECTORIZE,
};
use crate::scoring::overlap::overlap_score;
use crate::scoring::similarity::cosine_percent;
use crate::scoring::vector_space::VectorSpaceBuilder;
use crate::types::{Document, ScorePair};

use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("scoring_stage", stage = $name).entered();
    };
}

/// Below this many jobs, [`ScoringPipeline::score_many`] runs sequentially;
/// the thread-pool handoff costs more than the scoring itself.
const PARALLEL_BATCH_THRESHOLD: usize = 8;

// ============================================================================
// ScoringPipeline
// ============================================================================

/// The scoring facade: one call in, two scores out.
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    config: ScoringConfig,
    vector_space: VectorSpaceBuilder,
}

impl Default for ScoringPipeline {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringPipeline {
    /// Build a pipeline from a configuration, freezing its stopword set.
    pub fn new(config: ScoringConfig) -> Self {
        let vector_space = VectorSpaceBuilder::new(config.stopword_filter());
        Self {
            config,
            vector_space,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a resume against a job description.
    ///
    /// Total over any pair of strings: empty or degenerate inputs resolve
    /// to the defined zero scores, never an error.
    pub fn score(&self, resume_text: &str, job_text: &str) -> ScorePair {
        self.run(resume_text, job_text, &mut NoopObserver)
    }

    /// Score with observer callbacks at every stage boundary.
    pub fn run_with_observer(
        &self,
        resume: &Document,
        job: &Document,
        observer: &mut impl ScoreObserver,
    ) -> ScorePair {
        self.run(&resume.text, &job.text, observer)
    }

    /// Score one resume against several job descriptions.
    ///
    /// Results line up with `jobs` by index and are identical to calling
    /// [`ScoringPipeline::score`] once per job. Larger batches fan out
    /// across the rayon pool.
    pub fn score_many(&self, resume_text: &str, jobs: &[Document]) -> Vec<ScorePair> {
        if jobs.len() < PARALLEL_BATCH_THRESHOLD {
            return jobs
                .iter()
                .map(|job| self.score(resume_text, &job.text))
                .collect();
        }

        jobs.par_iter()
            .map(|job| self.score(resume_text, &job.text))
            .collect()
    }

    /// Stages 1-3 over already-normalized tokens. The analysis boundary
    /// uses this after applying its token ceiling.
    pub(crate) fn score_normalized(
        &self,
        resume_tokens: &[String],
        job_tokens: &[String],
    ) -> ScorePair {
        let ats_score = overlap_score(resume_tokens, job_tokens);
        let (_, resume_vector, job_vector) = self.vector_space.build(resume_tokens, job_tokens);
        let matching_score = cosine_percent(&resume_vector, &job_vector);
        ScorePair {
            ats_score,
            matching_score,
        }
    }

    /// Execute the stages in order:
    /// 1. Normalize both documents
    /// 2. Keyword overlap over the raw token sequences
    /// 3. TF-IDF vectors over the shared vocabulary
    /// 4. Cosine similarity
    ///
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`] for zero-overhead execution.
    fn run(
        &self,
        resume_text: &str,
        job_text: &str,
        observer: &mut impl ScoreObserver,
    ) -> ScorePair {
        // Stage 0: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let resume_tokens = normalize(resume_text);
        let job_tokens = normalize(job_text);
        let report =
            StageReport::with_items(clock.elapsed(), resume_tokens.len() + job_tokens.len());
        observer.on_stage_end(STAGE_NORMALIZE, &report);
        observer.on_tokens(&resume_tokens, &job_tokens);

        // Stage 1: Keyword overlap
        trace_stage!(STAGE_OVERLAP);
        observer.on_stage_start(STAGE_OVERLAP);
        let clock = StageClock::start();
        let ats_score = overlap_score(&resume_tokens, &job_tokens);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_OVERLAP, &report);

        // Stage 2: Vectorize
        trace_stage!(STAGE_VECTORIZE);
        observer.on_stage_start(STAGE_VECTORIZE);
        let clock = StageClock::start();
        let (vocabulary, resume_vector, job_vector) =
            self.vector_space.build(&resume_tokens, &job_tokens);
        let report = StageReport::with_items(clock.elapsed(), vocabulary.len());
        observer.on_stage_end(STAGE_VECTORIZE, &report);
        observer.on_vectors(&vocabulary, &resume_vector, &job_vector);

        // Stage 3: Similarity
        trace_stage!(STAGE_SIMILARITY);
        observer.on_stage_start(STAGE_SIMILARITY);
        let clock = StageClock::start();
        let matching_score = cosine_percent(&resume_vector, &job_vector);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_SIMILARITY, &report);

        let scores = ScorePair {
            ats_score,
            matching_score,
        };
        observer.on_scores(&scores);
        scores
    }
}

// ============================================================================
// Tests
// ============================================================================
