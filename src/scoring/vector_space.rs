//! TF-IDF vector space over the two-document corpus
//!
//! The corpus is always exactly two documents: the resume and the job
//! description. The vocabulary is rebuilt per call as the union of their
//! distinct tokens minus stopwords, and the vectors are dense over that
//! vocabulary in ascending term order, so repeated calls over the same
//! inputs produce bit-identical vectors.

use crate::nlp::stopwords::StopwordFilter;
use rustc_hash::{FxHashMap, FxHashSet};

/// Number of documents in the corpus. Always the resume and the job text.
const CORPUS_SIZE: f64 = 2.0;

/// The shared vocabulary both vectors are expressed in.
///
/// Terms are distinct, non-stopword, and held in ascending order; their
/// positions are the vector dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Terms in dimension order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A dense TF-IDF weight vector over the shared vocabulary.
///
/// One weight per vocabulary term, zero where the document lacks the term,
/// with the L2 norm precomputed at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    pub weights: Vec<f64>,
    pub norm: f64,
}

impl TermVector {
    fn from_weights(weights: Vec<f64>) -> Self {
        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        Self { weights, norm }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Builds the paired TF-IDF vectors for one scoring call.
///
/// Owns nothing but the stopword filter, which is frozen at construction;
/// every `build` call derives its vocabulary and weights from its arguments
/// alone.
#[derive(Debug, Clone, Default)]
pub struct VectorSpaceBuilder {
    stopwords: StopwordFilter,
}

impl VectorSpaceBuilder {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Build the shared vocabulary and the two TF-IDF vectors over it,
    /// resume first.
    ///
    /// When every token is a stopword (or both sequences are empty) the
    /// vocabulary is empty and both vectors are zero-dimensional with norm
    /// zero; the similarity scorer resolves that case to `0.0`.
    pub fn build(
        &self,
        resume_tokens: &[String],
        job_tokens: &[String],
    ) -> (Vocabulary, TermVector, TermVector) {
        let vocabulary = self.build_vocabulary(resume_tokens, job_tokens);
        if vocabulary.is_empty() {
            return (vocabulary, TermVector::default(), TermVector::default());
        }

        let index: FxHashMap<&str, usize> = vocabulary
            .terms
            .iter()
            .enumerate()
            .map(|(dim, term)| (term.as_str(), dim))
            .collect();

        let resume_tf = term_frequencies(resume_tokens, &index);
        let job_tf = term_frequencies(job_tokens, &index);

        let mut resume_weights = vec![0.0; vocabulary.len()];
        let mut job_weights = vec![0.0; vocabulary.len()];
        for dim in 0..vocabulary.len() {
            // Vocabulary terms appear in at least one document, so the
            // document frequency is 1 or 2.
            let document_frequency =
                usize::from(resume_tf[dim] > 0) + usize::from(job_tf[dim] > 0);
            let idf = inverse_document_frequency(document_frequency);
            resume_weights[dim] = resume_tf[dim] as f64 * idf;
            job_weights[dim] = job_tf[dim] as f64 * idf;
        }

        (
            vocabulary,
            TermVector::from_weights(resume_weights),
            TermVector::from_weights(job_weights),
        )
    }

    /// Union of distinct non-stopword tokens, sorted for a deterministic
    /// dimension order.
    fn build_vocabulary(&self, resume_tokens: &[String], job_tokens: &[String]) -> Vocabulary {
        let distinct: FxHashSet<&str> = resume_tokens
            .iter()
            .chain(job_tokens.iter())
            .map(String::as_str)
            .filter(|token| !self.stopwords.is_stopword(token))
            .collect();

        let mut terms: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        terms.sort_unstable();
        Vocabulary { terms }
    }
}

/// Raw term counts in vocabulary dimension order. Tokens outside the
/// vocabulary (stopwords) are skipped.
fn term_frequencies(tokens: &[String], index: &FxHashMap<&str, usize>) -> Vec<usize> {
    let mut frequencies = vec![0usize; index.len()];
    for token in tokens {
        if let Some(&dim) = index.get(token.as_str()) {
            frequencies[dim] += 1;
        }
    }
    frequencies
}

/// Smoothed inverse document frequency: `ln((1 + N) / (1 + df)) + 1` with
/// `N = 2`. Always finite and at least 1, and a term present in only one
/// document always outweighs one present in both.
fn inverse_document_frequency(document_frequency: usize) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency as f64)).ln() + 1.0
}
