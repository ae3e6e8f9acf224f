//! Cosine similarity scoring
//!
//! Final stage of the matching-score path: the angle between the two TF-IDF
//! vectors, reported as a percentage.

use super::vector_space::TermVector;

/// Cosine similarity between two weight vectors, scaled to `[0, 100]`.
///
/// Zero-norm vectors (empty vocabulary, or a document whose every token is
/// a stopword) score `0.0` without dividing. TF-IDF weights are
/// non-negative, which keeps the raw cosine in `[0, 1]`; the result is
/// clamped after scaling so accumulated floating-point error can never push
/// a report past 100.
pub fn cosine_percent(a: &TermVector, b: &TermVector) -> f64 {
    if a.norm <= 0.0 || b.norm <= 0.0 {
        return 0.0;
    }

    let dot: f64 = a
        .weights
        .iter()
        .zip(b.weights.iter())
        .map(|(x, y)| x * y)
        .sum();

    ((dot / (a.norm * b.norm)) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::scoring::vector_space::VectorSpaceBuilder;

    fn vector(weights: &[f64]) -> TermVector {
        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        TermVector {
            weights: weights.to_vec(),
            norm,
        }
    }

    #[test]
    fn test_identical_vectors_score_hundred() {
        let a = vector(&[1.0, 2.0, 3.0]);
        let b = vector(&[1.0, 2.0, 3.0]);
        assert!((cosine_percent(&a, &b) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaling_does_not_change_the_score() {
        let a = vector(&[1.0, 2.0, 3.0]);
        let b = vector(&[10.0, 20.0, 30.0]);
        assert!((cosine_percent(&a, &b) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = vector(&[1.0, 0.0]);
        let b = vector(&[0.0, 1.0]);
        assert!(cosine_percent(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn test_zero_norm_scores_zero() {
        let zero = TermVector::default();
        let nonzero = vector(&[1.0, 1.0]);
        assert_eq!(cosine_percent(&zero, &nonzero), 0.0);
        assert_eq!(cosine_percent(&nonzero, &zero), 0.0);
        assert_eq!(cosine_percent(&zero, &zero), 0.0);
    }

    #[test]
    fn test_known_angle() {
        // 45 degrees: cos = 1/sqrt(2).
        let a = vector(&[1.0, 0.0]);
        let b = vector(&[1.0, 1.0]);
        let expected = 100.0 / 2.0f64.sqrt();
        assert!((cosine_percent(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_result_stays_in_range_on_built_vectors() {
        let builder = VectorSpaceBuilder::new(StopwordFilter::new("en"));
        let resume: Vec<String> = ["rust", "rust", "cloud", "grpc", "tokio"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let job: Vec<String> = ["rust", "cloud", "cloud", "kafka"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let (_, a, b) = builder.build(&resume, &job);
        let score = cosine_percent(&a, &b);
        assert!((0.0..=100.0).contains(&score));
        assert!(score > 0.0);
    }
}
