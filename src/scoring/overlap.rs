//! Keyword-overlap (ATS) scoring
//!
//! Measures how much of the job description's keyword mass the resume
//! covers: the multiset intersection of the two token sequences, divided by
//! the job's total token count. Runs on the raw normalized tokens, with no
//! stopword removal, so every word the job description repeats counts as
//! often as it repeats.

use rustc_hash::FxHashMap;

/// Count occurrences per distinct token.
fn frequency_counts(tokens: &[String]) -> FxHashMap<&str, usize> {
    let mut counts = FxHashMap::default();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Keyword-overlap score in `[0, 100]`.
///
/// Each distinct token contributes `min(resume_count, job_count)` matches;
/// the score is total matches over the job's token count, scaled to a
/// percentage. An empty job side scores exactly `0.0`: an empty description
/// cannot be satisfied, and that is a defined result, not an error.
pub fn overlap_score(resume_tokens: &[String], job_tokens: &[String]) -> f64 {
    if job_tokens.is_empty() {
        return 0.0;
    }

    let resume_counts = frequency_counts(resume_tokens);
    let job_counts = frequency_counts(job_tokens);

    let matching: usize = job_counts
        .iter()
        .filter_map(|(token, &job_count)| {
            resume_counts
                .get(token)
                .map(|&resume_count| resume_count.min(job_count))
        })
        .sum();

    (matching as f64 / job_tokens.len() as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_sequences_score_hundred() {
        let resume = tokens(&["a", "b"]);
        let job = tokens(&["a", "b"]);
        assert!((overlap_score(&resume, &job) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_sequences_score_zero() {
        let resume = tokens(&["x"]);
        let job = tokens(&["a", "b"]);
        assert_eq!(overlap_score(&resume, &job), 0.0);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let resume = tokens(&["rust", "engineer"]);
        assert_eq!(overlap_score(&resume, &[]), 0.0);
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let job = tokens(&["rust", "engineer"]);
        assert_eq!(overlap_score(&[], &job), 0.0);
    }

    #[test]
    fn test_multiset_counts_cap_at_job_multiplicity() {
        // Resume mentions "rust" three times, the job only twice: two count.
        let resume = tokens(&["rust", "rust", "rust"]);
        let job = tokens(&["rust", "rust", "go"]);
        let score = overlap_score(&resume, &job);
        assert!((score - (2.0 / 3.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_multiset_counts_cap_at_resume_multiplicity() {
        // The job repeats "sql" twice but the resume has it once.
        let resume = tokens(&["sql", "python"]);
        let job = tokens(&["sql", "sql", "python"]);
        let score = overlap_score(&resume, &job);
        assert!((score - (2.0 / 3.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_denominator_is_total_job_tokens() {
        let resume = tokens(&["a"]);
        let job = tokens(&["a", "a", "b"]);
        let score = overlap_score(&resume, &job);
        assert!((score - (1.0 / 3.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_resume_superset_scores_hundred() {
        let resume = tokens(&["a", "b", "c", "d", "e"]);
        let job = tokens(&["b", "d"]);
        assert!((overlap_score(&resume, &job) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_stays_in_range() {
        let cases: &[(&[&str], &[&str])] = &[
            (&["a"], &["a", "a", "a", "a"]),
            (&["a", "a", "a", "a"], &["a"]),
            (&["x", "y", "z"], &["x", "q"]),
            (&[], &[]),
        ];
        for (resume, job) in cases {
            let score = overlap_score(&tokens(resume), &tokens(job));
            assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn test_order_does_not_matter() {
        let job = tokens(&["cloud", "engineer", "aws"]);
        let forward = overlap_score(&tokens(&["aws", "cloud"]), &job);
        let backward = overlap_score(&tokens(&["cloud", "aws"]), &job);
        assert_eq!(forward, backward);
    }
}
