//! Scoring components
//!
//! Keyword-overlap (ATS) scoring, the TF-IDF vector space over the
//! two-document corpus, and cosine similarity.

pub mod overlap;
pub mod similarity;
pub mod vector_space;
