//! Natural Language Processing components
//!
//! This module provides text normalization and stopword filtering.

pub mod normalizer;
pub mod stopwords;
