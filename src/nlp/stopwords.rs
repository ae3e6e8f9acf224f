//! Stopword filtering
//!
//! Multi-language stopword lists from the `stop-words` crate, with support
//! for deployment-specific additions. The vector-space builder consults the
//! filter when it assembles the shared vocabulary; the keyword-overlap
//! scorer never does, so common words still count toward ATS coverage.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A frozen set of words excluded from the TF-IDF vocabulary.
///
/// The set is fixed at construction. Two scoring calls made with the same
/// filter see the same vocabulary rules.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language tag or name.
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru. Unknown
    /// languages fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create an empty stopword filter (no filtering).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter.
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword. Matching is case-insensitive; the
    /// stored set is lowercase.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            // Default to English for unknown languages
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
