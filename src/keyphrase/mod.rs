//! Keyphrase ranking for concept discovery.
//!
//! This module provides:
//! - The `KeyphraseRanker` contract used by the synthesis pipeline
//! - A built-in YAKE ranker (`YakeExtractor`) over the `keyword_extraction` crate
//! - Stopword lists for the supported languages

mod stopwords;
mod yake;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use stopwords::is_supported_language;
pub use yake::YakeExtractor;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid ranking options: {0}")]
    InvalidOptions(String),

    #[error("Ranking failed: {0}")]
    Failed(String),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;

/// A ranked phrase. Lower scores are more relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyphrase {
    pub phrase: String,
    pub score: f64,
}

/// Options passed to a ranker on every call
#[derive(Debug, Clone, PartialEq)]
pub struct RankOptions {
    /// Language code used to pick stopwords (e.g. "en", "fr")
    pub language: String,
    /// Maximum number of tokens per phrase
    pub max_ngram: usize,
    /// Maximum number of phrases returned
    pub top: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_ngram: 3,
            top: 20,
        }
    }
}

/// A keyphrase ranking engine.
///
/// Implementations return phrases sorted most relevant first. Any error is
/// treated by callers as "no phrases found".
pub trait KeyphraseRanker {
    fn rank(&self, text: &str, options: &RankOptions) -> Result<Vec<Keyphrase>>;
}
