//! YAKE keyphrase ranking backed by the `keyword_extraction` crate.
//!
//! YAKE scores candidates from statistics of the document itself, so no
//! corpus or model is needed. Lower scores are more relevant.

use std::panic::{self, AssertUnwindSafe};

use keyword_extraction::yake::{Yake, YakeParams};

use super::stopwords;
use super::{ExtractorError, KeyphraseRanker, Keyphrase, RankOptions, Result};

/// Built-in keyphrase ranker
#[derive(Debug, Clone, Default)]
pub struct YakeExtractor;

impl YakeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl KeyphraseRanker for YakeExtractor {
    fn rank(&self, text: &str, options: &RankOptions) -> Result<Vec<Keyphrase>> {
        let stop_words = stopwords::for_language(&options.language)
            .ok_or_else(|| ExtractorError::UnsupportedLanguage(options.language.clone()))?;
        if options.max_ngram == 0 {
            return Err(ExtractorError::InvalidOptions(
                "max_ngram must be at least 1".to_string(),
            ));
        }
        if options.top == 0 {
            return Err(ExtractorError::InvalidOptions("top must be at least 1".to_string()));
        }
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        // The extractor panics on some degenerate inputs
        let scored = panic::catch_unwind(AssertUnwindSafe(|| {
            let yake = Yake::new(YakeParams::WithDefaults(text, stop_words));
            yake.get_ranked_keyword_scores(usize::MAX)
        }))
        .map_err(|_| ExtractorError::Failed("YAKE extraction panicked".to_string()))?;

        let haystack = text.to_lowercase();
        let mut phrases: Vec<Keyphrase> = scored
            .into_iter()
            .filter_map(|(phrase, score)| {
                let phrase = phrase.trim().to_string();
                let words = phrase.split_whitespace().count();
                // Only phrases that can be found again in the document
                (words > 0
                    && words <= options.max_ngram
                    && haystack.contains(&phrase.to_lowercase()))
                .then(|| Keyphrase {
                    phrase,
                    score: f64::from(score),
                })
            })
            .collect();

        // Ties broken by text so equal scores keep a stable order
        phrases.sort_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| a.phrase.cmp(&b.phrase))
        });
        phrases.truncate(options.top);

        log::debug!(
            "Ranked {} keyphrases ({} language)",
            phrases.len(),
            options.language
        );
        Ok(phrases)
    }
}
