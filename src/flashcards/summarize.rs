//! Answer building: context lookup and extractive summaries.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::text::{split_sentences, truncate_words};

/// Limits applied when condensing a passage into an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    pub max_sentences: usize,
    pub max_words: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_sentences: 2,
            max_words: 75,
        }
    }
}

/// Find the first paragraph containing `keyword`, ignoring case.
///
/// The keyword is matched literally. Falls back to `fallback` (the whole
/// normalized text) when no paragraph mentions it.
pub fn locate_context(keyword: &str, paragraphs: &[String], fallback: &str) -> String {
    let matcher = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build();

    let found = match matcher {
        Ok(re) => paragraphs.iter().find(|p| re.is_match(p)),
        Err(_) => {
            let needle = keyword.to_lowercase();
            paragraphs.iter().find(|p| p.to_lowercase().contains(&needle))
        }
    };

    found.map_or_else(|| fallback.to_string(), Clone::clone)
}

/// Condense a passage into a short answer.
///
/// Sentences mentioning `keyword` are preferred; otherwise the leading
/// sentences are used. At most `max_sentences` sentences are kept, in
/// their original order, and the result is cut to `max_words` words.
pub fn summarize(passage: &str, keyword: Option<&str>, options: &SummaryOptions) -> String {
    let sentences = split_sentences(passage);
    if sentences.is_empty() {
        return truncate_words(passage.trim(), options.max_words);
    }

    let mut selected: Vec<&String> = Vec::new();
    if let Some(keyword) = keyword {
        let needle = keyword.to_lowercase();
        selected = sentences
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .collect();
    }
    if selected.is_empty() {
        selected = sentences.iter().take(options.max_sentences).collect();
    }

    let summary = selected
        .into_iter()
        .take(options.max_sentences)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    truncate_words(&summary, options.max_words)
}
