//! Data models for the flashcard pipeline

use serde::{Deserialize, Serialize};

/// A question (front) and answer (back) pair.
///
/// Cards are immutable once built; both sides are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFlashcard")]
pub struct Flashcard {
    question: String,
    answer: String,
}

/// Unchecked wire form, validated through `Flashcard::try_new`
#[derive(Deserialize)]
struct RawFlashcard {
    question: String,
    answer: String,
}

impl TryFrom<RawFlashcard> for Flashcard {
    type Error = &'static str;

    fn try_from(raw: RawFlashcard) -> Result<Self, Self::Error> {
        Flashcard::try_new(raw.question, raw.answer).ok_or("flashcard sides must not be blank")
    }
}

impl Flashcard {
    pub fn new(question: impl AsRef<str>, answer: impl AsRef<str>) -> Self {
        Self {
            question: question.as_ref().trim().to_string(),
            answer: answer.as_ref().trim().to_string(),
        }
    }

    /// Build a card only if both sides are non-empty after trimming
    pub fn try_new(question: impl AsRef<str>, answer: impl AsRef<str>) -> Option<Self> {
        let card = Self::new(question, answer);
        (!card.question.is_empty() && !card.answer.is_empty()).then_some(card)
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// A keyphrase with the passage that supports it.
///
/// Only lives for the duration of one synthesis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Concept {
    pub keyword: String,
    /// Ranker relevance, lower is better
    pub score: f64,
    /// First paragraph mentioning the keyword, or the whole text
    pub context: String,
}
