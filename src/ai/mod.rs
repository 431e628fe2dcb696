//! Generative card creation through a hosted language model
//!
//! The model is asked for a strict JSON array of question/answer objects.
//! Responses are normalized tolerantly: code fences are stripped, short
//! field aliases are accepted and incomplete items are dropped.

mod openai;
mod parse;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flashcards::{Flashcard, Synthesizer};
use crate::keyphrase::KeyphraseRanker;

pub use openai::OpenAiGenerator;
pub use parse::{build_prompt, extract_output_text, parse_cards};

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API key not set: environment variable {0} is empty or missing")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Response is not valid JSON")]
    InvalidJson { raw: String },

    #[error("Unexpected response shape (expected a JSON list)")]
    UnexpectedShape { raw: String },

    #[error("No valid flashcards found in the response")]
    NoValidCards { raw: String },
}

impl AiError {
    /// Raw model output attached to the error, if any
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            AiError::InvalidJson { raw }
            | AiError::UnexpectedShape { raw }
            | AiError::NoValidCards { raw } => Some(raw),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AiError>;

/// Model provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    pub max_output_tokens: u32,
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_output_tokens: 1200,
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// Anything that can turn study text into at most `n` flashcards
pub trait CardGenerator {
    fn generate(&self, text: &str, n: usize) -> Result<Vec<Flashcard>>;
}

/// Heuristic generation never fails; blank text yields no cards
impl<R: KeyphraseRanker> CardGenerator for Synthesizer<R> {
    fn generate(&self, text: &str, n: usize) -> Result<Vec<Flashcard>> {
        Ok(self.synthesize(text, n))
    }
}
