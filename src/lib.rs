//! flashdeck: turn study documents into question/answer flashcards.
//!
//! Cards come either from the heuristic [`flashcards::Synthesizer`], which
//! always meets the requested count for non-blank text, or from a hosted
//! language model through [`ai::OpenAiGenerator`].

pub mod ai;
pub mod config;
pub mod deck;
pub mod document;
pub mod flashcards;
pub mod keyphrase;
pub mod language;
pub mod text;

pub use ai::{AiConfig, AiError, CardGenerator, OpenAiGenerator};
pub use config::{Config, ConfigError, GenerationMode};
pub use deck::{Deck, DeckError, DeckStore, StudySession};
pub use flashcards::{synthesize, Flashcard, SynthesisOptions, Synthesizer};
pub use keyphrase::{ExtractorError, Keyphrase, KeyphraseRanker, RankOptions, YakeExtractor};
pub use language::Language;
