//! Text normalization helpers shared by the synthesis pipeline.
//!
//! Pure string manipulation: whitespace collapsing, paragraph and
//! sentence splitting, and the length limiters used for question snippets
//! and answers.

mod split;

pub use split::{normalize, shorten, split_paragraphs, split_sentences, truncate_words};

/// Marker appended to text that was cut short.
pub const ELLIPSIS: &str = "…";
