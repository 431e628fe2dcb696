//! In-memory decks and review navigation
//!
//! This module provides:
//! - Named decks holding generated cards
//! - A deck store keyed by name (insertion ordered)
//! - A study session tracking the current deck, card and face

mod models;
mod session;
mod store;

pub use models::Deck;
pub use session::StudySession;
pub use store::{DeckError, DeckStore};
