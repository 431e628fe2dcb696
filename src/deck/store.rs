use chrono::Utc;
use thiserror::Error;

use crate::flashcards::Flashcard;

use super::models::Deck;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Deck name must not be empty")]
    EmptyName,

    #[error("Deck not found: {0}")]
    NotFound(String),

    #[error("No deck selected")]
    NoDeckSelected,
}

pub type Result<T> = std::result::Result<T, DeckError>;

/// Decks held for the lifetime of a session, in creation order
#[derive(Debug, Default, Clone)]
pub struct DeckStore {
    decks: Vec<Deck>,
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck, or return the existing deck with that name.
    ///
    /// Names are trimmed before use.
    pub fn create(&mut self, name: &str) -> Result<&Deck> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::EmptyName);
        }

        let pos = match self.position(name) {
            Some(pos) => pos,
            None => {
                self.decks.push(Deck::new(name.to_string()));
                self.decks.len() - 1
            }
        };
        Ok(&self.decks[pos])
    }

    pub fn get(&self, name: &str) -> Option<&Deck> {
        self.position(name.trim()).map(|pos| &self.decks[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Deck names in creation order
    pub fn names(&self) -> Vec<&str> {
        self.decks.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Replace a deck's cards with a freshly generated set
    pub fn replace_cards(&mut self, name: &str, cards: Vec<Flashcard>) -> Result<&Deck> {
        let pos = self
            .position(name.trim())
            .ok_or_else(|| DeckError::NotFound(name.to_string()))?;

        let deck = &mut self.decks[pos];
        deck.cards = cards;
        deck.updated_at = Utc::now();
        Ok(&self.decks[pos])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.decks.iter().position(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(count: usize) -> Vec<Flashcard> {
        (0..count)
            .map(|i| Flashcard::new(format!("Q{}", i), format!("A{}", i)))
            .collect()
    }

    #[test]
    fn test_create_and_get() {
        let mut store = DeckStore::new();
        let id = store.create("  Biology ").unwrap().id;

        let deck = store.get("Biology").unwrap();
        assert_eq!(deck.id, id);
        assert_eq!(deck.name, "Biology");
        assert!(deck.is_empty());
    }

    #[test]
    fn test_create_existing_returns_same_deck() {
        let mut store = DeckStore::new();
        let first = store.create("History").unwrap().id;
        store.replace_cards("History", cards(2)).unwrap();

        let again = store.create("History").unwrap();
        assert_eq!(again.id, first);
        assert_eq!(again.card_count(), 2);
        assert_eq!(store.names(), vec!["History"]);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut store = DeckStore::new();
        assert_eq!(store.create("   ").unwrap_err(), DeckError::EmptyName);
        assert!(store.decks().is_empty());
    }

    #[test]
    fn test_names_keep_creation_order() {
        let mut store = DeckStore::new();
        for name in ["Math", "Biology", "History"] {
            store.create(name).unwrap();
        }
        assert_eq!(store.names(), vec!["Math", "Biology", "History"]);
    }

    #[test]
    fn test_replace_cards_overwrites() {
        let mut store = DeckStore::new();
        store.create("Math").unwrap();
        store.replace_cards("Math", cards(5)).unwrap();
        let deck = store.replace_cards("Math", cards(2)).unwrap();
        assert_eq!(deck.card_count(), 2);
        assert_eq!(deck.cards[1].question(), "Q1");
    }

    #[test]
    fn test_replace_cards_unknown_deck() {
        let mut store = DeckStore::new();
        assert_eq!(
            store.replace_cards("Nope", cards(1)).unwrap_err(),
            DeckError::NotFound("Nope".to_string())
        );
    }
}
