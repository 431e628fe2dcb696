use crate::flashcards::Flashcard;

use super::store::{DeckError, DeckStore, Result};

/// Review state for one user: decks, the selected deck, and the card shown.
///
/// Navigation wraps around the deck and always lands on the question face.
#[derive(Debug, Default)]
pub struct StudySession {
    store: DeckStore,
    current_deck: Option<String>,
    card_index: usize,
    show_answer: bool,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &DeckStore {
        &self.store
    }

    pub fn current_deck(&self) -> Option<&str> {
        self.current_deck.as_deref()
    }

    /// Select a deck by name, creating it if needed
    pub fn select_deck(&mut self, name: &str) -> Result<()> {
        let name = self.store.create(name)?.name.clone();
        if self.current_deck.as_deref() != Some(name.as_str()) {
            log::debug!("Selected deck '{}'", name);
        }
        self.current_deck = Some(name);
        self.reset_position();
        Ok(())
    }

    /// Replace the current deck's cards with a generated set
    pub fn store_generated(&mut self, cards: Vec<Flashcard>) -> Result<usize> {
        let name = self.current_deck.clone().ok_or(DeckError::NoDeckSelected)?;
        let count = self.store.replace_cards(&name, cards)?.card_count();
        self.reset_position();
        log::info!("Stored {} cards in deck '{}'", count, name);
        Ok(count)
    }

    fn cards(&self) -> &[Flashcard] {
        self.current_deck
            .as_deref()
            .and_then(|name| self.store.get(name))
            .map(|deck| deck.cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        let cards = self.cards();
        if cards.is_empty() {
            None
        } else {
            cards.get(self.card_index % cards.len())
        }
    }

    pub fn is_showing_answer(&self) -> bool {
        self.show_answer
    }

    /// Text of the face currently shown
    pub fn visible_text(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.show_answer {
                card.answer()
            } else {
                card.question()
            }
        })
    }

    pub fn flip(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn next(&mut self) {
        let total = self.cards().len();
        if total > 0 {
            self.card_index = (self.card_index + 1) % total;
            self.show_answer = false;
        }
    }

    pub fn prev(&mut self) {
        let total = self.cards().len();
        if total > 0 {
            self.card_index = (self.card_index + total - 1) % total;
            self.show_answer = false;
        }
    }

    /// One-based index of the current card and the deck size
    pub fn position(&self) -> Option<(usize, usize)> {
        let total = self.cards().len();
        (total > 0).then(|| (self.card_index % total + 1, total))
    }

    fn reset_position(&mut self) {
        self.card_index = 0;
        self.show_answer = false;
    }
}
