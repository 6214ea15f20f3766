//! The draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// An ordered pile of cards, drawn from the top.
///
/// The top of the pile is the end of the backing vector, so drawing is a pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled 52-card deck, one card per (rank, suit) pair.
    #[must_use]
    pub fn fresh() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Builds a fresh deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::fresh();
        deck.shuffle(rng);
        deck
    }

    /// Builds a deck that deals `draws` in order: the first card is drawn first.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::fresh()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn fresh_deck_is_complete() {
        let deck = Deck::fresh();
        assert_eq!(deck.len(), DECK_SIZE);

        let mut seen = Vec::new();
        for card in deck.cards() {
            assert!(!seen.contains(card), "duplicate card {card}");
            seen.push(*card);
        }

        let total: u32 = deck.cards().iter().map(|c| u32::from(c.base_value())).sum();
        // (1 + 2 + ... + 10 + 10 + 10 + 10) per suit
        assert_eq!(total, 4 * 85);
    }

    #[test]
    fn draw_order_is_respected() {
        let mut deck = Deck::from_draw_order(&[
            Card::new(Suit::Hearts, 2),
            Card::new(Suit::Clubs, 3),
        ]);
        assert_eq!(deck.draw(), Ok(Card::new(Suit::Hearts, 2)));
        assert_eq!(deck.draw(), Ok(Card::new(Suit::Clubs, 3)));
        assert_eq!(deck.draw(), Err(DeckError::Empty));
        assert!(deck.is_empty());
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
        let c = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(4));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::fresh());
    }
}
