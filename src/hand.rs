//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest non-busting hand value.
pub const BLACKJACK: u8 = 21;

const BUST_PENALTY: u8 = 100;

/// Distance of `value` from 21, with a large penalty for busting.
///
/// Lower is better. Any non-busting value weighs less than any busting one.
#[must_use]
pub const fn weight(value: u8) -> u8 {
    if value > BLACKJACK {
        (value - BLACKJACK).saturating_add(BUST_PENALTY)
    } else {
        BLACKJACK - value
    }
}

/// Sum of base values, every Ace counted as 1.
#[must_use]
pub fn hard_total(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.base_value()))
}

/// Computes the value of a set of cards.
///
/// Two candidates are considered: the hard total, and (when any Ace is held)
/// the hard total plus 10 for every Ace. The candidate with the lower
/// [`weight`] wins, the hard total on ties.
///
/// Every Ace is promoted together, so `[A, A]` is worth 2 rather than 12.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let hard = hard_total(cards);
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u8;
    if aces == 0 {
        return hard;
    }

    let soft = hard.saturating_add(aces.saturating_mul(10));
    if weight(soft) < weight(hard) { soft } else { hard }
}

/// Returns whether the cards form a natural: two cards, one an Ace, worth 21.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && cards.iter().any(Card::is_ace) && hand_value(cards) == BLACKJACK
}

/// Cards held by a participant.
///
/// The value is derived from the cards each time it is asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, shown face up for the dealer.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand. See [`hand_value`].
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Sum of base values with every Ace counted as 1.
    #[must_use]
    pub fn hard_value(&self) -> u8 {
        hard_total(&self.cards)
    }

    /// Returns whether the value counts its Aces as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.value() != self.hard_value()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Clubs, r)).collect()
    }

    #[test]
    fn weight_penalises_busts() {
        assert_eq!(weight(21), 0);
        assert_eq!(weight(17), 4);
        assert_eq!(weight(22), 101);
        assert!(weight(2) < weight(22));
    }

    #[test]
    fn reference_values() {
        assert_eq!(hand_value(&cards(&[1, 13])), 21);
        assert_eq!(hand_value(&cards(&[1, 1])), 2);
        assert_eq!(hand_value(&cards(&[10, 9, 5])), 24);
        assert_eq!(hand_value(&cards(&[5, 6])), 11);
        assert_eq!(hand_value(&[]), 0);
    }

    #[test]
    fn soft_total_used_only_when_closer() {
        assert_eq!(hand_value(&cards(&[1, 6])), 17);
        assert_eq!(hand_value(&cards(&[1, 6, 9])), 16);
        assert_eq!(hand_value(&cards(&[1, 1, 9])), 11);
    }

    #[test]
    fn naturals_need_an_ace_and_two_cards() {
        assert!(is_natural(&cards(&[1, 12])));
        assert!(is_natural(&cards(&[10, 1])));
        assert!(!is_natural(&cards(&[7, 7, 7])));
        assert!(!is_natural(&cards(&[1, 5, 5])));
        assert!(!is_natural(&cards(&[10, 11])));
    }

    #[test]
    fn hand_tracks_soft_and_bust() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Suit::Hearts, 1));
        hand.add_card(Card::new(Suit::Spades, 5));
        assert_eq!(hand.value(), 16);
        assert!(hand.is_soft());

        hand.add_card(Card::new(Suit::Spades, 10));
        assert_eq!(hand.value(), 16);
        assert!(!hand.is_soft());

        hand.add_card(Card::new(Suit::Diamonds, 8));
        assert!(hand.is_bust());

        hand.clear();
        assert!(hand.is_empty());
    }
}
