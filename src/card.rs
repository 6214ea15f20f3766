//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted and count as zero when a hand is valued.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the base value of the card: face value for 2..=10, 10 for
    /// Jack, Queen and King, and 1 for an Ace.
    #[must_use]
    pub const fn base_value(&self) -> u8 {
        match self.rank {
            1..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns the card identifier as printed on the card.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_values_follow_rank() {
        assert_eq!(Card::new(Suit::Hearts, 1).base_value(), 1);
        assert_eq!(Card::new(Suit::Hearts, 7).base_value(), 7);
        assert_eq!(Card::new(Suit::Hearts, 10).base_value(), 10);
        assert_eq!(Card::new(Suit::Clubs, 11).base_value(), 10);
        assert_eq!(Card::new(Suit::Clubs, 13).base_value(), 10);
        assert_eq!(Card::new(Suit::Clubs, 14).base_value(), 0);
    }

    #[test]
    fn display_uses_id_and_suit() {
        let ace = Card::new(Suit::Spades, 1);
        let queen = Card::new(Suit::Diamonds, 12);
        assert_eq!(alloc::format!("{ace}"), "A Spades");
        assert_eq!(alloc::format!("{queen}"), "Q Diamonds");
        assert!(ace.is_ace());
        assert!(!queen.is_ace());
    }
}
