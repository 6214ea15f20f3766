//! Dealer and player seats.

use crate::hand::Hand;

/// A seat at the table: a hand plus a credit balance.
///
/// The dealer's credit stays at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    hand: Hand,
    credit: usize,
}

impl Participant {
    /// Creates a participant with an empty hand and the given credit.
    #[must_use]
    pub const fn new(credit: usize) -> Self {
        Self {
            hand: Hand::new(),
            credit,
        }
    }

    /// Creates the dealer seat.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(0)
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the credit balance.
    #[must_use]
    pub const fn credit(&self) -> usize {
        self.credit
    }

    pub(crate) const fn add_credit(&mut self, amount: usize) {
        self.credit = self.credit.saturating_add(amount);
    }

    /// Removes up to `amount`, never going below zero.
    pub(crate) const fn take_credit(&mut self, amount: usize) {
        self.credit = self.credit.saturating_sub(amount);
    }
}
