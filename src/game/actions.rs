use log::debug;

use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::GameResult;

use super::Game;

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the hand and let the dealer play.
    Stand,
    /// Double the bet, draw one card, then stand.
    Double,
    /// Split a pair. Listed but never playable.
    Split,
}

impl Game {
    /// Player action: Hit.
    ///
    /// Draws a card while the player's hand is below 21. At 21 or over, no card
    /// is drawn and the round is resolved against the dealer's current hand.
    /// Once the round is over this does nothing.
    ///
    /// Returns the round result after the action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EmptyDeck`] if the deck is exhausted.
    pub fn hit(&mut self) -> Result<GameResult, ActionError> {
        if self.result.is_terminal() {
            return Ok(self.result);
        }

        self.player_acted = true;
        if self.player.hand().value() < BLACKJACK {
            let card = self.draw_for_player()?;
            debug!("player hits {card}, now {}", self.player.hand().value());
        } else {
            self.resolve();
        }

        Ok(self.result)
    }

    /// Player action: Stand.
    ///
    /// The dealer draws up to the stand limit and the round is resolved.
    /// Once the round is over this does nothing.
    ///
    /// Returns the round result after the action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EmptyDeck`] if the deck runs out while the dealer
    /// must draw.
    pub fn stand(&mut self) -> Result<GameResult, ActionError> {
        if self.result.is_terminal() {
            return Ok(self.result);
        }

        self.player_acted = true;
        self.dealer_play()?;
        self.resolve();

        Ok(self.result)
    }

    /// Player action: Double down (double the bet, hit once, then stand).
    ///
    /// Returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotDouble`] if the round is over, no bet has
    /// been placed, or the player does not hold exactly two cards below 21;
    /// [`ActionError::InsufficientFunds`] if credit does not cover twice the
    /// bet; or [`ActionError::EmptyDeck`] if the deck runs out, in which case
    /// the bet is left as it was.
    pub fn double_down(&mut self) -> Result<usize, ActionError> {
        if !self.double_allowed() {
            return Err(ActionError::CannotDouble);
        }

        let doubled = self.bet.saturating_mul(2);
        if self.player.credit() < doubled {
            return Err(ActionError::InsufficientFunds);
        }

        let original = self.bet;
        self.bet = doubled;
        debug!("player doubles to {doubled}");
        if let Err(err) = self.hit().and_then(|_| self.stand()) {
            self.bet = original;
            return Err(err);
        }

        Ok(self.bet)
    }

    /// Player action: Split. Not supported by this table.
    ///
    /// # Errors
    ///
    /// Always returns [`ActionError::SplitUnsupported`].
    pub const fn split(&self) -> Result<GameResult, ActionError> {
        Err(ActionError::SplitUnsupported)
    }

    /// Runs `action` and returns the round result afterwards.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying action.
    pub fn apply(&mut self, action: Action) -> Result<GameResult, ActionError> {
        match action {
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::Double => self.double_down().map(|_| self.result),
            Action::Split => self.split(),
        }
    }

    /// Returns whether [`Game::double_down`] would be accepted.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.double_allowed() && self.player.credit() >= self.bet.saturating_mul(2)
    }

    /// Pending round, bet placed, two cards still below 21.
    fn double_allowed(&self) -> bool {
        !self.result.is_terminal()
            && self.bet > 0
            && self.player.hand().len() == 2
            && self.player.hand().value() < BLACKJACK
    }
}
