use log::debug;

use crate::error::BetError;

use super::Game;

/// Checks a bet against the table minimum and the player's credit.
///
/// # Errors
///
/// Returns [`BetError::BelowMinimum`] or [`BetError::ExceedsCredit`].
pub const fn validate_bet(amount: usize, min_bet: usize, credit: usize) -> Result<usize, BetError> {
    if amount < min_bet {
        return Err(BetError::BelowMinimum { minimum: min_bet });
    }
    if amount > credit {
        return Err(BetError::ExceedsCredit { credit });
    }
    Ok(amount)
}

/// Parses and validates a bet typed by the player.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`BetError::NotANumber`] if `input` is not a whole number, or the
/// errors of [`validate_bet`].
///
/// # Example
///
/// ```
/// use blackjack21::{BetError, parse_bet};
///
/// assert_eq!(parse_bet(" 20\n", 5, 100), Ok(20));
/// assert_eq!(parse_bet("ten", 5, 100), Err(BetError::NotANumber));
/// assert_eq!(parse_bet("2", 5, 100), Err(BetError::BelowMinimum { minimum: 5 }));
/// ```
pub fn parse_bet(input: &str, min_bet: usize, credit: usize) -> Result<usize, BetError> {
    let amount = input
        .trim()
        .parse::<usize>()
        .map_err(|_| BetError::NotANumber)?;
    validate_bet(amount, min_bet, credit)
}

impl Game {
    /// Places the bet for the current round, replacing any earlier bet.
    ///
    /// Bets are taken only while the round is pending and before the player's
    /// first action.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InvalidState`] outside the betting window, or the
    /// errors of [`validate_bet`].
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.result.is_terminal() || self.player_acted {
            return Err(BetError::InvalidState);
        }

        self.bet = validate_bet(amount, self.options.min_bet, self.player.credit())?;
        debug!("bet placed: {amount}");
        Ok(())
    }
}
