//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the draw pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A card was drawn from an exhausted deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only taken before the player acts in a pending round.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Input is not a whole number.
    #[error("bet is not a number")]
    NotANumber,
    /// Bet is lower than the table minimum.
    #[error("bet is below the minimum of {minimum}")]
    BelowMinimum {
        /// The table minimum.
        minimum: usize,
    },
    /// Bet is higher than the available credit.
    #[error("bet exceeds the available credit of {credit}")]
    ExceedsCredit {
        /// Credit available to the player.
        credit: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The key does not match an enabled menu entry.
    #[error("action is not available")]
    InvalidAction,
    /// Splitting pairs is listed on the menu but not played.
    #[error("split is not supported")]
    SplitUnsupported,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur when starting a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round carries a bet that has not been settled yet.
    #[error("current round has not been settled")]
    Unsettled,
    /// Player credit is below the minimum bet.
    #[error("credit is below the minimum bet")]
    InsufficientCredit,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round has not been resolved yet.
    #[error("round is still pending")]
    Pending,
    /// The round was already settled.
    #[error("round was already settled")]
    AlreadySettled,
}
