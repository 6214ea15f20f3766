//! A single-player blackjack engine with credit settlement and optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that deals from a single 52-card deck,
//! drives the player's hit/stand/double decisions and the dealer's automatic
//! play, resolves the round, and settles the bet against the player's credit.
//! It holds no display or input code; front ends read its state and build
//! prompts from a [`Menu`].
//!
//! # Example
//!
//! ```
//! use blackjack21::{Game, GameOptions, Tally};
//!
//! let mut game = Game::new(GameOptions::default(), 100, 42);
//! let mut tally = Tally::new();
//!
//! game.place_bet(10).unwrap();
//! game.stand().unwrap();
//! let summary = game.settle(&mut tally).unwrap();
//! assert_eq!(tally.rounds(), 1);
//! assert_eq!(summary.credit, game.credit());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod menu;
pub mod options;
pub mod outcome;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError, RoundError, SettleError};
pub use game::{Action, Game, parse_bet, validate_bet};
pub use hand::{BLACKJACK, Hand, hand_value, is_natural, weight};
pub use menu::{Menu, MenuEntry};
pub use options::{GameOptions, RoundingMode};
pub use outcome::{compare_values, outcome};
pub use participant::Participant;
pub use result::{GameResult, RoundSummary, Tally};
