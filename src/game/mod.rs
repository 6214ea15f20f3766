//! Round engine and state management.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, RoundError};
use crate::hand::{Hand, hand_value};
use crate::options::GameOptions;
use crate::outcome::outcome;
use crate::participant::Participant;
use crate::result::GameResult;

mod actions;
mod bet;
mod dealer;
mod settlement;

pub use actions::Action;
pub use bet::{parse_bet, validate_bet};

/// A single-player blackjack table.
///
/// The game exclusively owns the deck, both seats, and the state of the
/// current round. A round starts dealt and [`GameResult::Pending`]; player
/// actions drive it to a terminal result exactly once, after which
/// [`Game::settle`] applies the bet to the player's credit.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw.
    deck: Deck,
    /// Table rules.
    options: GameOptions,
    dealer: Participant,
    player: Participant,
    /// Amount wagered on the current round.
    bet: usize,
    result: GameResult,
    /// Whether the player has hit, stood or doubled this round.
    player_acted: bool,
    settled: bool,
    /// Used to shuffle replacement decks.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game with a shuffled deck and deals the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{Game, GameOptions, GameResult};
    ///
    /// let game = Game::new(GameOptions::default(), 100, 42);
    /// assert_eq!(game.result(), GameResult::Pending);
    /// assert_eq!(game.player_hand().len(), 2);
    /// assert_eq!(game.cards_remaining(), 48);
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh deck always covers the initial deal"
    )]
    pub fn new(options: GameOptions, credit: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::with_deck_and_rng(options, credit, deck, rng)
            .expect("a 52-card deck holds enough cards for the initial deal")
    }

    /// Creates a game that deals from `deck` as given, without shuffling it.
    ///
    /// `seed` only drives replacement decks shuffled by [`Game::reset_round`].
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyDeck`] if `deck` holds fewer than four cards.
    pub fn with_deck(
        options: GameOptions,
        credit: usize,
        deck: Deck,
        seed: u64,
    ) -> Result<Self, RoundError> {
        Self::with_deck_and_rng(options, credit, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_deck_and_rng(
        options: GameOptions,
        credit: usize,
        deck: Deck,
        rng: ChaCha8Rng,
    ) -> Result<Self, RoundError> {
        let mut game = Self {
            deck,
            options,
            dealer: Participant::dealer(),
            player: Participant::new(credit),
            bet: 0,
            result: GameResult::Pending,
            player_acted: false,
            settled: false,
            rng,
        };
        game.deal_initial()?;
        Ok(game)
    }

    /// Deals dealer, player, dealer, player.
    fn deal_initial(&mut self) -> Result<(), DeckError> {
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.dealer.hand_mut().add_card(card);
            let card = self.deck.draw()?;
            self.player.hand_mut().add_card(card);
        }

        debug!(
            "dealt player {} against dealer up card {}, {} cards left",
            self.player.hand().value(),
            self.dealer
                .hand()
                .up_card()
                .map_or(0, |card| hand_value(core::slice::from_ref(card))),
            self.deck.len()
        );
        Ok(())
    }

    /// Draws a card for the player.
    fn draw_for_player(&mut self) -> Result<Card, DeckError> {
        let card = self.deck.draw()?;
        self.player.hand_mut().add_card(card);
        Ok(card)
    }

    /// Sets the terminal result from the current hands.
    fn resolve(&mut self) {
        self.result = outcome(
            self.player.hand().cards(),
            self.dealer.hand().cards(),
            self.options.natural_bonus,
        );
        debug!(
            "round resolved: player {} dealer {} -> {:?}",
            self.player.hand().value(),
            self.dealer.hand().value(),
            self.result
        );
    }

    /// Clears both hands and deals a new round.
    ///
    /// The current deck is reused unless it holds fewer than
    /// [`GameOptions::reshuffle_threshold`] cards, in which case it is
    /// replaced by a freshly shuffled 52-card deck first.
    ///
    /// A round must be settled before it is replaced. A pending round with no
    /// bet placed may be redealt.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Unsettled`] if the current round is resolved but
    /// not settled, or pending with a bet placed;
    /// [`RoundError::InsufficientCredit`] when the player's credit is below
    /// the minimum bet; or [`RoundError::EmptyDeck`] if the deck runs out
    /// while dealing.
    pub fn reset_round(&mut self) -> Result<(), RoundError> {
        let unsettled = if self.result.is_terminal() {
            !self.settled
        } else {
            self.bet > 0
        };
        if unsettled {
            return Err(RoundError::Unsettled);
        }
        if self.is_game_over() {
            return Err(RoundError::InsufficientCredit);
        }

        if self.deck.len() < self.options.reshuffle_threshold {
            debug!(
                "{} cards left, below threshold of {}; replacing deck",
                self.deck.len(),
                self.options.reshuffle_threshold
            );
            self.deck = Deck::shuffled(&mut self.rng);
        }

        self.player.hand_mut().clear();
        self.dealer.hand_mut().clear();
        self.bet = 0;
        self.result = GameResult::Pending;
        self.player_acted = false;
        self.settled = false;

        self.deal_initial()?;
        Ok(())
    }

    /// Returns the state of the current round.
    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        self.player.hand()
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        self.dealer.hand()
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.hand().value()
    }

    /// Returns the value of the dealer's hand, hole card included.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer.hand().value()
    }

    /// Returns the dealer value a player may see: the up card alone while the
    /// round is pending, the full hand afterwards.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u8 {
        if self.result.is_terminal() {
            return self.dealer_value();
        }
        self.dealer
            .hand()
            .up_card()
            .map_or(0, |card| hand_value(core::slice::from_ref(card)))
    }

    /// Returns the player's credit.
    #[must_use]
    pub const fn credit(&self) -> usize {
        self.player.credit()
    }

    /// Returns the amount wagered on the current round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns whether the current round has been settled.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Returns whether the player can no longer cover the minimum bet.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.player.credit() < self.options.min_bet
    }
}
