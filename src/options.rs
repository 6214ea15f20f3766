//! Game configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_stand_limit(18)
///     .with_min_bet(10)
///     .with_blackjack_pays(1.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Value at or above which the dealer stops drawing.
    pub stand_limit: u8,
    /// Smallest accepted bet. Credit below this ends the game.
    pub min_bet: usize,
    /// Bonus ratio paid on a player natural (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether naturals resolve as blackjack instead of a plain 21.
    pub natural_bonus: bool,
    /// Deck size under which a new round starts from a freshly shuffled deck.
    pub reshuffle_threshold: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            stand_limit: 17,
            min_bet: 5,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            natural_bonus: true,
            reshuffle_threshold: 17,
        }
    }
}

impl GameOptions {
    /// Sets the dealer stand limit.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_limit(16);
    /// assert_eq!(options.stand_limit, 16);
    /// ```
    #[must_use]
    pub const fn with_stand_limit(mut self, limit: u8) -> Self {
        self.stand_limit = limit;
        self
    }

    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(25);
    /// assert_eq!(options.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether naturals pay the blackjack bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_natural_bonus(false);
    /// assert!(!options.natural_bonus);
    /// ```
    #[must_use]
    pub const fn with_natural_bonus(mut self, enabled: bool) -> Self {
        self.natural_bonus = enabled;
        self
    }

    /// Sets the low-water mark for replacing the deck between rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(20);
    /// assert_eq!(options.reshuffle_threshold, 20);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, cards: usize) -> Self {
        self.reshuffle_threshold = cards;
        self
    }
}
