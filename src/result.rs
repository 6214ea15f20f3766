//! Round result and tally types.

/// State of a round. Every variant but [`GameResult::Pending`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameResult {
    /// Round in progress.
    #[default]
    Pending,
    /// Player wins (dealer busts or player is closer to 21).
    Win,
    /// Player loses (player busts or dealer is closer to 21).
    Lose,
    /// Push (tie).
    Draw,
    /// Player natural against a dealer without one; pays a bonus.
    BlackJack,
}

impl GameResult {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Running win/lose/draw counters across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds won, blackjacks included.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds pushed.
    pub draws: u32,
    /// Rounds won with a natural. Also counted in `wins`.
    pub blackjacks: u32,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
            blackjacks: 0,
        }
    }

    /// Counts one resolved round. Pending results are ignored.
    pub const fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::BlackJack => {
                self.wins += 1;
                self.blackjacks += 1;
            }
            GameResult::Lose => self.losses += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::Pending => {}
        }
    }

    /// Returns the number of rounds counted.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Outcome of settling one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// The terminal result that was settled.
    pub result: GameResult,
    /// The bet that was settled.
    pub bet: usize,
    /// Net credit change (positive = profit, negative = loss).
    pub net: isize,
    /// Player credit after settlement.
    pub credit: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether credit fell below the minimum bet.
    pub game_over: bool,
}
