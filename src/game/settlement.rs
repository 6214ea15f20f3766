use log::info;

use crate::error::SettleError;
use crate::options::RoundingMode;
use crate::result::{GameResult, RoundSummary, Tally};

use super::Game;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Game {
    /// Bonus paid on a winning natural for `bet`.
    fn blackjack_payout(&self, bet: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (bet as f64) * self.options.blackjack_pays;
        round_amount(winnings, self.options.rounding_blackjack)
    }

    /// Applies the round result to the player's credit and records it in
    /// `tally`.
    ///
    /// - `Win` adds the bet.
    /// - `Lose` removes the bet.
    /// - `BlackJack` adds the bet times [`GameOptions::blackjack_pays`],
    ///   rounded with [`GameOptions::rounding_blackjack`].
    /// - `Draw` leaves credit unchanged.
    ///
    /// The returned summary reports whether credit fell below the minimum bet.
    ///
    /// [`GameOptions::blackjack_pays`]: crate::GameOptions::blackjack_pays
    /// [`GameOptions::rounding_blackjack`]: crate::GameOptions::rounding_blackjack
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::Pending`] if the round is not over, or
    /// [`SettleError::AlreadySettled`] if it was settled before.
    pub fn settle(&mut self, tally: &mut Tally) -> Result<RoundSummary, SettleError> {
        if !self.result.is_terminal() {
            return Err(SettleError::Pending);
        }
        if self.settled {
            return Err(SettleError::AlreadySettled);
        }

        let bet = self.bet;
        let before = self.player.credit();
        match self.result {
            GameResult::Win => self.player.add_credit(bet),
            GameResult::BlackJack => {
                let bonus = self.blackjack_payout(bet);
                self.player.add_credit(bonus);
            }
            GameResult::Lose => self.player.take_credit(bet),
            GameResult::Draw | GameResult::Pending => {}
        }
        let credit = self.player.credit();

        self.settled = true;
        tally.record(self.result);

        #[expect(clippy::cast_possible_wrap, reason = "credit values fit in isize")]
        let net = credit as isize - before as isize;

        let summary = RoundSummary {
            result: self.result,
            bet,
            net,
            credit,
            player_value: self.player_value(),
            dealer_value: self.dealer_value(),
            game_over: self.is_game_over(),
        };

        info!(
            "settled {:?} on bet {bet}: net {net}, credit {credit}{}",
            summary.result,
            if summary.game_over { ", game over" } else { "" }
        );

        Ok(summary)
    }

    /// Adds credit to the player, e.g. to continue after the game is over.
    pub const fn add_credit(&mut self, amount: usize) {
        self.player.add_credit(amount);
    }
}
