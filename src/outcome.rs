//! Round outcome rules.

use crate::card::Card;
use crate::hand::{BLACKJACK, hand_value, is_natural, weight};
use crate::result::GameResult;

/// Compares final hand values, ignoring naturals.
///
/// A busted player always loses. Otherwise equal values push and the value
/// with the lower [`weight`] wins.
#[must_use]
pub const fn compare_values(player: u8, dealer: u8) -> GameResult {
    if player > BLACKJACK {
        GameResult::Lose
    } else if player == dealer {
        GameResult::Draw
    } else if weight(player) < weight(dealer) {
        GameResult::Win
    } else {
        GameResult::Lose
    }
}

/// Determines the result of a round from both final hands.
///
/// With `natural_bonus` set, a player natural beats any dealer hand that is
/// not itself a natural and resolves as [`GameResult::BlackJack`], two
/// naturals push, and a dealer natural beats a player 21 made of more cards.
#[must_use]
pub fn outcome(player: &[Card], dealer: &[Card], natural_bonus: bool) -> GameResult {
    let player_value = hand_value(player);
    if player_value > BLACKJACK {
        return GameResult::Lose;
    }

    if natural_bonus {
        match (is_natural(player), is_natural(dealer)) {
            (true, false) => return GameResult::BlackJack,
            (true, true) => return GameResult::Draw,
            (false, true) => return GameResult::Lose,
            (false, false) => {}
        }
    }

    compare_values(player_value, hand_value(dealer))
}
