use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::DeckError;

use super::Game;

impl Game {
    /// Dealer plays their hand.
    ///
    /// The dealer draws one card at a time while the hand is below the stand
    /// limit, with no look-ahead, so the last draw may bust.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, DeckError> {
        let limit = self.options.stand_limit;
        let mut drawn_cards = Vec::new();

        while self.dealer.hand().value() < limit {
            let card = self.deck.draw()?;
            self.dealer.hand_mut().add_card(card);
            drawn_cards.push(card);
        }

        debug!(
            "dealer stands on {} after drawing {} card(s)",
            self.dealer.hand().value(),
            drawn_cards.len()
        );
        Ok(drawn_cards)
    }
}
