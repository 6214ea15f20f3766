//! Property-based tests for deck, valuation, outcome and settlement rules.

use std::collections::HashSet;

use blackjack21::{
    Card, DECK_SIZE, Deck, Game, GameOptions, GameResult, Suit, Tally, compare_values, hand_value,
    weight,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Strategy to generate a card (ranks 1-13, aces are rank 1)
fn card_strategy() -> impl Strategy<Value = Card> {
    (1u8..=13, 0usize..4).prop_map(|(rank, suit)| Card::new(Suit::ALL[suit], rank))
}

fn hand_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 1..=8)
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
        let fresh: HashSet<Card> = Deck::fresh().cards().iter().copied().collect();
        prop_assert_eq!(shuffled, fresh);
    }

    #[test]
    fn different_seeds_give_different_orders(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(a));
        let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(b));
        prop_assert_ne!(first, second);
    }

    #[test]
    fn value_is_hard_or_uniformly_promoted(cards in hand_strategy()) {
        let hard: u8 = cards.iter().map(Card::base_value).sum();
        let aces = cards.iter().filter(|c| c.is_ace()).count() as u8;
        let value = hand_value(&cards);

        prop_assert!(value == hard || value == hard + 10 * aces);
        if hard <= 21 {
            prop_assert!(value <= 21, "a non-busting total is always preferred");
        }
    }

    #[test]
    fn outcome_follows_weights(player in 2u8..=21, dealer in 2u8..=30) {
        let result = compare_values(player, dealer);
        if player == dealer {
            prop_assert_eq!(result, GameResult::Draw);
        } else if weight(player) < weight(dealer) {
            prop_assert_eq!(result, GameResult::Win);
        } else {
            prop_assert_eq!(result, GameResult::Lose);
        }
    }

    #[test]
    fn busted_player_always_loses(player in 22u8..=30, dealer in 2u8..=30) {
        prop_assert_eq!(compare_values(player, dealer), GameResult::Lose);
    }

    #[test]
    fn dealer_stops_at_the_limit(seed in any::<u64>(), limit in 12u8..=19) {
        let options = GameOptions::default().with_stand_limit(limit);
        let mut game = Game::new(options, 100, seed);
        game.stand().unwrap();

        let dealer = game.dealer_hand().cards();
        prop_assert!(game.dealer_value() >= limit);
        for drawn in 2..dealer.len() {
            prop_assert!(
                hand_value(&dealer[..drawn]) < limit,
                "dealer drew while already at the limit"
            );
        }
    }

    #[test]
    fn settlement_conserves_credit(seed in any::<u64>(), bet in 5usize..=100, hits in 0usize..3) {
        let mut game = Game::new(GameOptions::default(), 100, seed);
        let mut tally = Tally::new();

        game.place_bet(bet).unwrap();
        for _ in 0..hits {
            game.hit().unwrap();
        }
        game.stand().unwrap();
        let summary = game.settle(&mut tally).unwrap();

        let expected = match summary.result {
            GameResult::Win => 100 + bet,
            GameResult::Lose => 100 - bet,
            GameResult::BlackJack => 100 + bet * 3 / 2,
            GameResult::Draw => 100,
            GameResult::Pending => unreachable!("settled rounds are terminal"),
        };
        prop_assert_eq!(summary.credit, expected);
        prop_assert_eq!(tally.wins + tally.losses + tally.draws, 1);
        prop_assert_eq!(summary.game_over, summary.credit < 5);
    }
}
