//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack21::{
    ActionError, Card, Game, GameOptions, GameResult, Hand, Menu, Suit, Tally, parse_bet,
};

const STARTING_CREDIT: usize = 100;

fn main() {
    env_logger::builder().format_target(false).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, STARTING_CREDIT, seed);
    let mut tally = Tally::new();

    loop {
        let Some(bet) = prompt_bet(&game) else {
            break;
        };
        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        while game.result() == GameResult::Pending {
            print_table(&game);

            let menu = Menu::for_game(&game);
            println!("{}", format_menu(&menu));
            let input = prompt_line("Action: ");
            if input == "q" || input == "quit" {
                return;
            }

            let result = menu
                .resolve(&input)
                .and_then(|action| game.apply(action));
            match result {
                Ok(_) => {}
                Err(ActionError::InvalidAction) => println!("Unknown action."),
                Err(err) => {
                    println!("Action error: {err}");
                    return;
                }
            }
        }

        print_table(&game);
        match game.settle(&mut tally) {
            Ok(summary) => {
                println!("{}", describe(summary.result));
                println!(
                    "Net {} | credit {} | won {} lost {} drawn {}",
                    summary.net, summary.credit, tally.wins, tally.losses, tally.draws
                );
                if summary.game_over {
                    println!("Credit below the minimum bet. Game over.");
                    break;
                }
            }
            Err(err) => println!("Settlement error: {err}"),
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }

        if let Err(err) = game.reset_round() {
            println!("Cannot start a new round: {err}");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_bet(game: &Game) -> Option<usize> {
    let min = game.options().min_bet;
    let credit = game.credit();
    loop {
        let input = prompt_line(&format!("Bet amount ({min}-{credit}, q to quit): "));
        if input == "q" || input == "quit" {
            return None;
        }
        match parse_bet(&input, min, credit) {
            Ok(bet) => return Some(bet),
            Err(err) => println!("Invalid bet: {err}"),
        }
    }
}

fn print_table(game: &Game) {
    let pending = game.result() == GameResult::Pending;
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    println!(
        "Dealer: {} (value {})",
        format_dealer(game.dealer_hand(), pending),
        game.dealer_visible_value()
    );
    println!(
        "Player: {} (value {}) | bet {} | credit {}",
        format_hand(game.player_hand()),
        game.player_value(),
        game.bet(),
        game.credit()
    );
    println!();
}

fn format_menu(menu: &Menu) -> String {
    let parts: Vec<String> = menu
        .entries()
        .iter()
        .map(|entry| {
            let text = format!("[{}]{}", entry.key, entry.label);
            if entry.enabled {
                colorize(&text, "32")
            } else {
                colorize(&text, "90")
            }
        })
        .collect();
    format!("Actions: {}", parts.join(" "))
}

const fn describe(result: GameResult) -> &'static str {
    match result {
        GameResult::Win => "You win.",
        GameResult::Lose => "You lose.",
        GameResult::Draw => "Push.",
        GameResult::BlackJack => "Blackjack!",
        GameResult::Pending => "Round in progress.",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(hand: &Hand, hide_hole: bool) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    if !hide_hole {
        return format_hand(hand);
    }

    let mut parts = Vec::new();
    if let Some(card) = hand.up_card() {
        parts.push(format_card(card));
    }
    if hand.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
