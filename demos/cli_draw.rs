//! CLI five-card draw example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use fivecard::{Card, Session, SessionOptions, Suit};

fn main() {
    println!("Five-card draw CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = SessionOptions::default();
    let mut session = Session::new(options, seed);

    loop {
        print_table(&session);

        let action = prompt_line("Action (d = draw, c = cheat, q = quit): ");
        match action.as_str() {
            "d" | "draw" | "" => {
                if let Err(err) = session.draw_random_hand() {
                    println!("Draw error: {err}");
                }
            }
            "c" | "cheat" => cheat_flow(&mut session),
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown action."),
        }
    }
}

fn cheat_flow(session: &mut Session) {
    session.clear_selection();
    println!("Pick up to 5 cards as '<suit><rank>', e.g. h1, s13, d7. Empty line to deal.");

    loop {
        let picked = session.selection().len();
        if picked == 5 {
            break;
        }

        let input = prompt_line(&format!("Card {}/5: ", picked + 1));
        if input.is_empty() {
            break;
        }

        match parse_card(&input) {
            Some(card) => {
                if !session.add_to_selection(card) {
                    println!("Already picked.");
                }
            }
            None => println!("Unrecognized card."),
        }
    }

    if let Err(err) = session.commit_selection() {
        println!("Cheat error: {err}");
    }
}

fn parse_card(input: &str) -> Option<Card> {
    let (suit, rank) = input.split_at_checked(1)?;
    let suit = match suit {
        "h" => Suit::Hearts,
        "d" => Suit::Diamonds,
        "s" => Suit::Spades,
        "c" => Suit::Clubs,
        _ => return None,
    };
    match rank.parse::<u8>() {
        Ok(rank) if (1..=13).contains(&rank) => Some(Card::new(suit, rank)),
        _ => None,
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

fn print_table(session: &Session) {
    println!("\nDeck: {} cards remaining", session.deck().len());
    println!("Hand: {}", format_hand(session.hand()));
    if let Some(description) = session.description() {
        println!("{description}");
    }
    println!();
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return String::from("(empty)");
    }

    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let suit = match card.suit {
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Spades => "♠",
        Suit::Clubs => "♣",
    };
    format!("{}{}", card.rank_symbol(), suit)
}
