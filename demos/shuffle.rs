//! Shuffles a deck and decodes any card tokens given on the command line.
//!
//! Run with `RUST_LOG=cardkit=trace` to see library events.

use std::time::{SystemTime, UNIX_EPOCH};

use cardkit::{Card, Deck};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut deck = Deck::full();
    deck.shuffle_seeded(seed);
    println!("Seed {seed}:");
    for row in deck.as_slice().chunks(13) {
        let tokens: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("  {}", tokens.join(" "));
    }

    for token in std::env::args().skip(1) {
        let card = Card::from_token(&token);
        match token.parse::<Card>() {
            Ok(_) => println!("{token}: {card} (suit {}, value {})", card.suit(), card.value()),
            Err(err) => println!(
                "{token}: {card} (suit {}, value {}; {err})",
                card.suit(),
                card.value()
            ),
        }
    }
}
