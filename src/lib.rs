//! Playing card, suit and deck types with optional `no_std` support.
//!
//! Cards encode to compact tokens such as `AH` or `10S` and decode back
//! without ever failing: malformed input maps to sentinel values
//! ([`Suit::Unknown`], a zero value, or [`Card::UNKNOWN`]). Strict parsing is
//! available through [`FromStr`](core::str::FromStr).
//!
//! # Example
//!
//! ```
//! use cardkit::{Card, Deck, Suit};
//!
//! let card = Card::new(1, Suit::Hearts);
//! assert_eq!(card.to_string(), "AH");
//!
//! let mut deck = Deck::full();
//! deck.shuffle_seeded(42);
//! assert_eq!(deck.len(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
#[cfg(feature = "serde")]
mod serde_impl;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{DECK_SIZE, Deck};
pub use error::{CardError, DeckError, ParseCardError, ParseDeckError, ParseSuitError};
pub use options::{DeckOptions, DeckOrder};
