//! Error types for checked construction and parsing.
//!
//! The plain accessors on [`Card`](crate::Card) and [`Suit`](crate::Suit) never
//! fail; these errors are only produced by the strict entry points such as
//! [`Card::try_new`](crate::Card::try_new) and the [`FromStr`](core::str::FromStr)
//! implementations.

use thiserror::Error;

/// Errors that can occur when building a card from a rank and suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside 1..=13.
    #[error("rank {0} is outside 1..=13")]
    InvalidRank(u8),
    /// Suit is the unknown sentinel.
    #[error("suit is unknown")]
    UnknownSuit,
}

/// Errors that can occur when parsing a suit character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSuitError {
    /// Input is empty.
    #[error("empty suit")]
    Empty,
    /// Input holds more than one character.
    #[error("suit must be a single character")]
    TooLong,
    /// Character is not one of `C`, `D`, `H` or `S`.
    #[error("unknown suit character {0:?}")]
    InvalidChar(char),
}

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Token is empty.
    #[error("empty card token")]
    Empty,
    /// Token has no room for both a rank and a suit.
    #[error("card token is too short")]
    TooShort,
    /// Rank prefix is not a known rank token.
    #[error("unknown rank token")]
    InvalidRank,
    /// Trailing character is not a suit.
    #[error("unknown suit character {0:?}")]
    InvalidSuit(char),
}

/// Errors that can occur when building a deck from options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Suit order does not list each suit exactly once.
    #[error("suit order must list each of the four suits exactly once")]
    InvalidSuitOrder,
}

/// Error returned when a deck listing contains an invalid card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card at position {index}")]
pub struct ParseDeckError {
    /// Zero-based position of the offending token.
    pub index: usize,
    /// Why the token was rejected.
    #[source]
    pub kind: ParseCardError,
}
