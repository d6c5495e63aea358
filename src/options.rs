//! Deck construction options.

use crate::card::Suit;

/// Nesting order used when generating a full deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckOrder {
    /// Ranks outer, suits inner: `AC AD AH AS 2C ...`.
    #[default]
    RankMajor,
    /// Suits outer, ranks inner: `AC 2C 3C ... KC AD ...`.
    SuitMajor,
}

/// Options for building a full deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardkit::{DeckOptions, DeckOrder, Suit};
///
/// let options = DeckOptions::default()
///     .with_order(DeckOrder::SuitMajor)
///     .with_suit_order([Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Order in which suits appear. Must list each suit exactly once.
    pub suit_order: [Suit; 4],
    /// Nesting order of ranks and suits.
    pub order: DeckOrder,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            suit_order: Suit::ALL,
            order: DeckOrder::RankMajor,
        }
    }
}

impl DeckOptions {
    /// Sets the suit order.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::{DeckOptions, Suit};
    ///
    /// let order = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
    /// let options = DeckOptions::default().with_suit_order(order);
    /// assert_eq!(options.suit_order, order);
    /// ```
    #[must_use]
    pub const fn with_suit_order(mut self, suit_order: [Suit; 4]) -> Self {
        self.suit_order = suit_order;
        self
    }

    /// Sets the nesting order.
    ///
    /// # Example
    ///
    /// ```
    /// use cardkit::{DeckOptions, DeckOrder};
    ///
    /// let options = DeckOptions::default().with_order(DeckOrder::SuitMajor);
    /// assert_eq!(options.order, DeckOrder::SuitMajor);
    /// ```
    #[must_use]
    pub const fn with_order(mut self, order: DeckOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns whether the suit order lists each real suit exactly once.
    #[must_use]
    pub fn has_valid_suit_order(&self) -> bool {
        Suit::ALL
            .iter()
            .all(|suit| self.suit_order.iter().filter(|s| *s == suit).count() == 1)
    }
}
