//! Deck construction and shuffling.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank};
use crate::error::{DeckError, ParseDeckError};
use crate::options::{DeckOptions, DeckOrder};

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// An ordered sequence of cards. The first card is the top of the deck.
///
/// The deck has no internal locking; share it behind a lock of your choice if
/// it must be shuffled from several threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates the full 52-card deck in its fixed order.
    ///
    /// Ranks run from Ace to King in the outer loop; within each rank the
    /// suits come as clubs, diamonds, hearts, spades.
    ///
    /// ```
    /// use cardkit::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::full();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.as_slice()[0].to_string(), "AC");
    /// assert_eq!(deck.as_slice()[51].to_string(), "KS");
    /// ```
    #[must_use]
    pub fn full() -> Self {
        Self::build(&DeckOptions::default())
    }

    /// Creates a full deck laid out according to `options`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidSuitOrder`] if the suit order does not list
    /// each of the four suits exactly once.
    pub fn from_options(options: &DeckOptions) -> Result<Self, DeckError> {
        if !options.has_valid_suit_order() {
            tracing::debug!(suit_order = ?options.suit_order, "rejected suit order");
            return Err(DeckError::InvalidSuitOrder);
        }
        Ok(Self::build(options))
    }

    fn build(options: &DeckOptions) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        match options.order {
            DeckOrder::RankMajor => {
                for rank in Rank::ALL {
                    for suit in options.suit_order {
                        cards.push(Card::from_parts(rank, suit));
                    }
                }
            }
            DeckOrder::SuitMajor => {
                for suit in options.suit_order {
                    for rank in Rank::ALL {
                        cards.push(Card::from_parts(rank, suit));
                    }
                }
            }
        }

        tracing::trace!(order = ?options.order, "built full deck");
        Self { cards }
    }

    /// Shuffles the deck in place with the given random source.
    ///
    /// Every permutation is equally likely. Decks with fewer than two cards
    /// are left unchanged.
    ///
    /// ```
    /// use cardkit::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let mut deck = Deck::full();
    /// deck.shuffle_with(&mut rng);
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        tracing::trace!(len = self.cards.len(), "shuffled deck");
    }

    /// Shuffles the deck with a generator seeded from `seed`.
    ///
    /// The same seed always produces the same order.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffles the deck with the thread-local generator.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Consumes the deck, returning its cards.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from the top.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl AsRef<[Card]> for Deck {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

/// Formats the deck as space-separated card tokens.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parses whitespace-separated card tokens, each with [`Card::from_str`].
impl FromStr for Deck {
    type Err = ParseDeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token
                    .parse::<Card>()
                    .map_err(|kind| ParseDeckError { index, kind })
            })
            .collect()
    }
}
