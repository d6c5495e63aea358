//! Card, rank and suit types with their token encoding.
//!
//! A card token is a rank token followed by a single suit character, for
//! example `AH`, `10S` or `QD`. The empty token stands for an unknown card.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseCardError, ParseSuitError};

/// Card suit.
///
/// [`Suit::Unknown`] is the sentinel returned when a suit cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Absent or unrecognised suit.
    #[default]
    Unknown,
}

impl Suit {
    /// The four real suits, in full-deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit character (`C`, `D`, `H`, `S`, or `?` when unknown).
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
            Self::Unknown => '?',
        }
    }

    /// Decodes a suit character, returning [`Suit::Unknown`] for anything else.
    ///
    /// ```
    /// use cardkit::Suit;
    ///
    /// assert_eq!(Suit::from_char('H'), Suit::Hearts);
    /// assert_eq!(Suit::from_char('h'), Suit::Unknown);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            'C' => Self::Clubs,
            'D' => Self::Diamonds,
            'H' => Self::Hearts,
            'S' => Self::Spades,
            _ => Self::Unknown,
        }
    }

    /// Returns whether this is one of the four real suits.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let c = chars.next().ok_or(ParseSuitError::Empty)?;
        if chars.next().is_some() {
            return Err(ParseSuitError::TooLong);
        }

        match Self::from_char(c) {
            Self::Unknown => Err(ParseSuitError::InvalidChar(c)),
            suit => Ok(suit),
        }
    }
}

const RANK_TOKENS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Card rank, always within 1..=13 (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    /// Ace (1).
    pub const ACE: Self = Self(1);
    /// Jack (11).
    pub const JACK: Self = Self(11);
    /// Queen (12).
    pub const QUEEN: Self = Self(12);
    /// King (13).
    pub const KING: Self = Self(13);

    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
        Self(13),
    ];

    /// Creates a rank, or `None` if `value` is outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if matches!(value, 1..=13) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric rank.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the rank token (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        RANK_TOKENS[(self.0 - 1) as usize]
    }

    /// Decodes a rank token. Both `1` and `A` decode to the ace.
    ///
    /// ```
    /// use cardkit::Rank;
    ///
    /// assert_eq!(Rank::from_token("A"), Some(Rank::ACE));
    /// assert_eq!(Rank::from_token("1"), Some(Rank::ACE));
    /// assert_eq!(Rank::from_token("0"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let value = match token {
            "1" | "A" => 1,
            "2" => 2,
            "3" => 3,
            "4" => 4,
            "5" => 5,
            "6" => 6,
            "7" => 7,
            "8" => 8,
            "9" => 9,
            "10" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            _ => return None,
        };
        Some(Self(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A playing card.
///
/// A card whose rank is absent encodes its rank as `0`. The card with neither
/// rank nor suit is [`Card::UNKNOWN`] and displays as `?`.
///
/// ```
/// use cardkit::{Card, Suit};
///
/// let card = Card::new(10, Suit::Spades);
/// assert_eq!(card.to_string(), "10S");
/// assert_eq!(Card::from_token("10S"), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Card {
    rank: Option<Rank>,
    suit: Suit,
}

impl Card {
    /// The unknown card, encoded as the empty token.
    pub const UNKNOWN: Self = Self {
        rank: None,
        suit: Suit::Unknown,
    };

    /// Creates a new card.
    ///
    /// This never fails. A rank outside 1..=13 leaves the rank absent, so the
    /// card encodes as `0` followed by the suit and [`Card::value`] returns 0.
    /// Use [`Card::try_new`] to reject such input instead.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        let checked = Rank::new(rank);
        if checked.is_none() {
            tracing::debug!(rank, %suit, "rank outside 1..=13, using placeholder rank");
        }
        Self {
            rank: checked,
            suit,
        }
    }

    /// Creates a new card, rejecting out-of-range ranks and the unknown suit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside 1..=13, or
    /// [`CardError::UnknownSuit`] if `suit` is [`Suit::Unknown`].
    pub const fn try_new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        let Some(rank) = Rank::new(rank) else {
            return Err(CardError::InvalidRank(rank));
        };
        if !suit.is_known() {
            return Err(CardError::UnknownSuit);
        }
        Ok(Self::from_parts(rank, suit))
    }

    /// Creates a card from an already validated rank.
    #[must_use]
    pub const fn from_parts(rank: Rank, suit: Suit) -> Self {
        Self {
            rank: Some(rank),
            suit,
        }
    }

    /// Decodes a card token.
    ///
    /// Never fails: the trailing character gives the suit and everything
    /// before it gives the rank, each falling back to its sentinel when not
    /// recognised. Tokens shorter than two bytes decode to [`Card::UNKNOWN`].
    ///
    /// ```
    /// use cardkit::{Card, Suit};
    ///
    /// assert_eq!(Card::from_token("QD").value(), 12);
    /// assert_eq!(Card::from_token("QX").suit(), Suit::Unknown);
    /// assert_eq!(Card::from_token(""), Card::UNKNOWN);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.len() < 2 {
            return Self::UNKNOWN;
        }

        let mut chars = token.chars();
        let suit = chars.next_back().map_or(Suit::Unknown, Suit::from_char);
        Self {
            rank: Rank::from_token(chars.as_str()),
            suit,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the rank, if present.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        self.rank
    }

    /// Returns the face value (1 = Ace .. 13 = King), or 0 if there is none.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            Some(rank) => rank.get(),
            None => 0,
        }
    }

    /// Returns whether this is the unknown card.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.rank.is_none() && !self.suit.is_known()
    }

    /// Returns whether both rank and suit are present.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.rank.is_some() && self.suit.is_known()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("?");
        }
        let rank = self.rank.map_or("0", Rank::token);
        write!(f, "{rank}{}", self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card token strictly. `?` parses as [`Card::UNKNOWN`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "?" {
            return Ok(Self::UNKNOWN);
        }

        let mut chars = s.chars();
        let last = chars.next_back().ok_or(ParseCardError::Empty)?;
        let prefix = chars.as_str();
        if prefix.is_empty() {
            return Err(ParseCardError::TooShort);
        }

        let suit = Suit::from_char(last);
        if !suit.is_known() {
            return Err(ParseCardError::InvalidSuit(last));
        }
        let rank = Rank::from_token(prefix).ok_or(ParseCardError::InvalidRank)?;

        Ok(Self::from_parts(rank, suit))
    }
}
