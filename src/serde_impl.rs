//! `serde` support: cards and suits travel as their token strings.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::card::{Card, Suit};

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_unknown() {
            return serializer.serialize_str("");
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CardVisitor;

        impl Visitor<'_> for CardVisitor {
            type Value = Card;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a card token")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Card, E> {
                Ok(Card::from_token(v))
            }
        }

        deserializer.deserialize_str(CardVisitor)
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SuitVisitor;

        impl Visitor<'_> for SuitVisitor {
            type Value = Suit;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a suit character")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Suit, E> {
                let mut chars = v.chars();
                Ok(match (chars.next(), chars.next()) {
                    (Some(c), None) => Suit::from_char(c),
                    _ => Suit::Unknown,
                })
            }
        }

        deserializer.deserialize_str(SuitVisitor)
    }
}
