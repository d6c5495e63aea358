//! Deck construction and shuffle tests.

use std::collections::{HashMap, HashSet};

use cardkit::{
    Card, DECK_SIZE, Deck, DeckError, DeckOptions, DeckOrder, ParseCardError, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted(deck: &Deck) -> Vec<Card> {
    let mut cards = deck.as_slice().to_vec();
    cards.sort();
    cards
}

#[test]
fn full_deck_has_every_card_once() {
    let deck = Deck::full();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.iter().all(|card| card.is_valid()));

    let mut per_suit: HashMap<Suit, usize> = HashMap::new();
    let mut per_rank: HashMap<u8, usize> = HashMap::new();
    for card in &deck {
        *per_suit.entry(card.suit()).or_default() += 1;
        *per_rank.entry(card.value()).or_default() += 1;
    }
    assert_eq!(per_suit.len(), 4);
    assert!(per_suit.values().all(|&n| n == 13));
    assert_eq!(per_rank.len(), 13);
    assert!(per_rank.values().all(|&n| n == 4));
}

#[test]
fn full_deck_order_is_rank_major() {
    let deck = Deck::full();
    let head: Vec<String> = deck.iter().take(8).map(ToString::to_string).collect();
    assert_eq!(head, ["AC", "AD", "AH", "AS", "2C", "2D", "2H", "2S"]);
    assert_eq!(deck.as_slice()[DECK_SIZE - 1], Card::new(13, Suit::Spades));
    assert_eq!(Deck::from_options(&DeckOptions::default()).unwrap(), deck);
}

#[test]
fn options_control_layout() {
    let options = DeckOptions::default()
        .with_order(DeckOrder::SuitMajor)
        .with_suit_order([Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]);
    let deck = Deck::from_options(&options).unwrap();

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.as_slice()[0], Card::new(1, Suit::Spades));
    assert_eq!(deck.as_slice()[12], Card::new(13, Suit::Spades));
    assert_eq!(deck.as_slice()[13], Card::new(1, Suit::Hearts));
    assert_eq!(sorted(&deck), sorted(&Deck::full()));
}

#[test]
fn options_reject_bad_suit_order() {
    let duplicated = DeckOptions::default()
        .with_suit_order([Suit::Clubs, Suit::Clubs, Suit::Hearts, Suit::Spades]);
    assert_eq!(
        Deck::from_options(&duplicated).unwrap_err(),
        DeckError::InvalidSuitOrder
    );

    let unknown = DeckOptions::default()
        .with_suit_order([Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Unknown]);
    assert!(!unknown.has_valid_suit_order());
    assert!(Deck::from_options(&unknown).is_err());
}

#[test]
fn shuffle_preserves_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::full();
    deck.shuffle_with(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, Deck::full());
    assert_eq!(sorted(&deck), sorted(&Deck::full()));
}

#[test]
fn shuffle_small_decks_is_noop() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut empty = Deck::new();
    empty.shuffle_with(&mut rng);
    assert!(empty.is_empty());

    let single = Card::new(4, Suit::Diamonds);
    let mut one = Deck::from(vec![single]);
    one.shuffle_with(&mut rng);
    assert_eq!(one.as_slice(), [single]);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let mut a = Deck::full();
    let mut b = Deck::full();
    a.shuffle_seeded(99);
    b.shuffle_seeded(99);
    assert_eq!(a, b);

    let mut c = Deck::full();
    c.shuffle_seeded(100);
    assert_ne!(a, c);
}

#[test]
fn thread_rng_shuffle_preserves_cards() {
    let mut deck = Deck::full();
    deck.shuffle();
    assert_eq!(sorted(&deck), sorted(&Deck::full()));
}

#[test]
fn shuffle_is_uniform_over_positions() {
    const TRIALS: u32 = 20_000;

    let full = Deck::full();
    let index: HashMap<Card, usize> = full.iter().enumerate().map(|(i, c)| (*c, i)).collect();
    let mut counts = vec![[0u32; DECK_SIZE]; DECK_SIZE];
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..TRIALS {
        let mut deck = full.clone();
        deck.shuffle_with(&mut rng);
        for (position, card) in deck.iter().enumerate() {
            counts[index[card]][position] += 1;
        }
    }

    let expected = f64::from(TRIALS) / 52.0;
    let tolerance = expected * 0.3;
    for row in &counts {
        for &count in row {
            let deviation = (f64::from(count) - expected).abs();
            assert!(
                deviation < tolerance,
                "count {count} too far from expected {expected}"
            );
        }
    }
}

#[test]
fn display_and_parse() {
    let deck: Deck = "AH 10S QD".parse().unwrap();
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.to_string(), "AH 10S QD");
    assert_eq!(Deck::new().to_string(), "");

    let round_trip: Deck = Deck::full().to_string().parse().unwrap();
    assert_eq!(round_trip, Deck::full());

    let err = "AH 2C ZZ".parse::<Deck>().unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.kind, ParseCardError::InvalidSuit('Z'));
}

#[test]
fn collection_conversions() {
    let cards = vec![Card::new(2, Suit::Clubs), Card::new(3, Suit::Hearts)];
    let deck: Deck = cards.iter().copied().collect();
    assert_eq!(deck.clone().into_vec(), cards);
    let slice: &[Card] = deck.as_ref();
    assert_eq!(slice, cards.as_slice());

    let mut deck = deck;
    deck.as_mut_slice().swap(0, 1);
    let owned: Vec<Card> = deck.into_iter().collect();
    assert_eq!(owned, [cards[1], cards[0]]);
}
