//! Core card types: Card, Value, Suit

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

impl Suit {
    /// Order used for trump choice offers and deck construction.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// The other suit of the same colour.
    pub fn same_color(self) -> Suit {
        match self {
            Suit::Diamonds => Suit::Hearts,
            Suit::Hearts => Suit::Diamonds,
            Suit::Clubs => Suit::Spades,
            Suit::Spades => Suit::Clubs,
        }
    }
}

/// Card values in ascending strength. `OffFive` only exists once trump is
/// fixed, and the Joker ranks between the ten and the jack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Value {
    Deuce,
    Three,
    Four,
    OffFive,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Joker,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    pub const ALL: [Value; 15] = [
        Value::Deuce,
        Value::Three,
        Value::Four,
        Value::OffFive,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Joker,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// The thirteen values printed on a suited card.
    pub const SUITED: [Value; 13] = [
        Value::Deuce,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub value: Value,
    /// `None` only for the Joker before trump is chosen.
    pub suit: Option<Suit>,
}

impl Card {
    pub const JOKER: Card = Card {
        value: Value::Joker,
        suit: None,
    };

    pub const fn new(value: Value, suit: Suit) -> Card {
        Card {
            value,
            suit: Some(suit),
        }
    }

    pub fn is_suit(self, suit: Suit) -> bool {
        self.suit == Some(suit)
    }
}

// Note: Ord on Card is only for stable sorting: suit order (suitless first)
// then value. Trick resolution goes through `Card::beats`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
