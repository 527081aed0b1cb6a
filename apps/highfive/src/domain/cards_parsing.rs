//! Card tokens ("AS", "fH", "jX") and the hand shorthand used by fixtures.

use std::fmt;
use std::str::FromStr;

use super::card_set::CardSet;
use super::cards_types::{Card, Suit, Value};
use crate::errors::domain::{DomainError, ValidationKind};

/// Suit order of the groups in [`parse_hand`].
const HAND_GROUPS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Value {
    pub fn to_char(self) -> char {
        match self {
            Value::Deuce => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::OffFive => 'f',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Joker => 'j',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    pub fn from_char(ch: char) -> Option<Value> {
        Value::ALL.into_iter().find(|v| v.to_char() == ch)
    }
}

impl Suit {
    pub fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_char(ch: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.to_char() == ch)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = self.suit.map_or('X', Suit::to_char);
        write!(f, "{}{}", self.value.to_char(), suit)
    }
}

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(value_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_error(s));
        };
        let value = Value::from_char(value_ch).ok_or_else(|| parse_error(s))?;
        let suit = match suit_ch {
            'X' => None,
            ch => Some(Suit::from_char(ch).ok_or_else(|| parse_error(s))?),
        };
        // Only the Joker may be suitless
        if suit.is_none() && value != Value::Joker {
            return Err(parse_error(s));
        }
        Ok(Card { value, suit })
    }
}

/// Non-panicking helper to parse card tokens into cards.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Parse the compact hand shorthand `"AKQ,T9,,j"`: up to four comma-separated
/// groups of value characters for Spades, Hearts, Diamonds and Clubs. A `j`
/// in any group is the suitless Joker.
pub fn parse_hand(s: &str) -> Result<CardSet, DomainError> {
    let groups: Vec<&str> = s.split(',').collect();
    if groups.len() > HAND_GROUPS.len() {
        return Err(DomainError::validation(
            ValidationKind::ParseCard,
            format!("Parse hand: too many suit groups in {s:?}"),
        ));
    }
    let mut cards = CardSet::new();
    for (group, suit) in groups.iter().zip(HAND_GROUPS) {
        for ch in group.chars() {
            let value = Value::from_char(ch).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Parse hand: unknown value {ch:?} in {s:?}"),
                )
            })?;
            if value == Value::Joker {
                cards.push(Card::JOKER);
            } else {
                cards.push(Card::new(value, suit));
            }
        }
    }
    Ok(cards)
}
