//! A seat's cards and the discard-eligibility rules.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::card_set::CardSet;
use super::cards_logic::hand_has_suit;
use super::cards_types::{Card, Suit, Value};
use super::rules::MAX_HAND_SIZE;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand(CardSet);

impl Hand {
    pub fn new() -> Self {
        Self(CardSet::new())
    }

    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
    }

    pub fn remove(&mut self, index: usize) -> Result<Card, DomainError> {
        let len = self.len();
        self.0.remove(index).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::IndexOutOfRange,
                format!("position {index} is outside a hand of {len}"),
            )
        })
    }

    /// Remove several positions at once. Positions refer to the hand before
    /// any removal; the removed cards come back in ascending position order.
    pub fn remove_positions(&mut self, positions: &[usize]) -> Result<Vec<Card>, DomainError> {
        let unique: BTreeSet<usize> = positions.iter().copied().collect();
        if unique.len() != positions.len() {
            return Err(DomainError::validation(
                ValidationKind::DuplicateSelection,
                format!("positions {positions:?} repeat a card"),
            ));
        }
        if let Some(&bad) = unique.iter().find(|&&p| p >= self.len()) {
            return Err(DomainError::validation(
                ValidationKind::IndexOutOfRange,
                format!("position {bad} is outside a hand of {}", self.len()),
            ));
        }
        let mut removed = Vec::with_capacity(unique.len());
        for &position in unique.iter().rev() {
            removed.push(self.remove(position)?);
        }
        removed.reverse();
        Ok(removed)
    }

    /// Give up the hand, keeping the cards in their current order.
    pub fn into_cards(self) -> CardSet {
        self.0
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        hand_has_suit(self, suit)
    }

    /// Cards held beyond the maximum hand size (negative when short).
    pub fn extra_cards(&self) -> isize {
        self.len() as isize - MAX_HAND_SIZE as isize
    }

    /// Positions that may be discarded under `trump`: any non-trump card,
    /// a pointless trump when holding more than six trump, and the trump
    /// deuce when holding more than six point cards.
    pub fn discards(&self, trump: Suit) -> Vec<usize> {
        let trump_count = self.trump_cards(trump).len();
        let point_count = self.point_cards(trump).len();
        self.iter()
            .enumerate()
            .filter(|(_, card)| {
                !card.is_suit(trump)
                    || (trump_count > MAX_HAND_SIZE && card.points(trump) == 0)
                    || (point_count > MAX_HAND_SIZE && card.value == Value::Deuce)
            })
            .map(|(position, _)| position)
            .collect()
    }

    /// How many cards a seat other than the bid winner has to give up.
    pub fn num_to_discard(&self, trump: Suit) -> usize {
        if self.trump_cards(trump).len() <= MAX_HAND_SIZE {
            self.discards(trump).len()
        } else {
            self.extra_cards().max(0) as usize
        }
    }
}

impl Deref for Hand {
    type Target = CardSet;

    fn deref(&self) -> &CardSet {
        &self.0
    }
}

impl DerefMut for Hand {
    fn deref_mut(&mut self) -> &mut CardSet {
        &mut self.0
    }
}

impl From<CardSet> for Hand {
    fn from(cards: CardSet) -> Self {
        Self(cards)
    }
}

impl From<Hand> for CardSet {
    fn from(hand: Hand) -> Self {
        hand.into_cards()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
