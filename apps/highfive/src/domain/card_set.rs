//! Unordered card collection with trump-aware queries.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardSet(Vec<Card>);

impl CardSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.0
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Swap the card at `index` for `card`, returning the old one.
    pub fn replace(&mut self, index: usize, card: Card) -> Option<Card> {
        self.0
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, card))
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }

    pub fn trump_cards(&self, trump: Suit) -> CardSet {
        self.iter().copied().filter(|c| c.is_suit(trump)).collect()
    }

    pub fn non_trump_cards(&self, trump: Suit) -> CardSet {
        self.iter().copied().filter(|c| !c.is_suit(trump)).collect()
    }

    pub fn point_cards(&self, trump: Suit) -> CardSet {
        self.iter().copied().filter(|c| c.points(trump) > 0).collect()
    }

    pub fn points(&self, trump: Suit) -> i32 {
        self.iter().map(|c| c.points(trump)).sum()
    }

    /// Every card re-tagged for `trump` (see [`Card::as_trump`]).
    pub fn as_trump(&self, trump: Suit) -> CardSet {
        self.iter().map(|c| c.as_trump(trump)).collect()
    }

    /// Canonical display order: suit descending with suitless cards last,
    /// then value descending.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| b.cmp(a));
    }

    pub fn sorted(mut self) -> CardSet {
        self.sort();
        self
    }
}

impl Deref for CardSet {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
