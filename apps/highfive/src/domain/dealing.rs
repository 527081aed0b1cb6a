//! The draw pile and deterministic shuffling.

use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use super::card_set::CardSet;
use super::cards_types::{Card, Suit, Value};
use super::rules::DECK_SIZE;
use crate::errors::domain::DomainError;

/// Cards remaining to be dealt, depleted from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

/// All 53 cards in standard order: Diamonds, Clubs, Hearts, Spades, each
/// two to ace, then the Joker.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in Value::SUITED {
            deck.push(Card::new(value, suit));
        }
    }
    deck.push(Card::JOKER);
    deck
}

impl Deck {
    /// A full deck in standard order.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// A full deck shuffled deterministically from `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut cards = full_deck();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// A deck in exactly the given order, for stacked deals.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take `n` cards off the top. Fails without touching the deck if fewer
    /// than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<CardSet, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::invariant(format!(
                "cannot deal {n} cards from a deck of {}",
                self.cards.len()
            )));
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Take whatever is left.
    pub fn deal_rest(&mut self) -> CardSet {
        self.cards.drain(..).collect()
    }

    pub fn position(&self, pred: impl Fn(&Card) -> bool) -> Option<usize> {
        self.cards.iter().position(pred)
    }

    pub fn replace(&mut self, index: usize, card: Card) -> Option<Card> {
        self.cards
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, card))
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cards", self.cards.len())
    }
}
