//! The round state passed through every transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bidding::{winning_bid, Bid};
use super::card_set::CardSet;
use super::cards_types::{Card, Suit};
use super::dealing::Deck;
use super::hand::Hand;
use super::rules::{DECK_SIZE, PLAYERS};
use super::seat::Seat;
use super::seed_derivation::derive_dealing_seed;
use super::tricks::Trick;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub score: [i32; PLAYERS],
    pub dealer: Seat,
    pub deck: Deck,
    pub bids: [Option<Bid>; PLAYERS],
    pub trump: Option<Suit>,
    pub hands: [Option<Hand>; PLAYERS],
    pub played: Vec<Trick>,
    pub discarded: CardSet,
    /// Rounds scored so far.
    pub rounds: u32,
    /// Deals gathered so far, thrown-in deals included.
    pub deals: u32,
    pub seed: u64,
}

/// Where a card sits before play starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardLocation {
    Deck(usize),
    Hand(Seat, usize),
}

impl State {
    /// Start of a match. The first Deal rotates the deal to `dealer.next()`.
    pub fn initial(dealer: Seat, seed: u64) -> Self {
        let mut state = Self::with_deck(dealer, Deck::shuffled(derive_dealing_seed(seed, 0)));
        state.seed = seed;
        state
    }

    /// Start of a match with a stacked deck.
    pub fn with_deck(dealer: Seat, deck: Deck) -> Self {
        Self {
            score: [0; PLAYERS],
            dealer,
            deck,
            bids: [None; PLAYERS],
            trump: None,
            hands: Default::default(),
            played: Vec::new(),
            discarded: CardSet::new(),
            rounds: 0,
            deals: 0,
            seed: 0,
        }
    }

    pub fn hand(&self, seat: Seat) -> Option<&Hand> {
        self.hands[seat as usize].as_ref()
    }

    pub fn require_hand(&self, seat: Seat, context: &str) -> Result<&Hand, DomainError> {
        self.hand(seat)
            .ok_or_else(|| DomainError::invariant(format!("{context}: {seat} holds no hand")))
    }

    pub fn require_hand_mut(&mut self, seat: Seat, context: &str) -> Result<&mut Hand, DomainError> {
        self.hands[seat as usize]
            .as_mut()
            .ok_or_else(|| DomainError::invariant(format!("{context}: {seat} holds no hand")))
    }

    pub fn require_trump(&self, context: &str) -> Result<Suit, DomainError> {
        self.trump
            .ok_or_else(|| DomainError::invariant(format!("{context}: trump is not set")))
    }

    /// The winning bid, visiting seats from the first bidder.
    pub fn winning_bid(&self) -> Option<(Seat, Bid)> {
        winning_bid(&self.bids, self.dealer.next())
    }

    pub fn require_winning_bid(&self, context: &str) -> Result<(Seat, Bid), DomainError> {
        self.winning_bid()
            .ok_or_else(|| DomainError::invariant(format!("{context}: no winning bid")))
    }

    pub fn best_bid(&self) -> Option<Bid> {
        self.winning_bid().map(|(_, bid)| bid)
    }

    pub fn last_played(&self) -> Option<&Trick> {
        self.played.last()
    }

    /// The trick still being played, if any.
    pub fn current_trick(&self) -> Option<&Trick> {
        self.last_played().filter(|t| !t.is_complete())
    }

    /// Seat expected to play next, once play has started.
    pub fn to_play(&self) -> Option<Seat> {
        let trump = self.trump?;
        self.last_played()?.next_seat(trump)
    }

    pub fn all_hands_empty(&self) -> bool {
        self.hands.iter().flatten().all(|h| h.is_empty())
    }

    /// First card matching `pred` in the deck or any hand.
    pub fn locate(&self, pred: impl Fn(&Card) -> bool) -> Option<(CardLocation, Card)> {
        if let Some(i) = self.deck.position(&pred) {
            return Some((CardLocation::Deck(i), self.deck.cards()[i]));
        }
        Seat::ALL.into_iter().find_map(|seat| {
            let hand = self.hand(seat)?;
            let i = hand.iter().position(&pred)?;
            Some((CardLocation::Hand(seat, i), hand[i]))
        })
    }

    /// Swap the card at `location` for `card`, returning the old one.
    pub fn replace_card(&mut self, location: CardLocation, card: Card) -> Result<Card, DomainError> {
        let replaced = match location {
            CardLocation::Deck(i) => self.deck.replace(i, card),
            CardLocation::Hand(seat, i) => self.require_hand_mut(seat, "replace card")?.replace(i, card),
        };
        replaced.ok_or_else(|| DomainError::invariant(format!("no card at {location:?}")))
    }

    /// Cards accounted for across deck, hands, tricks and the discard pile.
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.hands.iter().flatten().map(|h| h.len()).sum();
        let in_tricks: usize = self.played.iter().map(|t| t.cards().count()).sum();
        self.deck.len() + in_hands + in_tricks + self.discarded.len()
    }

    pub fn cards_conserved(&self) -> bool {
        self.card_count() == DECK_SIZE
    }

    /// Clear the round fields, keeping the deck.
    pub fn reset_round(&mut self) {
        self.bids = [None; PLAYERS];
        self.trump = None;
        self.hands = Default::default();
        self.played.clear();
        self.discarded = CardSet::new();
    }

    /// Collect the cards for the next deal: clear the round and install a
    /// fresh deck shuffled for the next deal number.
    pub fn gather(&mut self) {
        self.reset_round();
        self.deals += 1;
        self.deck = Deck::shuffled(derive_dealing_seed(self.seed, self.deals));
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "dealer {} | deck {} | round {} | deal {}",
            self.dealer, self.deck, self.rounds, self.deals
        )?;
        if let Some(trump) = self.trump {
            writeln!(f, "trump {trump}")?;
        }
        for seat in Seat::ALL {
            write!(f, "{seat:>5}: score {:>4}", self.score[seat as usize])?;
            if let Some(bid) = self.bids[seat as usize] {
                write!(f, " | bid {bid}")?;
            }
            if let Some(hand) = self.hand(seat) {
                write!(f, " | {hand}")?;
            }
            writeln!(f)?;
        }
        if let Some(trick) = self.last_played() {
            writeln!(f, "trick {}: {trick}", self.played.len())?;
        }
        Ok(())
    }
}
