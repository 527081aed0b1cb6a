//! Tricks: who led, what each seat put down, and who won.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use super::rules::PLAYERS;
use super::seat::Seat;
use crate::errors::domain::DomainError;

/// What a seat contributed to a trick. `Empty` is played automatically for
/// a seat that has run out of cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickCard {
    Played(Card),
    Empty,
}

impl TrickCard {
    pub fn card(self) -> Option<Card> {
        match self {
            TrickCard::Played(card) => Some(card),
            TrickCard::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    leader: Seat,
    plays: [Option<TrickCard>; PLAYERS],
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: [None; PLAYERS],
        }
    }

    /// A trick where `cards` were played in rotation starting at `leader`.
    pub fn from_cards(leader: Seat, cards: &[Card]) -> Result<Self, DomainError> {
        let mut trick = Trick::new(leader);
        for (seat, card) in leader.rotation().zip(cards) {
            trick.play(seat, TrickCard::Played(*card))?;
        }
        Ok(trick)
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn get(&self, seat: Seat) -> Option<TrickCard> {
        self.plays[seat as usize]
    }

    pub fn has_played(&self, seat: Seat) -> bool {
        self.plays[seat as usize].is_some()
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.plays.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == PLAYERS
    }

    /// Record a play. Seats must play in rotation from the leader.
    pub fn play(&mut self, seat: Seat, card: TrickCard) -> Result<(), DomainError> {
        if self.has_played(seat) {
            return Err(DomainError::invariant(format!(
                "{seat} already played to this trick"
            )));
        }
        let expected = self.leader.offset(self.len() as isize);
        if seat != expected {
            return Err(DomainError::invariant(format!(
                "{seat} played out of turn, expected {expected}"
            )));
        }
        self.plays[seat as usize] = Some(card);
        Ok(())
    }

    /// Filled slots in play order.
    pub fn in_order(&self) -> impl Iterator<Item = (Seat, TrickCard)> + '_ {
        self.leader
            .rotation()
            .filter_map(|seat| self.get(seat).map(|tc| (seat, tc)))
    }

    /// Real cards in play order.
    pub fn cards(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        self.in_order()
            .filter_map(|(seat, tc)| tc.card().map(|card| (seat, card)))
    }

    /// Suit of the first real card played.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.cards().next().and_then(|(_, card)| card.suit)
    }

    /// The seat and card currently taking the trick.
    pub fn winner(&self, trump: Suit) -> Option<(Seat, Card)> {
        let lead = self.lead_suit();
        self.cards().reduce(|best, candidate| {
            if candidate.1.beats(best.1, trump, lead) {
                candidate
            } else {
                best
            }
        })
    }

    pub fn points(&self, trump: Suit) -> i32 {
        self.cards().map(|(_, card)| card.points(trump)).sum()
    }

    /// The seat to act next: the next seat in rotation while the trick is
    /// open, the winner once it is complete.
    pub fn next_seat(&self, trump: Suit) -> Option<Seat> {
        if self.is_complete() {
            self.winner(trump).map(|(seat, _)| seat)
        } else {
            Some(self.leader.offset(self.len() as isize))
        }
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (seat, tc)) in self.in_order().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match tc {
                TrickCard::Played(card) => write!(f, "{seat}: {card}")?,
                TrickCard::Empty => write!(f, "{seat}: --")?,
            }
        }
        write!(f, "]")
    }
}
