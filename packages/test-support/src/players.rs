//! Players that follow a script, for driving a round card by card.

use std::collections::VecDeque;
use std::sync::Mutex;

use highfive::{Bid, Card, Player, PlayerError, Request, State, Suit};

use crate::fixtures::tokens;

#[derive(Default)]
struct Script {
    bids: VecDeque<Bid>,
    trumps: VecDeque<Suit>,
    discards: VecDeque<Vec<Card>>,
    plays: VecDeque<Card>,
}

/// Answers from queued choices. Bids and plays fall back to the first
/// option and discards to the first `expect` options once their queue is
/// empty.
pub struct ScriptedPlayer {
    name: String,
    script: Mutex<Script>,
}

impl ScriptedPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: Mutex::new(Script::default()),
        }
    }

    fn with(self, f: impl FnOnce(&mut Script)) -> Self {
        if let Ok(mut script) = self.script.lock() {
            f(&mut script);
        }
        self
    }

    pub fn bid(self, bid: Bid) -> Self {
        self.with(|s| s.bids.push_back(bid))
    }

    pub fn trump(self, suit: Suit) -> Self {
        self.with(|s| s.trumps.push_back(suit))
    }

    /// Queue one discard, given as card tokens (`"2S 3S 4S"`).
    ///
    /// # Panics
    ///
    /// On a malformed token.
    pub fn discard(self, cards: &str) -> Self {
        let cards = tokens(cards).unwrap_or_else(|e| panic!("bad discard script {cards:?}: {e}"));
        self.with(|s| s.discards.push_back(cards))
    }

    /// Queue plays in order, given as card tokens.
    ///
    /// # Panics
    ///
    /// On a malformed token.
    pub fn plays(self, cards: &str) -> Self {
        let cards = tokens(cards).unwrap_or_else(|e| panic!("bad play script {cards:?}: {e}"));
        self.with(|s| s.plays.extend(cards))
    }

    fn position(state: &State, request: &Request, card: Card) -> Result<usize, PlayerError> {
        let seat = request
            .seat()
            .ok_or_else(|| PlayerError::Internal(format!("{request} names no seat")))?;
        state
            .hand(seat)
            .and_then(|h| h.iter().position(|c| *c == card))
            .ok_or_else(|| PlayerError::InvalidMove(format!("{seat} does not hold {card}")))
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        let mut script = self
            .script
            .lock()
            .map_err(|e| PlayerError::Internal(format!("script lock poisoned: {e}")))?;
        let options = request.options();
        let first = || {
            options
                .first()
                .map(|&o| vec![o])
                .ok_or_else(|| PlayerError::InvalidMove(format!("{request} offers nothing")))
        };

        match request {
            Request::Bid { .. } => match script.bids.pop_front() {
                Some(bid) => Ok(vec![bid.index()]),
                None => first(),
            },
            Request::ChooseTrump { .. } => match script.trumps.pop_front() {
                Some(suit) => Suit::ALL
                    .iter()
                    .position(|&s| s == suit)
                    .map(|i| vec![i])
                    .ok_or_else(|| PlayerError::Internal(format!("{suit} is not offered"))),
                None => first(),
            },
            Request::Discard { .. } => match script.discards.pop_front() {
                Some(cards) => cards
                    .into_iter()
                    .map(|c| Self::position(state, request, c))
                    .collect(),
                None => Ok(options.iter().copied().take(request.expects()).collect()),
            },
            Request::Play { .. } => match script.plays.pop_front() {
                Some(card) => Self::position(state, request, card).map(|i| vec![i]),
                None => first(),
            },
            Request::Deal { .. } | Request::ReDeal { .. } | Request::ThrowIn { .. } | Request::Score => {
                first()
            }
        }
    }
}
