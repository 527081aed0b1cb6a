//! The simplest complete player: always the same choice, except for trump.

use std::sync::Mutex;

use rand::prelude::*;

use super::{first, preferred_discards, second, seat_hand};
use crate::actions::Request;
use crate::domain::State;
use crate::player::{Player, PlayerError};

/// Bids the lowest raise, picks a random trump, discards what it must and
/// leads or follows with its first legal card.
pub struct Dumb {
    rng: Mutex<StdRng>,
}

impl Dumb {
    pub const NAME: &'static str = "dumb";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn random_one(&self, request: &Request) -> Result<Vec<usize>, PlayerError> {
        let options = request.options();
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PlayerError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .map(|&o| vec![o])
            .ok_or_else(|| PlayerError::InvalidMove(format!("{request} offers nothing")))
    }

    /// Seats other than the bid winner shed the cheapest cards; the winner
    /// throws away a random selection of what it may.
    fn discard(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        let (seat, _) = seat_hand(state, request)?;
        let winner = state.winning_bid().map(|(s, _)| s);
        if winner != Some(seat) {
            return preferred_discards(state, request);
        }
        let options = request.options();
        let expect = request.expects();
        if options.len() < expect {
            return Err(PlayerError::InvalidMove(format!(
                "{request} offers fewer than {expect} cards"
            )));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PlayerError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(options.choose_multiple(&mut *rng, expect).copied().collect())
    }
}

impl Player for Dumb {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn play(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        match request {
            Request::Bid { .. } => second(request),
            Request::ChooseTrump { .. } => self.random_one(request),
            Request::Discard { .. } => self.discard(state, request),
            Request::Deal { .. }
            | Request::ReDeal { .. }
            | Request::Play { .. }
            | Request::ThrowIn { .. }
            | Request::Score => first(request),
        }
    }
}
