//! Random AI player: uniform choices over whatever the engine offers.

use std::sync::Mutex;

use rand::prelude::*;

use super::{offered_cards, seat_hand};
use crate::actions::Request;
use crate::domain::State;
use crate::player::{Player, PlayerError};

/// Picks uniformly among the offered options.
///
/// Discards are a random selection of the required size, except that
/// non-trump cards go first and point cards last, so a forced discard
/// never strands an off-suit card or wastes points needlessly.
///
/// Seeded players are deterministic: equal seeds answer equal request
/// sequences identically.
pub struct RandomPlayer {
    /// `Player` methods take `&self`; the RNG needs `&mut`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn discard(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        let trump = state
            .trump
            .ok_or_else(|| PlayerError::Internal("discarding before trump is chosen".into()))?;
        let (_, hand) = seat_hand(state, request)?;
        let mut offered = offered_cards(hand, request)?;
        let expect = request.expects();
        if offered.len() < expect {
            return Err(PlayerError::InvalidMove(format!(
                "{request} offers fewer than {expect} cards"
            )));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PlayerError::Internal(format!("RNG lock poisoned: {e}")))?;
        offered.shuffle(&mut *rng);
        // Stable: the shuffle decides among equals
        offered.sort_by_key(|&(_, c)| (c.is_suit(trump), c.points(trump) > 0));
        Ok(offered.into_iter().take(expect).map(|(i, _)| i).collect())
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn play(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        if let Request::Discard { .. } = request {
            return self.discard(state, request);
        }

        let options = request.options();
        if options.is_empty() {
            return Err(PlayerError::InvalidMove(format!("{request} offers nothing")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PlayerError::Internal(format!("RNG lock poisoned: {e}")))?;
        let choice = options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| PlayerError::Internal("Failed to choose random option".into()))?;
        Ok(vec![choice])
    }
}
