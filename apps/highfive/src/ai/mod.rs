//! Computer players.
//!
//! - [`Dumb`]: fixed choices, random trump
//! - [`RandomPlayer`]: uniform over the offered options (seedable)
//! - [`Heuristic`]: pattern-table bidding and decision-tree trick play, with
//!   inconsistent and noisy variants
//!
//! Every player answers only from `Request::options()`, so whatever it
//! returns passes the engine's selection checks.

mod dumb;
mod heuristic;
mod play_tree;
mod random;
pub mod registry;

pub use dumb::Dumb;
pub use heuristic::{BidRule, BidTable, Heuristic, PlayStyle};
pub use play_tree::{CardScore, PlayTree, Situation, Table};
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};

use crate::actions::Request;
use crate::domain::{Card, Hand, Seat, State};
use crate::player::PlayerError;

/// The first offered option.
pub(crate) fn first(request: &Request) -> Result<Vec<usize>, PlayerError> {
    request
        .options()
        .first()
        .map(|&o| vec![o])
        .ok_or_else(|| PlayerError::InvalidMove(format!("{request} offers nothing")))
}

/// The second offered option, or the first when only one is offered.
pub(crate) fn second(request: &Request) -> Result<Vec<usize>, PlayerError> {
    match request.options().get(1) {
        Some(&o) => Ok(vec![o]),
        None => first(request),
    }
}

/// The seat a request is addressed to, and its hand.
pub(crate) fn seat_hand<'a>(state: &'a State, request: &Request) -> Result<(Seat, &'a Hand), PlayerError> {
    let seat = request
        .seat()
        .ok_or_else(|| PlayerError::Internal(format!("{request} names no seat")))?;
    let hand = state
        .hand(seat)
        .ok_or_else(|| PlayerError::Internal(format!("{seat} holds no hand")))?;
    Ok((seat, hand))
}

/// Cards behind the request's options, paired with their positions.
pub(crate) fn offered_cards(hand: &Hand, request: &Request) -> Result<Vec<(usize, Card)>, PlayerError> {
    request
        .options()
        .into_iter()
        .map(|i| {
            hand.get(i)
                .map(|&c| (i, c))
                .ok_or_else(|| PlayerError::InvalidMove(format!("position {i} is not in the hand")))
        })
        .collect()
}

/// The `expect` cheapest discard options: non-trump first, then trump
/// without points, then the rest by strength.
pub(crate) fn preferred_discards(state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
    let trump = state
        .trump
        .ok_or_else(|| PlayerError::Internal("discarding before trump is chosen".into()))?;
    let (_, hand) = seat_hand(state, request)?;
    let mut offered = offered_cards(hand, request)?;
    offered.sort_by_key(|&(_, c)| (c.is_suit(trump), c.points(trump) > 0, c.trump_value(trump)));
    let expect = request.expects();
    if offered.len() < expect {
        return Err(PlayerError::InvalidMove(format!(
            "{request} offers fewer than {expect} cards"
        )));
    }
    Ok(offered.into_iter().take(expect).map(|(i, _)| i).collect())
}
