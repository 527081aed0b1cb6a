use tracing::debug;

use super::Request;
use crate::domain::scoring::{resolve, trick_points};
use crate::domain::{Seat, State};
use crate::errors::domain::DomainError;

pub(super) fn score(state: &State) -> Result<(State, Request), DomainError> {
    let (bidder, bid) = state.require_winning_bid("score")?;
    let trump = state.require_trump("score")?;
    if !state.all_hands_empty() || state.current_trick().is_some() {
        return Err(DomainError::invariant("score requested before the last trick closed"));
    }

    let points = trick_points(&state.played, trump);
    let deltas = resolve(bidder, bid, &points);
    let mut next = state.clone();
    for seat in Seat::ALL {
        next.score[seat as usize] += deltas[seat as usize];
    }
    next.rounds += 1;
    next.gather();

    debug!(
        %bidder,
        %bid,
        ?points,
        ?deltas,
        score = ?next.score,
        "Transition: Score -> Deal"
    );
    let dealer = next.dealer;
    Ok((next, Request::Deal { dealer }))
}

/// Everyone passed: gather the cards without scoring and deal again.
pub(super) fn throw_in(state: &State) -> Result<(State, Request), DomainError> {
    let mut next = state.clone();
    next.gather();
    debug!(dealer = %next.dealer, deals = next.deals, "Transition: ThrowIn -> Deal");
    let dealer = next.dealer;
    Ok((next, Request::Deal { dealer }))
}
