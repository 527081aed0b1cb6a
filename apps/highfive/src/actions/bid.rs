use tracing::debug;

use super::Request;
use crate::domain::{offered_bids, Bid, Seat, State};
use crate::errors::domain::{DomainError, ValidationKind};

pub(super) fn bid(state: &State, seat: Seat, index: usize) -> Result<(State, Request), DomainError> {
    let bid = Bid::from_index(index).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::IndexOutOfRange,
            format!("bid index {index} is outside the bid table"),
        )
    })?;
    let mut next = state.clone();
    next.bids[seat as usize] = Some(bid);
    debug!(%seat, %bid, "Bid recorded");

    if next.bids.iter().all(Option::is_some) {
        let request = match next.winning_bid() {
            Some((winner, best)) => {
                debug!(%winner, bid = %best, "Transition: Bid -> ChooseTrump");
                Request::ChooseTrump { seat: winner }
            }
            None => {
                debug!(dealer = %next.dealer, "All seats passed, Transition: Bid -> ThrowIn");
                Request::ThrowIn { dealer: next.dealer }
            }
        };
        return Ok((next, request));
    }

    let request = next_bid_request(&next)?;
    Ok((next, request))
}

/// The next seat without a bid, offered Pass and every higher rank.
pub(super) fn next_bid_request(state: &State) -> Result<Request, DomainError> {
    if state.bids.iter().all(Option::is_none) {
        return Err(DomainError::invariant("next bid requested before any bid"));
    }
    let seat = state
        .dealer
        .next()
        .rotation()
        .find(|s| state.bids[*s as usize].is_none())
        .ok_or_else(|| DomainError::invariant("every seat has already bid"))?;
    Ok(Request::Bid {
        seat,
        options: offered_bids(state.best_bid()),
    })
}
