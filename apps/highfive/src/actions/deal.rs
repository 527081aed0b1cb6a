use tracing::debug;

use super::Request;
use crate::domain::rules::{CARDS_PER_PACKET, PACKETS_PER_HAND};
use crate::domain::{Bid, Hand, State};
use crate::errors::domain::DomainError;

/// Pass the deal on and deal three packets of three to every seat, starting
/// left of the new dealer.
pub(super) fn deal(state: &State) -> Result<(State, Request), DomainError> {
    let mut next = state.clone();
    next.reset_round();
    next.dealer = next.dealer.next();

    for _ in 0..PACKETS_PER_HAND {
        for seat in next.dealer.next().rotation() {
            let packet = next.deck.deal(CARDS_PER_PACKET)?;
            next.hands[seat as usize]
                .get_or_insert_with(Hand::new)
                .add(packet);
        }
    }

    debug!(dealer = %next.dealer, deck = next.deck.len(), "Transition: Deal -> Bid");
    let first = next.dealer.next();
    Ok((
        next,
        Request::Bid {
            seat: first,
            options: (0..Bid::ALL.len()).collect(),
        },
    ))
}
