use tracing::debug;

use super::discard::discard_request;
use super::Request;
use crate::domain::{Seat, State, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub(super) fn choose_trump(state: &State, seat: Seat, index: usize) -> Result<(State, Request), DomainError> {
    let trump = *Suit::ALL.get(index).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::IndexOutOfRange,
            format!("suit index {index} is outside 0..{}", Suit::ALL.len()),
        )
    })?;
    let (winner, _) = state.require_winning_bid("choose trump")?;
    if seat != winner {
        return Err(DomainError::invariant(format!(
            "{seat} chose trump but {winner} won the bid"
        )));
    }

    let mut next = state.clone();
    next.trump = Some(trump);
    retag_for_trump(&mut next, trump)?;

    debug!(%winner, %trump, "Transition: ChooseTrump -> Discard");
    let request = discard_request(&next, winner.next(), trump)?;
    Ok((next, request))
}

/// Re-tag the Joker and the same-colour five wherever they sit. Each card is
/// found by predicate and replaced by position; converted cards no longer
/// match, so this stops once nothing is left to convert.
fn retag_for_trump(state: &mut State, trump: Suit) -> Result<(), DomainError> {
    while let Some((location, card)) = state.locate(|c| c.as_trump(trump) != *c) {
        let converted = card.as_trump(trump);
        debug!(from = %card, to = %converted, ?location, "Re-tagging for trump");
        state.replace_card(location, converted)?;
    }
    Ok(())
}
