use tracing::debug;

use super::Request;
use crate::domain::rules::MAX_HAND_SIZE;
use crate::domain::{Seat, State, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Discard request for `seat` under `trump`.
pub(super) fn discard_request(state: &State, seat: Seat, trump: Suit) -> Result<Request, DomainError> {
    let hand = state.require_hand(seat, "discard request")?;
    Ok(Request::Discard {
        seat,
        options: hand.discards(trump),
        expect: hand.num_to_discard(trump),
    })
}

pub(super) fn discard(state: &State, seat: Seat, selection: &[usize]) -> Result<(State, Request), DomainError> {
    let (winner, _) = state.require_winning_bid("discard")?;
    let trump = state.require_trump("discard")?;
    if seat == winner {
        return discard_winner(state, seat, selection);
    }

    let mut next = state.clone();
    let removed = {
        let hand = next.require_hand_mut(seat, "discard")?;
        let removed = hand.remove_positions(selection)?;
        if let Some(kept) = hand.iter().find(|c| !c.is_suit(trump)) {
            return Err(DomainError::validation(
                ValidationKind::InvalidDiscard,
                format!("{seat} must discard every non-trump card but kept {kept}"),
            ));
        }
        removed
    };
    next.discarded.extend(removed);

    let following = seat.next();
    if following == winner {
        debug!(%seat, "Transition: Discard -> ReDeal");
        let dealer = next.dealer;
        return Ok((next, Request::ReDeal { dealer }));
    }
    let request = discard_request(&next, following, trump)?;
    Ok((next, request))
}

/// The bid winner brings the hand back down to the maximum size; then play
/// starts with the winner leading.
fn discard_winner(state: &State, seat: Seat, selection: &[usize]) -> Result<(State, Request), DomainError> {
    if !state.deck.is_empty() {
        return Err(DomainError::invariant(format!(
            "{} cards left in the deck before the winner's discard",
            state.deck.len()
        )));
    }
    let mut next = state.clone();
    let hand = next.require_hand_mut(seat, "winner discard")?;
    let expected = hand.len().saturating_sub(MAX_HAND_SIZE);
    if selection.len() != expected {
        return Err(DomainError::validation(
            ValidationKind::SelectionCount,
            format!("{seat} must discard exactly {expected} cards, got {}", selection.len()),
        ));
    }
    let removed = hand.remove_positions(selection)?;
    let options = (0..hand.len()).collect();
    next.discarded.extend(removed);

    debug!(%seat, "Transition: Discard -> Play");
    Ok((next, Request::Play { seat, options }))
}
