use tracing::debug;

use super::Request;
use crate::domain::{Hand, Seat, State, Suit, Trick, TrickCard};
use crate::errors::domain::DomainError;

/// Legal positions for a seat about to play to `trick`: trump or the lead
/// suit, or anything when void in the lead suit or leading.
pub fn valid_cards(hand: &Hand, trump: Suit, trick: Option<&Trick>) -> Vec<usize> {
    let lead = trick.filter(|t| !t.is_complete()).and_then(Trick::lead_suit);
    match lead {
        Some(lead) if hand.has_suit(lead) => hand
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_suit(trump) || c.is_suit(lead))
            .map(|(i, _)| i)
            .collect(),
        _ => (0..hand.len()).collect(),
    }
}

pub(super) fn play(state: &State, seat: Seat, index: usize) -> Result<(State, Request), DomainError> {
    let trump = state.require_trump("play")?;
    let mut next = state.clone();
    let card = next.require_hand_mut(seat, "play")?.remove(index)?;
    debug!(%seat, %card, "Card played");
    add_to_trick(&mut next, seat, TrickCard::Played(card))?;
    play_placeholders(&mut next, trump)?;
    let request = next_play_request(&next, trump)?;
    Ok((next, request))
}

/// Append to the open trick, or open a new one led by `seat`.
fn add_to_trick(state: &mut State, seat: Seat, card: TrickCard) -> Result<(), DomainError> {
    match state.played.last_mut() {
        Some(trick) if !trick.is_complete() => trick.play(seat, card),
        _ => {
            let mut trick = Trick::new(seat);
            trick.play(seat, card)?;
            state.played.push(trick);
            Ok(())
        }
    }
}

/// Seats due to play with nothing in hand play an empty placeholder. Stops
/// once every hand is empty and the trick is closed, so a trick of
/// placeholders alone is never opened.
fn play_placeholders(state: &mut State, trump: Suit) -> Result<(), DomainError> {
    loop {
        let trick_open = state.current_trick().is_some();
        if state.all_hands_empty() && !trick_open {
            return Ok(());
        }
        let Some(seat) = state.to_play() else {
            return Ok(());
        };
        if !state.require_hand(seat, "placeholder")?.is_empty() {
            return Ok(());
        }
        debug!(%seat, %trump, "Empty hand, playing placeholder");
        add_to_trick(state, seat, TrickCard::Empty)?;
    }
}

fn next_play_request(state: &State, trump: Suit) -> Result<Request, DomainError> {
    if state.all_hands_empty() && state.current_trick().is_none() {
        debug!(tricks = state.played.len(), "Transition: Play -> Score");
        return Ok(Request::Score);
    }
    let seat = state
        .to_play()
        .ok_or_else(|| DomainError::invariant("no seat is due to play"))?;
    let hand = state.require_hand(seat, "next play")?;
    Ok(Request::Play {
        seat,
        options: valid_cards(hand, trump, state.current_trick()),
    })
}
