//! The round state machine.
//!
//! [`next_state`] takes the current state, the pending [`Request`] and the
//! player's selection, and returns the next state with the next request.
//! Transitions never mutate their input: each clones the state and returns
//! the modified copy.

mod bid;
mod deal;
mod discard;
mod play;
mod redeal;
mod score;
mod trump;

#[cfg(test)]
mod test_fixtures;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_discard;
#[cfg(test)]
mod tests_play;
#[cfg(test)]
mod tests_trump;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Seat, State, Suit};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::transition::TransitionError;

pub use play::valid_cards;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Deal,
    Bid,
    ChooseTrump,
    Discard,
    ReDeal,
    Play,
    ThrowIn,
    Score,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionType::Deal => "Deal",
            ActionType::Bid => "Bid",
            ActionType::ChooseTrump => "ChooseTrump",
            ActionType::Discard => "Discard",
            ActionType::ReDeal => "ReDeal",
            ActionType::Play => "Play",
            ActionType::ThrowIn => "ThrowIn",
            ActionType::Score => "Score",
        };
        f.write_str(name)
    }
}

/// The input the state machine is waiting for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    Deal { dealer: Seat },
    /// `options` index into [`crate::domain::Bid::ALL`].
    Bid { seat: Seat, options: Vec<usize> },
    /// Options index into [`Suit::ALL`].
    ChooseTrump { seat: Seat },
    /// `options` are hand positions; exactly `expect` must be chosen.
    Discard {
        seat: Seat,
        options: Vec<usize>,
        expect: usize,
    },
    ReDeal { dealer: Seat },
    /// `options` are the legal hand positions.
    Play { seat: Seat, options: Vec<usize> },
    ThrowIn { dealer: Seat },
    Score,
}

impl Request {
    /// The request a match starts with.
    pub fn initial(dealer: Seat) -> Request {
        Request::Deal { dealer }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            Request::Deal { .. } => ActionType::Deal,
            Request::Bid { .. } => ActionType::Bid,
            Request::ChooseTrump { .. } => ActionType::ChooseTrump,
            Request::Discard { .. } => ActionType::Discard,
            Request::ReDeal { .. } => ActionType::ReDeal,
            Request::Play { .. } => ActionType::Play,
            Request::ThrowIn { .. } => ActionType::ThrowIn,
            Request::Score => ActionType::Score,
        }
    }

    /// The seat whose player answers this request, if any.
    pub fn seat(&self) -> Option<Seat> {
        match self {
            Request::Deal { dealer } | Request::ReDeal { dealer } => Some(*dealer),
            Request::Bid { seat, .. }
            | Request::ChooseTrump { seat }
            | Request::Discard { seat, .. }
            | Request::Play { seat, .. } => Some(*seat),
            Request::ThrowIn { .. } | Request::Score => None,
        }
    }

    pub fn options(&self) -> Vec<usize> {
        match self {
            Request::Bid { options, .. }
            | Request::Discard { options, .. }
            | Request::Play { options, .. } => options.clone(),
            Request::ChooseTrump { .. } => (0..Suit::ALL.len()).collect(),
            Request::Deal { .. }
            | Request::ReDeal { .. }
            | Request::ThrowIn { .. }
            | Request::Score => vec![0],
        }
    }

    pub fn expects(&self) -> usize {
        match self {
            Request::Discard { expect, .. } => *expect,
            _ => 1,
        }
    }

    /// Whether the selection is read by the transition at all.
    pub fn takes_input(&self) -> bool {
        matches!(
            self,
            Request::Bid { .. }
                | Request::ChooseTrump { .. }
                | Request::Discard { .. }
                | Request::Play { .. }
        )
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action_type())?;
        if let Some(seat) = self.seat() {
            write!(f, "({seat})")?;
        }
        if self.takes_input() {
            write!(f, " options {:?}", self.options())?;
            if self.expects() != 1 {
                write!(f, " expect {}", self.expects())?;
            }
        }
        Ok(())
    }
}

/// Check a selection against the request: right count, no repeats, and only
/// offered options.
pub fn validate_selection(request: &Request, selection: &[usize]) -> Result<(), DomainError> {
    let expect = request.expects();
    if selection.len() != expect {
        return Err(DomainError::validation(
            ValidationKind::SelectionCount,
            format!("expected {expect} selections, got {}", selection.len()),
        ));
    }
    let unique: BTreeSet<usize> = selection.iter().copied().collect();
    if unique.len() != selection.len() {
        return Err(DomainError::validation(
            ValidationKind::DuplicateSelection,
            format!("selection {selection:?} repeats an option"),
        ));
    }
    let options = request.options();
    if let Some(bad) = selection.iter().find(|s| !options.contains(s)) {
        return Err(DomainError::validation(
            ValidationKind::OptionNotOffered,
            format!("option {bad} is not among {options:?}"),
        ));
    }
    Ok(())
}

/// Single-selection requests: validate and return the chosen option.
fn single(request: &Request, selection: &[usize]) -> Result<usize, DomainError> {
    validate_selection(request, selection)?;
    selection.first().copied().ok_or_else(|| {
        DomainError::validation(ValidationKind::SelectionCount, "empty selection")
    })
}

/// Apply `selection` to `request` and compute the next state and request.
pub fn next_state(
    state: &State,
    request: &Request,
    selection: &[usize],
) -> Result<(State, Request), TransitionError> {
    debug!(
        action = %request.action_type(),
        seat = ?request.seat(),
        ?selection,
        "Applying transition"
    );

    let result = match request {
        Request::Deal { .. } => deal::deal(state),
        Request::Bid { seat, .. } => single(request, selection).and_then(|i| bid::bid(state, *seat, i)),
        Request::ChooseTrump { seat } => {
            single(request, selection).and_then(|i| trump::choose_trump(state, *seat, i))
        }
        Request::Discard { seat, .. } => validate_selection(request, selection)
            .and_then(|()| discard::discard(state, *seat, selection)),
        Request::ReDeal { .. } => redeal::redeal(state),
        Request::Play { seat, .. } => single(request, selection).and_then(|i| play::play(state, *seat, i)),
        Request::ThrowIn { .. } => score::throw_in(state),
        Request::Score => score::score(state),
    };

    result.map_err(|source| TransitionError {
        request: request.clone(),
        selection: selection.to_vec(),
        state: Box::new(state.clone()),
        source,
    })
}
