//! The player contract: anything that answers engine requests.

mod stdio;

use thiserror::Error;

use crate::actions::{ActionType, Request};
use crate::domain::State;

pub use stdio::{parse_selection, StdioPlayer};

/// Errors a player can report instead of a selection.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The player failed internally
    #[error("player internal error: {0}")]
    Internal(String),
    /// The player could not produce a legal selection
    #[error("player invalid move: {0}")]
    InvalidMove(String),
    /// Reading or writing the player's terminal failed
    #[error("player I/O error: {0}")]
    Input(#[from] std::io::Error),
}

/// A seat's decision maker.
///
/// `play` receives the full state and the pending request and returns the
/// chosen options. Only the request's offered options count as valid; the
/// engine rejects anything else.
pub trait Player: Send + Sync {
    fn name(&self) -> &str;

    fn play(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError>;

    /// Notification after every transition. Has no effect on the engine.
    fn update(&self, _state: &State, _completed: ActionType) {}
}
