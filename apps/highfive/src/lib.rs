#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod actions;
pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod game;
pub mod player;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use actions::{next_state, ActionType, Request};
pub use config::MatchConfig;
pub use domain::{Bid, Card, CardSet, Deck, Hand, Seat, State, Suit, Team, Trick, TrickCard, Value};
pub use errors::domain::{DomainError, ValidationKind};
pub use errors::transition::TransitionError;
pub use game::{Game, GameError, MatchSummary};
pub use player::{Player, PlayerError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
