//! Helpers shared by the integration tests: logging setup, stacked decks
//! and scripted players.

pub mod fixtures;
pub mod logging;
pub mod players;

pub use fixtures::{stacked_deck, tokens};
pub use players::ScriptedPlayer;
