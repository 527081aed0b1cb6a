#![allow(dead_code)]

use highfive::{next_state, Request, State};

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    highfive_test_support::logging::init();
}

/// Deck, hands, tricks and discard pile together.
pub fn assert_conserved(state: &State, context: &str) {
    assert_eq!(state.card_count(), 53, "card count drifted after {context}");
}

/// Apply the request's default input (`options()`) to a request that reads
/// none.
pub fn step_without_input(state: &State, request: &Request) -> (State, Request) {
    assert!(!request.takes_input(), "{request} needs a selection");
    next_state(state, request, &request.options()).expect("input-free transition")
}
