//! Builders for hand-made states in transition tests.

use crate::actions::{next_state, Request};
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::{Bid, Card, Deck, Hand, Seat, State, Suit};

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap()
}

pub fn hand(tokens: &[&str]) -> Hand {
    cards(tokens).into()
}

/// Bids where `bidder` holds `bid` and everyone else passed.
pub fn bids_for(bidder: Seat, bid: Bid) -> [Option<Bid>; 4] {
    let mut bids = [Some(Bid::Pass); 4];
    bids[bidder as usize] = Some(bid);
    bids
}

/// A state ready for play: empty deck, trump fixed, `bidder` won with Eight.
pub fn play_state(dealer: Seat, bidder: Seat, trump: Suit, hands: [&[&str]; 4]) -> State {
    let mut state = State::with_deck(dealer, Deck::from_cards(Vec::new()));
    state.bids = bids_for(bidder, Bid::Eight);
    state.trump = Some(trump);
    state.hands = hands.map(|tokens| Some(hand(tokens)));
    state
}

/// Answer a Play request with the card `token` from the requested seat's hand.
pub fn play_token(state: &State, request: &Request, token: &str) -> (State, Request) {
    let seat = request.seat().unwrap();
    let card: Card = token.parse().unwrap();
    let position = state
        .hand(seat)
        .unwrap()
        .iter()
        .position(|c| *c == card)
        .unwrap_or_else(|| panic!("{seat} does not hold {token}"));
    next_state(state, request, &[position]).unwrap()
}
