use super::test_fixtures::bids_for;
use super::trump::choose_trump;
use crate::actions::{next_state, Request};
use crate::domain::{Bid, Card, Deck, Seat, State, Suit, Value};

/// Standard-order deck dealt by North, with South holding the bid.
pub(super) fn dealt_with_south_bidding() -> State {
    let state = State::with_deck(Seat::West, Deck::new());
    let (mut state, _) = next_state(&state, &Request::initial(Seat::West), &[0]).unwrap();
    state.bids = bids_for(Seat::South, Bid::Eight);
    state
}

fn all_cards(state: &State) -> Vec<Card> {
    let mut cards: Vec<Card> = state.deck.cards().to_vec();
    for hand in state.hands.iter().flatten() {
        cards.extend(hand.iter().copied());
    }
    cards
}

#[test]
fn trump_retags_joker_in_deck_and_five_in_hand() {
    let state = dealt_with_south_bidding();
    let request = Request::ChooseTrump { seat: Seat::South };
    let (next, request) = next_state(&state, &request, &[0]).unwrap();

    assert_eq!(next.trump, Some(Suit::Diamonds));
    let south = next.hand(Seat::South).unwrap();
    assert_eq!(south[8], Card::new(Value::OffFive, Suit::Diamonds));
    assert!(next.deck.cards().contains(&Card::new(Value::Joker, Suit::Diamonds)));
    let cards = all_cards(&next);
    assert!(!cards.contains(&Card::JOKER));
    assert!(!cards.contains(&Card::new(Value::Five, Suit::Hearts)));
    assert!(cards.contains(&Card::new(Value::Five, Suit::Diamonds)));

    // West sits after the winner and holds six non-trump cards
    assert_eq!(
        request,
        Request::Discard {
            seat: Seat::West,
            options: vec![3, 4, 5, 6, 7, 8],
            expect: 6
        }
    );
}

#[test]
fn choosing_trump_twice_converts_once() {
    let state = dealt_with_south_bidding();
    let (once, _) = choose_trump(&state, Seat::South, 0).unwrap();
    let (twice, _) = choose_trump(&once, Seat::South, 0).unwrap();
    assert_eq!(once, twice);
    let off_fives = all_cards(&twice)
        .into_iter()
        .filter(|c| c.value == Value::OffFive)
        .count();
    assert_eq!(off_fives, 1);
}

#[test]
fn only_the_bid_winner_chooses() {
    let state = dealt_with_south_bidding();
    let err = choose_trump(&state, Seat::East, 1).unwrap_err();
    assert!(err.is_invariant());
}

#[test]
fn trump_without_a_winning_bid_is_an_invariant_error() {
    let mut state = dealt_with_south_bidding();
    state.bids = [Some(Bid::Pass); 4];
    let request = Request::ChooseTrump { seat: Seat::South };
    assert!(next_state(&state, &request, &[2]).unwrap_err().is_invariant());
}
