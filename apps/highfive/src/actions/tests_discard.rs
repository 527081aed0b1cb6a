use super::test_fixtures::{bids_for, cards, hand};
use super::tests_trump::dealt_with_south_bidding;
use crate::actions::{next_state, Request};
use crate::domain::rules::{DECK_SIZE, MAX_HAND_SIZE};
use crate::domain::{Bid, Card, Deck, Seat, State, Suit, Value};
use crate::errors::domain::ValidationKind;

/// Answer a request with every option it offers.
fn take_all(state: &State, request: &Request) -> (State, Request) {
    next_state(state, request, &request.options()).unwrap()
}

#[test]
fn discard_round_then_redeal_then_winner_discard() {
    let state = dealt_with_south_bidding();
    let (state, request) = next_state(&state, &Request::ChooseTrump { seat: Seat::South }, &[0]).unwrap();

    let (state, request) = take_all(&state, &request);
    assert_eq!(request.seat(), Some(Seat::North));
    let (state, request) = take_all(&state, &request);
    assert_eq!(
        request,
        Request::Discard {
            seat: Seat::East,
            options: vec![4, 5, 6, 7, 8],
            expect: 5
        }
    );
    let (state, request) = take_all(&state, &request);
    assert_eq!(request, Request::ReDeal { dealer: Seat::North });
    assert_eq!(state.discarded.len(), 17);
    assert!(state.cards_conserved());

    let (state, request) = next_state(&state, &request, &[0]).unwrap();
    assert!(state.deck.is_empty());
    for seat in [Seat::East, Seat::West, Seat::North] {
        let hand = state.hand(seat).unwrap();
        assert_eq!(hand.len(), MAX_HAND_SIZE);
    }
    // East kept four trump and drew the next two cards, the queen and king of hearts
    let east = state.hand(Seat::East).unwrap();
    assert!(east.contains("QH".parse().unwrap()));
    assert!(east.contains("KH".parse().unwrap()));
    // The winner holds nine dealt cards plus the other nine
    let south = state.hand(Seat::South).unwrap();
    assert_eq!(south.len(), 18);
    assert!(south.contains(Card::new(Value::Joker, Suit::Diamonds)));
    let Request::Discard { seat, options, expect } = request.clone() else {
        panic!("expected the winner's discard, got {request}");
    };
    assert_eq!(seat, Seat::South);
    assert_eq!(expect, 12);
    assert_eq!(options.len(), 13);
    assert!(state.cards_conserved());

    let selection: Vec<usize> = options[..expect].to_vec();
    let (state, request) = next_state(&state, &request, &selection).unwrap();
    assert_eq!(state.hand(Seat::South).unwrap().len(), MAX_HAND_SIZE);
    assert_eq!(
        request,
        Request::Play {
            seat: Seat::South,
            options: (0..MAX_HAND_SIZE).collect()
        }
    );
    assert_eq!(state.discarded.len() + 4 * MAX_HAND_SIZE, DECK_SIZE);
}

fn hearts_state(west: &[&str]) -> State {
    let mut state = State::with_deck(Seat::North, Deck::from_cards(Vec::new()));
    state.bids = bids_for(Seat::South, Bid::Nine);
    state.trump = Some(Suit::Hearts);
    state.hands = [
        Some(hand(&["2C"])),
        Some(hand(&["3C"])),
        Some(hand(&["4C"])),
        Some(hand(west)),
    ];
    state
}

#[test]
fn non_winner_must_keep_only_trump() {
    let state = hearts_state(&["2H", "3H", "fH", "7H", "jH", "KH", "AH", "AS"]);
    let request = Request::Discard {
        seat: Seat::West,
        options: vec![1, 3, 5, 7],
        expect: 2,
    };
    let err = next_state(&state, &request, &[1, 3]).unwrap_err();
    assert_eq!(err.source.kind(), Some(ValidationKind::InvalidDiscard));

    let (next, request) = next_state(&state, &request, &[1, 7]).unwrap();
    assert_eq!(next.hand(Seat::West).unwrap().len(), MAX_HAND_SIZE);
    assert_eq!(next.discarded, cards(&["3H", "AS"]).into());
    assert_eq!(request.seat(), Some(Seat::North));
}

#[test]
fn wrong_discard_count_is_rejected() {
    let state = hearts_state(&["2H", "3C", "4C"]);
    let request = Request::Discard {
        seat: Seat::West,
        options: vec![1, 2],
        expect: 2,
    };
    let err = next_state(&state, &request, &[1]).unwrap_err();
    assert_eq!(err.source.kind(), Some(ValidationKind::SelectionCount));
}

fn redeal_state(deck: &[&str]) -> State {
    let mut state = State::with_deck(Seat::North, Deck::from_cards(cards(deck)));
    state.bids = bids_for(Seat::South, Bid::Eight);
    state.trump = Some(Suit::Hearts);
    state.hands = [
        Some(hand(&["2C", "3C", "4C"])),
        Some(hand(&["2H", "3H", "fH", "7H", "jH", "KH", "AH", "QH"])),
        Some(hand(&["5H", "AC", "KC", "QC", "JC", "TC", "9C"])),
        Some(hand(&["4H", "6H", "8H", "9H", "TH", "JH"])),
    ];
    state
}

#[test]
fn redeal_trims_long_trump_and_tops_up_short_hands() {
    let state = redeal_state(&["2S", "3S", "4S", "5S", "6S", "7S", "8S", "9S"]);
    let (next, request) = next_state(&state, &Request::ReDeal { dealer: Seat::North }, &[0]).unwrap();

    let east = next.hand(Seat::East).unwrap();
    assert_eq!(east.len(), MAX_HAND_SIZE);
    assert!(!east.contains("3H".parse().unwrap()));
    assert!(!east.contains("7H".parse().unwrap()));
    let north = next.hand(Seat::North).unwrap();
    assert_eq!(north.len(), MAX_HAND_SIZE);
    assert!(north.contains("7S".parse().unwrap()));
    assert_eq!(next.hand(Seat::West).unwrap().len(), MAX_HAND_SIZE);

    // Winner: seven dealt plus the last two spades
    assert!(next.deck.is_empty());
    assert_eq!(
        request,
        Request::Discard {
            seat: Seat::South,
            options: vec![0, 1, 3, 4, 5, 6, 7, 8],
            expect: 3
        }
    );
    // Hands are sorted: spades first, then the five of hearts
    assert_eq!(next.hand(Seat::South).unwrap()[0], "9S".parse().unwrap());
}

#[test]
fn redeal_with_short_deck_leaves_seat_short() {
    let state = redeal_state(&["2S", "3S", "4S", "5S"]);
    let (next, request) = next_state(&state, &Request::ReDeal { dealer: Seat::North }, &[0]).unwrap();
    assert_eq!(next.hand(Seat::North).unwrap().len(), 4);
    assert_eq!(request.expects(), 1);
    assert_eq!(next.hand(Seat::South).unwrap().len(), 7);
}

#[test]
fn winner_discard_needs_an_empty_deck() {
    let mut state = redeal_state(&[]);
    state.deck = Deck::from_cards(vec![Card::new(Value::Ace, Suit::Spades)]);
    let request = Request::Discard {
        seat: Seat::South,
        options: vec![1, 2, 3, 4, 5, 6],
        expect: 1,
    };
    let err = next_state(&state, &request, &[1]).unwrap_err();
    assert!(err.is_invariant());

    state.deck = Deck::from_cards(Vec::new());
    let (next, request) = next_state(&state, &request, &[1]).unwrap();
    assert_eq!(next.hand(Seat::South).unwrap().len(), MAX_HAND_SIZE);
    assert_eq!(request.seat(), Some(Seat::South));
}
