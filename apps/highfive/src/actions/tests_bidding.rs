use crate::actions::{next_state, Request};
use crate::domain::{Bid, Deck, Seat, State};

use super::bid::next_bid_request;

fn dealt() -> (State, Request) {
    let state = State::with_deck(Seat::West, Deck::new());
    next_state(&state, &Request::initial(Seat::West), &[0]).unwrap()
}

#[test]
fn bidding_runs_left_of_dealer_and_raises_only() {
    let (state, request) = dealt();
    assert_eq!(state.dealer, Seat::North);
    assert_eq!(request.seat(), Some(Seat::East));

    let (state, request) = next_state(&state, &request, &[Bid::Pass.index()]).unwrap();
    assert_eq!(
        request,
        Request::Bid {
            seat: Seat::South,
            options: (0..13).collect()
        }
    );
    let (state, request) = next_state(&state, &request, &[Bid::Eight.index()]).unwrap();
    let mut higher: Vec<usize> = vec![0];
    higher.extend(4..13);
    assert_eq!(
        request,
        Request::Bid {
            seat: Seat::West,
            options: higher.clone()
        }
    );
    let (state, request) = next_state(&state, &request, &[0]).unwrap();
    assert_eq!(
        request,
        Request::Bid {
            seat: Seat::North,
            options: higher
        }
    );
    let (state, request) = next_state(&state, &request, &[0]).unwrap();
    assert_eq!(request, Request::ChooseTrump { seat: Seat::South });
    assert_eq!(state.winning_bid(), Some((Seat::South, Bid::Eight)));
}

#[test]
fn rank_at_or_below_best_is_not_offered() {
    let (state, request) = dealt();
    let (state, request) = next_state(&state, &request, &[Bid::Ten.index()]).unwrap();
    let err = next_state(&state, &request, &[Bid::Nine.index()]).unwrap_err();
    assert!(!err.is_invariant());
    let err = next_state(&state, &request, &[Bid::Ten.index()]).unwrap_err();
    assert!(!err.is_invariant());
}

#[test]
fn all_pass_throws_in_and_passes_the_deal() {
    let (mut state, mut request) = dealt();
    for _ in 0..4 {
        (state, request) = next_state(&state, &request, &[0]).unwrap();
    }
    assert_eq!(request, Request::ThrowIn { dealer: Seat::North });

    let (state, request) = next_state(&state, &request, &[0]).unwrap();
    assert_eq!(state.deals, 1);
    assert_eq!(state.rounds, 0);
    assert_eq!(state.score, [0; 4]);
    assert!(state.cards_conserved());
    assert_eq!(request, Request::Deal { dealer: Seat::North });

    let (state, request) = next_state(&state, &request, &[0]).unwrap();
    assert_eq!(state.dealer, Seat::East);
    assert_eq!(request.seat(), Some(Seat::South));
}

#[test]
fn next_bid_without_any_bid_is_an_invariant_error() {
    let (state, _) = dealt();
    assert!(next_bid_request(&state).unwrap_err().is_invariant());
}
