use super::test_fixtures::{hand, play_state, play_token};
use crate::actions::{next_state, valid_cards, Request};
use crate::domain::{Seat, Suit, Trick, TrickCard};
use crate::errors::domain::ValidationKind;

#[test]
fn leader_may_play_anything() {
    let h = hand(&["AH", "2S", "3D"]);
    assert_eq!(valid_cards(&h, Suit::Spades, None), vec![0, 1, 2]);
}

#[test]
fn must_follow_lead_or_trump_when_able() {
    let trick = Trick::from_cards(Seat::North, &["KH".parse().unwrap()]).unwrap();
    let h = hand(&["AH", "2S", "3D", "9H"]);
    assert_eq!(valid_cards(&h, Suit::Spades, Some(&trick)), vec![0, 1, 3]);
    // Void in hearts: anything goes
    let void = hand(&["2S", "3D"]);
    assert_eq!(valid_cards(&void, Suit::Spades, Some(&trick)), vec![0, 1]);
}

#[test]
fn completed_trick_does_not_constrain_the_next_lead() {
    let trick = Trick::from_cards(Seat::North, &super::test_fixtures::cards(&["KH", "2H", "3H", "4H"])).unwrap();
    let h = hand(&["AH", "2D"]);
    assert_eq!(valid_cards(&h, Suit::Spades, Some(&trick)), vec![0, 1]);
}

#[test]
fn full_round_of_two_tricks_reaches_score() {
    let state = play_state(
        Seat::North,
        Seat::South,
        Suit::Spades,
        [&["AH", "2S"], &["KH", "3D"], &["QH", "AS"], &["5D", "4H"]],
    );
    let request = Request::Play {
        seat: Seat::South,
        options: vec![0, 1],
    };

    let (state, request) = play_token(&state, &request, "QH");
    assert_eq!(request, Request::Play { seat: Seat::West, options: vec![1] });
    let (state, request) = play_token(&state, &request, "4H");
    assert_eq!(request, Request::Play { seat: Seat::North, options: vec![0, 1] });
    let (state, request) = play_token(&state, &request, "AH");
    assert_eq!(request, Request::Play { seat: Seat::East, options: vec![0] });
    let (state, request) = play_token(&state, &request, "KH");
    // North took the first trick and leads
    assert_eq!(state.played[0].winner(Suit::Spades).unwrap().0, Seat::North);
    assert_eq!(request, Request::Play { seat: Seat::North, options: vec![0] });

    let (state, request) = play_token(&state, &request, "2S");
    // East is void in spades
    assert_eq!(request, Request::Play { seat: Seat::East, options: vec![0] });
    let (state, request) = play_token(&state, &request, "3D");
    let (state, request) = play_token(&state, &request, "AS");
    let (state, request) = play_token(&state, &request, "5D");
    assert_eq!(request, Request::Score);
    assert_eq!(state.played.len(), 2);
    assert_eq!(state.played[1].winner(Suit::Spades).unwrap().0, Seat::South);
}

#[test]
fn empty_hands_play_placeholders() {
    let state = play_state(
        Seat::North,
        Seat::South,
        Suit::Spades,
        [&["AH"], &[], &["QH", "AS"], &["4H"]],
    );
    let request = Request::Play {
        seat: Seat::South,
        options: vec![0, 1],
    };
    let (state, request) = play_token(&state, &request, "QH");
    let (state, request) = play_token(&state, &request, "4H");
    let (state, request) = play_token(&state, &request, "AH");

    // East filled the first trick; North won it with nothing left, so North
    // and East open the second trick with placeholders
    assert_eq!(state.played.len(), 2);
    assert_eq!(state.played[0].get(Seat::East), Some(TrickCard::Empty));
    assert_eq!(state.played[1].get(Seat::North), Some(TrickCard::Empty));
    assert_eq!(state.played[1].get(Seat::East), Some(TrickCard::Empty));
    assert_eq!(request, Request::Play { seat: Seat::South, options: vec![0] });

    let (state, request) = play_token(&state, &request, "AS");
    assert_eq!(request, Request::Score);
    assert_eq!(state.played[1].get(Seat::West), Some(TrickCard::Empty));
    assert_eq!(state.played[1].winner(Suit::Spades).unwrap().0, Seat::South);
    assert_eq!(state.card_count(), 4);
}

#[test]
fn playing_from_a_missing_hand_is_an_invariant_error() {
    let mut state = play_state(Seat::North, Seat::South, Suit::Spades, [&["AH"], &["KH"], &["QH"], &["JH"]]);
    state.hands[Seat::South as usize] = None;
    let request = Request::Play { seat: Seat::South, options: vec![0] };
    let err = next_state(&state, &request, &[0]).unwrap_err();
    assert!(err.is_invariant());
    assert_eq!(*err.state, state);
}

#[test]
fn playing_twice_to_a_trick_is_an_invariant_error() {
    let state = play_state(Seat::North, Seat::South, Suit::Spades, [&["AH"], &["KH"], &["QH", "2H"], &["JH"]]);
    let request = Request::Play { seat: Seat::South, options: vec![0, 1] };
    let (state, _) = play_token(&state, &request, "QH");
    // Force a second play by South into the open trick
    let again = Request::Play { seat: Seat::South, options: vec![0] };
    let err = next_state(&state, &again, &[0]).unwrap_err();
    assert!(err.is_invariant());
}

#[test]
fn unoffered_card_is_rejected_before_play() {
    let state = play_state(Seat::North, Seat::South, Suit::Spades, [&["AH"], &["KH"], &["QH", "2D"], &["JH"]]);
    let request = Request::Play { seat: Seat::South, options: vec![0] };
    let err = next_state(&state, &request, &[1]).unwrap_err();
    assert_eq!(err.source.kind(), Some(ValidationKind::OptionNotOffered));
}
