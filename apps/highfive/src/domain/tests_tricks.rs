use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::{Card, Seat, Suit, Trick, TrickCard};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap()
}

#[test]
fn trump_takes_the_trick() {
    let trick = Trick::from_cards(Seat::North, &cards(&["7D", "9D", "TC", "3H"])).unwrap();
    let (seat, card) = trick.winner(Suit::Clubs).unwrap();
    assert_eq!(seat, Seat::South);
    assert_eq!(card, "TC".parse().unwrap());
    assert_eq!(trick.points(Suit::Clubs), 1);
}

#[test]
fn highest_lead_card_wins_without_trump() {
    let trick = Trick::from_cards(Seat::East, &cards(&["7S", "KS", "AH", "2S"])).unwrap();
    assert_eq!(trick.lead_suit(), Some(Suit::Spades));
    assert_eq!(trick.winner(Suit::Diamonds).unwrap().0, Seat::South);
}

#[test]
fn off_five_and_joker_rank_inside_trump() {
    let trick = Trick::from_cards(Seat::West, &cards(&["fD", "jD", "TD", "5D"])).unwrap();
    // West fD, North jD, East TD, South 5D
    assert_eq!(trick.winner(Suit::Diamonds).unwrap().0, Seat::North);
    assert_eq!(trick.points(Suit::Diamonds), 12);
}

#[test]
fn next_seat_follows_rotation_then_winner() {
    let mut trick = Trick::new(Seat::West);
    assert_eq!(trick.next_seat(Suit::Hearts), Some(Seat::West));
    trick
        .play(Seat::West, TrickCard::Played("2H".parse().unwrap()))
        .unwrap();
    assert_eq!(trick.next_seat(Suit::Hearts), Some(Seat::North));
    for (seat, token) in [(Seat::North, "3H"), (Seat::East, "AH"), (Seat::South, "4H")] {
        trick
            .play(seat, TrickCard::Played(token.parse().unwrap()))
            .unwrap();
    }
    assert!(trick.is_complete());
    assert_eq!(trick.next_seat(Suit::Hearts), Some(Seat::East));
}

#[test]
fn placeholder_lead_takes_suit_from_first_real_card() {
    let mut trick = Trick::new(Seat::North);
    trick.play(Seat::North, TrickCard::Empty).unwrap();
    for (seat, token) in [(Seat::East, "9S"), (Seat::South, "KS"), (Seat::West, "AH")] {
        trick
            .play(seat, TrickCard::Played(token.parse().unwrap()))
            .unwrap();
    }
    assert_eq!(trick.lead_suit(), Some(Suit::Spades));
    assert_eq!(trick.winner(Suit::Clubs).unwrap().0, Seat::South);
    assert_eq!(trick.cards().count(), 3);
    assert_eq!(trick.len(), 4);
}

#[test]
fn all_placeholders_have_no_winner() {
    let mut trick = Trick::new(Seat::North);
    for seat in Seat::North.rotation() {
        trick.play(seat, TrickCard::Empty).unwrap();
    }
    assert_eq!(trick.winner(Suit::Clubs), None);
    assert_eq!(trick.next_seat(Suit::Clubs), None);
}

#[test]
fn replaying_or_playing_out_of_turn_is_an_invariant_error() {
    let mut trick = Trick::new(Seat::North);
    trick.play(Seat::North, TrickCard::Empty).unwrap();
    let err = trick.play(Seat::North, TrickCard::Empty).unwrap_err();
    assert!(err.is_invariant());
    let err = trick.play(Seat::South, TrickCard::Empty).unwrap_err();
    assert!(err.is_invariant());
    assert_eq!(trick.len(), 1);
}

#[test]
fn display_lists_plays_in_order() {
    let mut trick = Trick::from_cards(Seat::South, &cards(&["AS", "2S"])).unwrap();
    trick.play(Seat::North, TrickCard::Empty).unwrap();
    assert_eq!(trick.to_string(), "[South: AS, West: 2S, North: --]");
}
