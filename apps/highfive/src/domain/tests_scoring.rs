use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::scoring::{resolve, trick_points};
use crate::domain::{Bid, Seat, Suit, Trick};

fn trick(leader: Seat, tokens: &[&str]) -> Trick {
    Trick::from_cards(leader, &try_parse_cards(tokens).unwrap()).unwrap()
}

#[test]
fn points_go_to_winner_and_partner() {
    let tricks = vec![
        // East wins with the ace of trump: 1 + 5
        trick(Seat::North, &["5S", "AS", "3S", "4S"]),
        // South wins with the off-five: 5
        trick(Seat::East, &["KH", "fS", "QH", "JH"]),
    ];
    let points = trick_points(&tricks, Suit::Spades);
    assert_eq!(points, [5, 6, 5, 6]);
}

#[test]
fn bid_made_scores_points_or_magnitude() {
    let points = [8, 2, 8, 2];
    assert_eq!(resolve(Seat::North, Bid::Eight, &points), [8, 2, 8, 2]);
    let points = [11, 4, 11, 4];
    assert_eq!(resolve(Seat::South, Bid::Eight, &points), [11, 4, 11, 4]);
}

#[test]
fn bid_set_loses_magnitude() {
    let points = [5, 10, 5, 10];
    assert_eq!(resolve(Seat::North, Bid::Eight, &points), [-8, 10, -8, 10]);
}

#[test]
fn big_bids_score_their_magnitude() {
    let points = [0, 15, 0, 15];
    assert_eq!(resolve(Seat::West, Bid::FifteenThirty, &points), [0, 30, 0, 30]);
    let points = [1, 14, 1, 14];
    assert_eq!(resolve(Seat::East, Bid::FifteenThirty, &points), [1, -30, 1, -30]);
}

#[test]
fn no_tricks_no_points() {
    assert_eq!(trick_points(&[], Suit::Clubs), [0; 4]);
}
