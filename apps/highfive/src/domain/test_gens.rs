// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{full_deck, Bid, Card, Seat, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

pub fn seat() -> impl Strategy<Value = Seat> {
    (0usize..4).prop_map(Seat::from_index)
}

/// A non-Pass bid.
pub fn contract() -> impl Strategy<Value = Bid> {
    (1usize..13).prop_map(|i| Bid::ALL[i])
}

/// N distinct cards from a full deck, already re-tagged for `trump`.
pub fn unique_cards_for(count: usize, trump: Suit) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards: Vec<Card> = full_deck().into_iter().map(|c| c.as_trump(trump)).collect();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Trump plus four distinct trick cards valid under it.
pub fn complete_trick() -> impl Strategy<Value = (Seat, Suit, Vec<Card>)> {
    (seat(), suit()).prop_flat_map(|(leader, trump)| {
        unique_cards_for(4, trump).prop_map(move |cards| (leader, trump, cards))
    })
}
