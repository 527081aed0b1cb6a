use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::{offered_bids, winning_bid, Bid, Seat};

proptest! {
    /// Offers always include Pass and never a rank at or below the best bid.
    #[test]
    fn offers_are_monotonic(best in test_gens::contract()) {
        let offers = offered_bids(Some(best));
        prop_assert!(offers.contains(&Bid::Pass.index()));
        for index in offers.into_iter().filter(|&i| i != 0) {
            prop_assert!(Bid::ALL[index] > best);
        }
    }

    /// Making a bid never scores less than its magnitude; missing it costs
    /// exactly the magnitude.
    #[test]
    fn score_bounds(bid in test_gens::contract(), points in 0i32..=15) {
        let score = bid.score(points);
        if points >= bid.points_required() {
            prop_assert!(score >= bid.magnitude());
        } else {
            prop_assert_eq!(score, -bid.magnitude());
        }
    }

    /// Any bid sequence built from offers yields the last raiser as winner.
    #[test]
    fn last_raise_wins(first in test_gens::seat(), picks in proptest::collection::vec(0usize..13, 4)) {
        let mut bids = [None; 4];
        let mut last_raise: Option<(Seat, Bid)> = None;
        for (seat, pick) in first.rotation().zip(picks) {
            let offers = offered_bids(last_raise.map(|(_, b)| b));
            let bid = Bid::ALL[offers[pick % offers.len()]];
            bids[seat as usize] = Some(bid);
            if !bid.is_pass() {
                last_raise = Some((seat, bid));
            }
        }
        prop_assert_eq!(winning_bid(&bids, first), last_raise);
    }
}
