//! Bid ranks, their thresholds, and picking the winning bid.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::PLAYERS;
use super::seat::Seat;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Bid {
    Pass,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    FourteenTwentyEight,
    Fifteen,
    FifteenThirty,
}

impl Bid {
    /// The bid table; a bid request offers indices into it.
    pub const ALL: [Bid; 13] = [
        Bid::Pass,
        Bid::Six,
        Bid::Seven,
        Bid::Eight,
        Bid::Nine,
        Bid::Ten,
        Bid::Eleven,
        Bid::Twelve,
        Bid::Thirteen,
        Bid::Fourteen,
        Bid::FourteenTwentyEight,
        Bid::Fifteen,
        Bid::FifteenThirty,
    ];

    pub fn from_index(index: usize) -> Option<Bid> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Points the bidding partnership has to take.
    pub fn points_required(self) -> i32 {
        match self {
            Bid::Pass => 0,
            Bid::FourteenTwentyEight => 14,
            Bid::Fifteen | Bid::FifteenThirty => 15,
            // Six..Fourteen sit at indices 1..=9
            plain => plain as i32 + 5,
        }
    }

    /// What the bid is worth when made, and lost when it is not.
    pub fn magnitude(self) -> i32 {
        match self {
            Bid::FourteenTwentyEight => 28,
            Bid::FifteenThirty => 30,
            other => other.points_required(),
        }
    }

    /// Score for the bidding partnership given the points it took.
    pub fn score(self, points: i32) -> i32 {
        if self == Bid::Pass {
            return 0;
        }
        if points < self.points_required() {
            -self.magnitude()
        } else {
            points.max(self.magnitude())
        }
    }

    pub fn is_pass(self) -> bool {
        self == Bid::Pass
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bid::Pass => f.write_str("Pass"),
            Bid::FourteenTwentyEight => f.write_str("14/28"),
            Bid::FifteenThirty => f.write_str("15/30"),
            other => write!(f, "{}", other.points_required()),
        }
    }
}

/// Highest non-Pass bid. Seats are visited in rotation from `first`, so on
/// equal ranks the earlier bidder keeps it.
pub fn winning_bid(bids: &[Option<Bid>; PLAYERS], first: Seat) -> Option<(Seat, Bid)> {
    let mut best: Option<(Seat, Bid)> = None;
    for seat in first.rotation() {
        let Some(bid) = bids[seat as usize] else {
            continue;
        };
        if bid.is_pass() {
            continue;
        }
        if best.map_or(true, |(_, b)| bid > b) {
            best = Some((seat, bid));
        }
    }
    best
}

/// Options for the next bidder: Pass plus every rank above `current_best`.
pub fn offered_bids(current_best: Option<Bid>) -> Vec<usize> {
    let floor = current_best.unwrap_or(Bid::Pass);
    Bid::ALL
        .iter()
        .filter(|b| b.is_pass() || **b > floor)
        .map(|b| b.index())
        .collect()
}
