//! Round scoring: trick points per seat and bid resolution.

use super::bidding::Bid;
use super::cards_types::Suit;
use super::rules::PLAYERS;
use super::seat::Seat;
use super::tricks::Trick;

/// Points taken per seat. Each trick's points are credited to its winner
/// and to the winner's partner.
pub fn trick_points(tricks: &[Trick], trump: Suit) -> [i32; PLAYERS] {
    let mut points = [0; PLAYERS];
    for trick in tricks {
        if let Some((winner, _)) = trick.winner(trump) {
            let p = trick.points(trump);
            points[winner as usize] += p;
            points[winner.partner() as usize] += p;
        }
    }
    points
}

/// Score change per seat: the bidder's partnership scores the bid against
/// its points, the other partnership keeps what it took.
pub fn resolve(bidder: Seat, bid: Bid, points: &[i32; PLAYERS]) -> [i32; PLAYERS] {
    let mut deltas = [0; PLAYERS];
    for seat in Seat::ALL {
        deltas[seat as usize] = if seat.same_team(bidder) {
            bid.score(points[seat as usize])
        } else {
            points[seat as usize]
        };
    }
    deltas
}
