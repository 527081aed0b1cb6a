//! RNG seed derivation for deterministic matches.
//!
//! One seed per match; everything random inside the match derives from it.

/// Derive the shuffle seed for the `deal_no`-th deal of a match.
pub fn derive_dealing_seed(match_seed: u64, deal_no: u32) -> u64 {
    match_seed
        .wrapping_add((deal_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive a seed for the player sitting at `seat_index`.
pub fn derive_player_seed(match_seed: u64, seat_index: usize) -> u64 {
    match_seed
        .wrapping_add((seat_index as u64).wrapping_mul(100))
        .wrapping_add(1)
}
