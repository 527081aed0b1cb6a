//! Fixed rule constants.

pub const PLAYERS: usize = 4;

/// Cards a hand holds once discards and the redeal are done.
pub const MAX_HAND_SIZE: usize = 6;

pub const CARDS_PER_PACKET: usize = 3;
pub const PACKETS_PER_HAND: usize = 3;

/// 52 suited cards plus the Joker.
pub const DECK_SIZE: usize = 53;

/// Cards each seat holds straight after the deal.
pub const fn dealt_hand_size() -> usize {
    CARDS_PER_PACKET * PACKETS_PER_HAND
}
