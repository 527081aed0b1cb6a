//! Domain layer: pure game types and rules.

pub mod bidding;
pub mod card_set;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod hand;
pub mod rules;
pub mod scoring;
pub mod seat;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{offered_bids, winning_bid, Bid};
pub use card_set::CardSet;
pub use cards_logic::hand_has_suit;
pub use cards_parsing::{parse_hand, try_parse_cards};
pub use cards_types::{Card, Suit, Value};
pub use dealing::{full_deck, Deck};
pub use hand::Hand;
pub use rules::{MAX_HAND_SIZE, PLAYERS};
pub use seat::{Seat, Team};
pub use seed_derivation::{derive_dealing_seed, derive_player_seed};
pub use state::{CardLocation, State};
pub use tricks::{Trick, TrickCard};
