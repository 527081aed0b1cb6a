//! Card game logic: trump-aware comparison, point values, trump re-tagging

use super::cards_types::{Card, Suit, Value};

/// Highest point value a single card can carry.
pub const MAX_CARD_POINTS: i32 = 5;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.is_suit(suit))
}

impl Card {
    /// Whether `self` beats `other` in a trick with the given trump and lead.
    ///
    /// Cards of the same suit compare by value. Otherwise a trump card wins,
    /// and a lead-suit card wins against anything that is not trump.
    pub fn beats(self, other: Card, trump: Suit, lead: Option<Suit>) -> bool {
        if self.suit == other.suit {
            return self.value > other.value;
        }
        if self.is_suit(trump) {
            return true;
        }
        self.suit.is_some() && self.suit == lead && !other.is_suit(trump)
    }

    pub fn points(self, trump: Suit) -> i32 {
        if !self.is_suit(trump) {
            return 0;
        }
        match self.value {
            Value::Ace | Value::Jack | Value::Joker | Value::Ten | Value::Deuce => 1,
            Value::Five | Value::OffFive => MAX_CARD_POINTS,
            _ => 0,
        }
    }

    /// Strength used for ordering only: every trump ranks above every
    /// non-trump card.
    pub fn trump_value(self, trump: Suit) -> u16 {
        let base = self.value as u16 + 1;
        if self.is_suit(trump) {
            base * 100
        } else {
            base
        }
    }

    /// The identity this card takes once `trump` is fixed. The Joker joins
    /// the trump suit and the same-colour five becomes the trump OffFive.
    /// Cards already converted are returned unchanged.
    pub fn as_trump(self, trump: Suit) -> Card {
        match self.value {
            Value::Joker => Card::new(Value::Joker, trump),
            Value::Five if self.is_suit(trump.same_color()) => Card::new(Value::OffFive, trump),
            _ => self,
        }
    }
}
