//! Heuristic: a baseline that bids from trump patterns and plays from a
//! decision tree.
//!
//! Bidding:
//! - Each suit's would-be trump cards are matched against a [`BidTable`];
//!   the first matching rule gives a `(min, max)` bid range.
//! - The suit with the highest `max` decides. Without an eight-level suit
//!   the player may still open at six when every suit is covered.
//! - It bids the lowest rank in its range that beats the current best bid.
//!
//! Play follows a [`PlayTree`]. The inconsistent and noisy variants
//! depart from the tree's choice at random, which makes them weaker and
//! less predictable.

use std::sync::Mutex;

use rand::prelude::*;
use tracing::warn;

use super::play_tree::{PlayTree, Table};
use super::{first, offered_cards, preferred_discards, seat_hand};
use crate::actions::Request;
use crate::domain::{Bid, Card, CardSet, State, Suit, Value};
use crate::player::{Player, PlayerError};

/// At least `count` cards carrying one of `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pattern {
    count: usize,
    values: Vec<Value>,
}

impl Pattern {
    fn matches(&self, cards: &[Card]) -> bool {
        cards.iter().filter(|c| self.values.contains(&c.value)).count() >= self.count
    }
}

/// One row of the bid table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidRule {
    patterns: Vec<Pattern>,
    min_cards: usize,
    pub min: Bid,
    pub max: Bid,
}

impl BidRule {
    pub fn new(min: Bid, max: Bid) -> Self {
        Self {
            patterns: Vec::new(),
            min_cards: 0,
            min,
            max,
        }
    }

    /// Require `count` cards among `values`, written in card notation
    /// (`"AKQJj2"`).
    pub fn needs(mut self, count: usize, values: &str) -> Self {
        self.patterns.push(Pattern {
            count,
            values: values.chars().filter_map(Value::from_char).collect(),
        });
        self
    }

    /// Require at least `n` trump cards in all.
    pub fn at_least(mut self, n: usize) -> Self {
        self.min_cards = n;
        self
    }

    pub fn matches(&self, trump_cards: &[Card]) -> bool {
        trump_cards.len() >= self.min_cards && self.patterns.iter().all(|p| p.matches(trump_cards))
    }
}

/// Ordered rules; the first that matches wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidTable {
    rules: Vec<BidRule>,
}

impl BidTable {
    pub fn new(rules: Vec<BidRule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            BidRule::new(Bid::FifteenThirty, Bid::FifteenThirty).needs(5, "AKQJj2"),
            BidRule::new(Bid::FourteenTwentyEight, Bid::FifteenThirty).needs(4, "AKQ2"),
            BidRule::new(Bid::FourteenTwentyEight, Bid::FourteenTwentyEight).needs(3, "AKQ"),
            BidRule::new(Bid::Ten, Bid::FourteenTwentyEight)
                .needs(2, "AK")
                .needs(2, "JjT"),
            BidRule::new(Bid::Nine, Bid::Ten).needs(2, "AK"),
            BidRule::new(Bid::Eight, Bid::Ten).needs(1, "A").needs(2, "KQJj"),
            BidRule::new(Bid::Eight, Bid::Nine).needs(1, "A").needs(1, "KQJjT"),
            BidRule::new(Bid::Eight, Bid::Eight).needs(1, "A"),
            BidRule::new(Bid::Eight, Bid::Eight)
                .needs(1, "AKQJ")
                .needs(1, "5f")
                .at_least(5),
        ])
    }

    pub fn rules(&self) -> &[BidRule] {
        &self.rules
    }

    /// Bid range for the trump cards of one suit; `(Pass, Pass)` when no
    /// rule matches.
    pub fn range(&self, trump_cards: &[Card]) -> (Bid, Bid) {
        self.rules
            .iter()
            .find(|r| r.matches(trump_cards))
            .map_or((Bid::Pass, Bid::Pass), |r| (r.min, r.max))
    }
}

impl Default for BidTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// How faithfully a [`Heuristic`] follows its play tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayStyle {
    /// Always the best-scored card.
    Steady,
    /// Starting from the best card, step one place down the ranking with
    /// probability `rate`, repeatedly.
    Inconsistent(f64),
    /// Jitter every score by up to `rate` either way before ranking.
    Noisy(f64),
}

impl PlayStyle {
    /// Rates outside `[0, 0.99)` fall back to steady play.
    pub fn inconsistent(rate: f64) -> Self {
        if (0.0..0.99).contains(&rate) {
            PlayStyle::Inconsistent(rate)
        } else {
            warn!(rate, "Inconsistency rate out of range; playing steadily");
            PlayStyle::Steady
        }
    }

    /// Rates outside `[0.01, 1]` fall back to steady play.
    pub fn noisy(rate: f64) -> Self {
        if (0.01..=1.0).contains(&rate) {
            PlayStyle::Noisy(rate)
        } else {
            warn!(rate, "Noise rate out of range; playing steadily");
            PlayStyle::Steady
        }
    }
}

pub struct Heuristic {
    name: &'static str,
    table: BidTable,
    tree: PlayTree,
    style: PlayStyle,
    /// Drawn from only by the inconsistent and noisy styles.
    rng: Mutex<StdRng>,
}

impl Heuristic {
    pub const NAME: &'static str = "heuristic";
    pub const INCONSISTENT_NAME: &'static str = "inconsistent";
    pub const NOISY_NAME: &'static str = "noisy";
    pub const VERSION: &'static str = "1.1.0";
    pub const STYLE_RATE: f64 = 0.2;

    pub fn new(seed: Option<u64>) -> Self {
        Self::with_strategy(Self::NAME, BidTable::standard(), PlayTree::basic(), PlayStyle::Steady, seed)
    }

    pub fn inconsistent(seed: Option<u64>) -> Self {
        Self::with_strategy(
            Self::INCONSISTENT_NAME,
            BidTable::standard(),
            PlayTree::basic(),
            PlayStyle::inconsistent(Self::STYLE_RATE),
            seed,
        )
    }

    pub fn noisy(seed: Option<u64>) -> Self {
        Self::with_strategy(
            Self::NOISY_NAME,
            BidTable::standard(),
            PlayTree::basic(),
            PlayStyle::noisy(Self::STYLE_RATE),
            seed,
        )
    }

    /// `None` seeds from the OS.
    pub fn with_strategy(
        name: &'static str,
        table: BidTable,
        tree: PlayTree,
        style: PlayStyle,
        seed: Option<u64>,
    ) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            name,
            table,
            tree,
            style,
            rng: Mutex::new(rng),
        }
    }

    fn trump_cards(hand: &CardSet, suit: Suit) -> CardSet {
        hand.as_trump(suit).trump_cards(suit)
    }

    /// Best suit to call trump: highest range, then length, then points.
    /// Earlier suits win ties.
    fn best_suit(&self, hand: &CardSet) -> (Suit, Bid, Bid) {
        let mut best = (Suit::Diamonds, (Bid::Pass, Bid::Pass, 0, 0));
        for suit in Suit::ALL {
            let cards = Self::trump_cards(hand, suit);
            let (min, max) = self.table.range(&cards);
            let key = (max, min, cards.len(), cards.points(suit));
            if key > best.1 {
                best = (suit, key);
            }
        }
        let (suit, (max, min, _, _)) = best;
        (suit, min, max)
    }

    /// Every suit is either held high (jack or better), covered by a five
    /// of its colour, or would hold three trump with the Joker.
    fn covers_six(hand: &CardSet) -> bool {
        Suit::ALL.into_iter().all(|suit| {
            let has_five = hand.contains(Card::new(Value::Five, suit))
                || hand.contains(Card::new(Value::Five, suit.same_color()));
            let has_high = hand.iter().any(|c| c.is_suit(suit) && c.value > Value::Joker);
            let joker_backed = hand.contains(Card::JOKER) && Self::trump_cards(hand, suit).len() > 2;
            has_five || has_high || joker_backed
        })
    }

    fn choose_bid(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        let (_, hand) = seat_hand(state, request)?;
        let (_, min, max) = self.best_suit(hand);
        let current = state.best_bid().unwrap_or(Bid::Pass);

        let choice = if max < Bid::Eight && current == Bid::Pass && Self::covers_six(hand) {
            Bid::Six
        } else {
            Bid::ALL
                .into_iter()
                .find(|&b| b >= min && b <= max && b > current)
                .unwrap_or(Bid::Pass)
        };
        let options = request.options();
        if options.contains(&choice.index()) {
            Ok(vec![choice.index()])
        } else {
            Ok(vec![Bid::Pass.index()])
        }
    }

    fn choose_trump(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        let (_, hand) = seat_hand(state, request)?;
        let (suit, _, _) = self.best_suit(hand);
        let index = Suit::ALL
            .iter()
            .position(|&s| s == suit)
            .ok_or_else(|| PlayerError::Internal(format!("{suit} is not a suit")))?;
        Ok(vec![index])
    }

    fn choose_play(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        let trump = state
            .trump
            .ok_or_else(|| PlayerError::Internal("playing before trump is chosen".into()))?;
        let (seat, hand) = seat_hand(state, request)?;
        let offered = offered_cards(hand, request)?;
        let table = Table::new(state, seat, trump, hand, &offered);
        let mut ranked = self.tree.scores(&table);
        if ranked.is_empty() {
            return Err(PlayerError::InvalidMove(format!("{request} offers nothing")));
        }

        let mut step = 0;
        if !matches!(self.style, PlayStyle::Steady) {
            let mut rng = self
                .rng
                .lock()
                .map_err(|e| PlayerError::Internal(format!("RNG lock poisoned: {e}")))?;
            match self.style {
                PlayStyle::Noisy(rate) => {
                    for (_, score) in &mut ranked {
                        *score += rng.random_range(-rate..=rate);
                    }
                }
                PlayStyle::Inconsistent(rate) => {
                    while rng.random::<f64>() < rate {
                        step += 1;
                    }
                }
                PlayStyle::Steady => {}
            }
        }

        // Stable: equal scores keep offer order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(vec![ranked[step % ranked.len()].0])
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Player for Heuristic {
    fn name(&self) -> &str {
        self.name
    }

    fn play(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        match request {
            Request::Bid { .. } => self.choose_bid(state, request),
            Request::ChooseTrump { .. } => self.choose_trump(state, request),
            Request::Discard { .. } => preferred_discards(state, request),
            Request::Play { .. } => self.choose_play(state, request),
            Request::Deal { .. } | Request::ReDeal { .. } | Request::ThrowIn { .. } | Request::Score => {
                first(request)
            }
        }
    }
}
