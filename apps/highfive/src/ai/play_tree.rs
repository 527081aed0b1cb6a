//! Decision tree for trick play.
//!
//! Branches test the situation at the table; the leaf reached scores every
//! offered card and the best score is played. Scores are comparable only
//! within one leaf.

use crate::domain::cards_logic::MAX_CARD_POINTS;
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Seat, State, Suit, Trick, Value};

/// The round as seen by the seat about to play.
pub struct Table<'a> {
    seat: Seat,
    trump: Suit,
    hand: &'a [Card],
    offered: &'a [(usize, Card)],
    trick: Option<&'a Trick>,
    played: Vec<Card>,
}

impl<'a> Table<'a> {
    pub fn new(
        state: &'a State,
        seat: Seat,
        trump: Suit,
        hand: &'a [Card],
        offered: &'a [(usize, Card)],
    ) -> Self {
        Self {
            seat,
            trump,
            hand,
            offered,
            trick: state.current_trick().filter(|t| !t.is_empty()),
            played: state
                .played
                .iter()
                .flat_map(|t| t.cards().map(|(_, c)| c))
                .collect(),
        }
    }

    fn is_five(&self, card: Card) -> bool {
        card.is_suit(self.trump) && matches!(card.value, Value::Five | Value::OffFive)
    }

    /// Trump not yet played, excluding this seat's own.
    fn trump_out(&self) -> impl Iterator<Item = Card> + '_ {
        let trump = self.trump;
        Value::ALL
            .into_iter()
            .map(move |v| Card::new(v, trump))
            .filter(move |c| !self.played.contains(c) && !self.hand.contains(c))
    }

    /// Highest trump nobody has played yet, this seat's own included.
    pub fn top_trump_out(&self) -> Option<Card> {
        Value::ALL
            .into_iter()
            .map(|v| Card::new(v, self.trump))
            .filter(|c| !self.played.contains(c))
            .max_by_key(|c| c.trump_value(self.trump))
    }

    fn my_top_trump(&self) -> Option<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|c| c.is_suit(self.trump))
            .max_by_key(|c| c.trump_value(self.trump))
    }

    fn winning(&self) -> Option<(Seat, Card)> {
        self.trick.and_then(|t| t.winner(self.trump))
    }

    fn filled(&self) -> usize {
        self.trick.map_or(0, Trick::len)
    }

    /// True when `card` would take the trick from the current winner.
    fn takes_lead(&self, card: Card) -> bool {
        let lead = self.trick.and_then(Trick::lead_suit);
        match self.winning() {
            Some((_, best)) => card.beats(best, self.trump, lead),
            None => true,
        }
    }
}

/// A yes/no question about the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    Leading,
    /// This seat holds the highest trump still out.
    HoldMasterTrump,
    /// The lead card is not trump.
    OffsuitLead,
    /// Last to play and holding a trump five.
    LastWithFive,
    /// Next seat plays last, a trump five is still out elsewhere and this
    /// seat, holding no five, has trump above it.
    CanCoverFive,
    TrickHasFive,
    /// Partner's card is a trump no outstanding card can beat.
    PartnerPlayedMaster,
    PartnerWinning,
    PartnerToPlay,
    CanTakeLead,
    PointsShowing,
    Last,
}

impl Situation {
    pub fn holds(self, table: &Table<'_>) -> bool {
        let trump = table.trump;
        match self {
            Situation::Leading => table.trick.is_none(),
            Situation::HoldMasterTrump => {
                table.my_top_trump().is_some() && table.my_top_trump() == table.top_trump_out()
            }
            Situation::OffsuitLead => table
                .trick
                .and_then(Trick::lead_suit)
                .is_some_and(|s| s != trump),
            Situation::LastWithFive => {
                table.filled() == PLAYERS - 1 && table.hand.iter().any(|&c| table.is_five(c))
            }
            Situation::CanCoverFive => {
                let five = Card::new(Value::Five, trump).trump_value(trump);
                table.filled() == PLAYERS - 2
                    && table.trump_out().any(|c| table.is_five(c))
                    && !table.hand.iter().any(|&c| table.is_five(c))
                    && table
                        .hand
                        .iter()
                        .any(|c| c.is_suit(trump) && c.trump_value(trump) > five)
            }
            Situation::TrickHasFive => table
                .trick
                .is_some_and(|t| t.cards().any(|(_, c)| table.is_five(c))),
            Situation::PartnerPlayedMaster => {
                let partner = table
                    .trick
                    .and_then(|t| t.get(table.seat.partner()))
                    .and_then(|tc| tc.card());
                partner.is_some_and(|p| {
                    p.is_suit(trump)
                        && table
                            .trump_out()
                            .all(|c| c.trump_value(trump) < p.trump_value(trump))
                })
            }
            Situation::PartnerWinning => table
                .winning()
                .is_some_and(|(seat, _)| seat == table.seat.partner()),
            Situation::PartnerToPlay => table
                .trick
                .is_some_and(|t| !t.has_played(table.seat.partner())),
            Situation::CanTakeLead => table.offered.iter().any(|&(_, c)| table.takes_lead(c)),
            Situation::PointsShowing => table.trick.is_some_and(|t| t.points(trump) > 0),
            Situation::Last => table.filled() == PLAYERS - 1,
        }
    }
}

/// How a leaf scores each card; higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardScore {
    /// Strongest first.
    Value,
    /// Weakest first.
    NegValue,
    /// Fewest points, then strongest.
    NegPoints,
    /// Trump fives first, then weakest.
    Fives,
    /// Weakest trump that still beats a five; everything else scores 0.
    NegValueAboveFive,
    /// Weakest card that takes the trick, else as `NegPoints`.
    WinCheaply,
    /// Strongest card that takes the trick, else as `NegPoints`.
    WinHigh,
}

/// Keeps a secondary score from overturning the primary one.
const SCALE: f64 = 100.0;

fn combine(more: f64, less: f64) -> f64 {
    (more * SCALE + less) / SCALE
}

impl CardScore {
    pub fn score(self, table: &Table<'_>, card: Card) -> f64 {
        let trump = table.trump;
        let value = f64::from(card.trump_value(trump))
            / f64::from(Card::new(Value::Ace, trump).trump_value(trump));
        let neg_value = 1.0 - value;
        let points = f64::from(card.points(trump)) / f64::from(MAX_CARD_POINTS);
        let neg_points = 1.0 - combine(points, neg_value);
        match self {
            CardScore::Value => value,
            CardScore::NegValue => neg_value,
            CardScore::NegPoints => neg_points,
            CardScore::Fives => combine(if table.is_five(card) { 1.0 } else { 0.0 }, neg_value),
            CardScore::NegValueAboveFive => {
                let five = Card::new(Value::Five, trump).trump_value(trump);
                if card.trump_value(trump) > five {
                    neg_value
                } else {
                    0.0
                }
            }
            CardScore::WinCheaply if table.takes_lead(card) => 1.0 + neg_value,
            CardScore::WinHigh if table.takes_lead(card) => 1.0 + value,
            CardScore::WinCheaply | CardScore::WinHigh => neg_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayTree {
    Leaf(CardScore),
    Branch {
        when: Situation,
        then: Box<PlayTree>,
        otherwise: Box<PlayTree>,
    },
}

impl PlayTree {
    pub fn branch(when: Situation, then: PlayTree, otherwise: PlayTree) -> Self {
        PlayTree::Branch {
            when,
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    /// Lead high with the master trump; on an off-suit lead dump a five
    /// when it is safe; otherwise fight for fives, feed a partner who holds
    /// the trick, and win cheaply when it pays.
    pub fn basic() -> Self {
        let leaf = PlayTree::Leaf;
        let branch = PlayTree::branch;

        let leading = branch(
            Situation::HoldMasterTrump,
            leaf(CardScore::Value),
            leaf(CardScore::NegPoints),
        );
        let offsuit = branch(
            Situation::LastWithFive,
            leaf(CardScore::Fives),
            branch(
                Situation::CanCoverFive,
                leaf(CardScore::NegValueAboveFive),
                leaf(CardScore::NegValue),
            ),
        );
        let partner_to_play = branch(
            Situation::HoldMasterTrump,
            leaf(CardScore::Value),
            branch(
                Situation::CanTakeLead,
                leaf(CardScore::WinCheaply),
                leaf(CardScore::NegPoints),
            ),
        );
        let partner_done = branch(
            Situation::PointsShowing,
            branch(
                Situation::CanTakeLead,
                leaf(CardScore::WinHigh),
                leaf(CardScore::NegValue),
            ),
            branch(
                Situation::Last,
                leaf(CardScore::WinCheaply),
                branch(
                    Situation::CanTakeLead,
                    leaf(CardScore::WinHigh),
                    leaf(CardScore::NegValue),
                ),
            ),
        );
        let trump_lead = branch(
            Situation::TrickHasFive,
            leaf(CardScore::Value),
            branch(
                Situation::PartnerPlayedMaster,
                leaf(CardScore::Fives),
                branch(
                    Situation::PartnerWinning,
                    leaf(CardScore::NegValue),
                    branch(Situation::PartnerToPlay, partner_to_play, partner_done),
                ),
            ),
        );

        branch(
            Situation::Leading,
            leading,
            branch(Situation::OffsuitLead, offsuit, trump_lead),
        )
    }

    /// The leaf that applies at this table.
    pub fn leaf(&self, table: &Table<'_>) -> CardScore {
        let mut node = self;
        loop {
            match node {
                PlayTree::Leaf(score) => return *score,
                PlayTree::Branch {
                    when,
                    then,
                    otherwise,
                } => node = if when.holds(table) { &**then } else { &**otherwise },
            }
        }
    }

    /// Every offered card with its score, in offer order.
    pub fn scores(&self, table: &Table<'_>) -> Vec<(usize, f64)> {
        let leaf = self.leaf(table);
        table
            .offered
            .iter()
            .map(|&(i, c)| (i, leaf.score(table, c)))
            .collect()
    }
}

impl Default for PlayTree {
    fn default() -> Self {
        Self::basic()
    }
}
