//! Runs whole matches in memory and records what happened in each round.

use highfive::domain::scoring::trick_points;
use highfive::{ActionType, Bid, Game, GameError, MatchConfig, Player, Request, Seat, State, Suit};
use serde::Serialize;
use thiserror::Error;

/// One scored round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    pub round_no: u32,
    pub dealer: Seat,
    pub bids: [Option<Bid>; 4],
    pub bidder: Seat,
    pub bid: Bid,
    pub trump: Suit,
    /// Points taken in tricks, per seat (partners share).
    pub points: [i32; 4],
    pub deltas: [i32; 4],
    pub score: [i32; 4],
}

impl RoundRecord {
    pub fn made(&self) -> bool {
        self.deltas[self.bidder.index()] > 0
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub final_score: [i32; 4],
    pub rounds: Vec<RoundRecord>,
    pub deals: u32,
    pub winner: Option<highfive::Team>,
}

impl MatchResult {
    /// Deals that were gathered without being played.
    pub fn throw_ins(&self) -> u32 {
        self.deals.saturating_sub(self.rounds.len() as u32)
    }
}

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("round {0} was scored without a winning bid or trump")]
    IncompleteRound(u32),
}

/// Play one match to completion.
pub fn simulate_match(
    dealer: Seat,
    seed: u64,
    players: [Box<dyn Player>; 4],
    config: MatchConfig,
) -> Result<MatchResult, SimulatorError> {
    let mut game = Game::new(dealer, seed, players, config);
    let mut rounds = Vec::new();

    while !game.over() {
        if game.state().deals >= config.max_deals {
            return Err(GameError::DealLimit(game.state().deals).into());
        }
        let before = (*game.request() == Request::Score).then(|| game.state().clone());
        let action = game.advance()?;
        if let (ActionType::Score, Some(before)) = (action, before) {
            rounds.push(record_round(&before, game.state())?);
        }
    }

    let summary = game.summary();
    Ok(MatchResult {
        final_score: summary.score,
        rounds,
        deals: summary.deals,
        winner: summary.winner,
    })
}

fn record_round(before: &State, after: &State) -> Result<RoundRecord, SimulatorError> {
    let (bidder, bid) = before
        .winning_bid()
        .ok_or(SimulatorError::IncompleteRound(after.rounds))?;
    let trump = before.trump.ok_or(SimulatorError::IncompleteRound(after.rounds))?;
    let deltas = std::array::from_fn(|i| after.score[i] - before.score[i]);
    Ok(RoundRecord {
        round_no: after.rounds,
        dealer: before.dealer,
        bids: before.bids,
        bidder,
        bid,
        trump,
        points: trick_points(&before.played, trump),
        deltas,
        score: after.score,
    })
}
