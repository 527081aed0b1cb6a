//! Match driver: asks players for selections and feeds them through
//! [`next_state`] until a threshold is crossed.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::actions::{next_state, ActionType, Request};
use crate::config::MatchConfig;
use crate::domain::{Seat, State, Team, PLAYERS};
use crate::errors::transition::TransitionError;
use crate::player::{Player, PlayerError};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("{seat} failed to answer: {source}")]
    Player {
        seat: Seat,
        #[source]
        source: PlayerError,
    },
    /// The player's selection was refused; the state did not change.
    #[error("malformed selection: {0}")]
    MalformedSelection(#[source] TransitionError),
    /// The engine reached a state it cannot continue from.
    #[error("match aborted: {0}")]
    Aborted(#[source] TransitionError),
    #[error("no result after {0} deals")]
    DealLimit(u32),
}

/// Outcome of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub score: [i32; PLAYERS],
    pub rounds: u32,
    pub deals: u32,
    pub winner: Option<Team>,
}

pub struct Game {
    players: [Box<dyn Player>; PLAYERS],
    state: State,
    request: Request,
    config: MatchConfig,
}

impl Game {
    /// A fresh match. The first deal goes to `dealer.next()`.
    pub fn new(
        dealer: Seat,
        seed: u64,
        players: [Box<dyn Player>; PLAYERS],
        config: MatchConfig,
    ) -> Self {
        Self::from_state(State::initial(dealer, seed), players, config)
    }

    /// Continue from `state`, which must be waiting on its first Deal.
    pub fn from_state(state: State, players: [Box<dyn Player>; PLAYERS], config: MatchConfig) -> Self {
        let request = Request::initial(state.dealer);
        Self {
            players,
            state,
            request,
            config,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn player(&self, seat: Seat) -> &dyn Player {
        self.players[seat.index()].as_ref()
    }

    pub fn over(&self) -> bool {
        self.config.is_terminal(&self.state.score)
    }

    /// Run one transition. Returns the action that was applied.
    pub fn advance(&mut self) -> Result<ActionType, GameError> {
        let action = self.request.action_type();
        let selection = match self.request.seat() {
            Some(seat) => self.players[seat.index()]
                .play(&self.state, &self.request)
                .map_err(|source| GameError::Player { seat, source })?,
            None => self.request.options(),
        };

        let (state, request) = next_state(&self.state, &self.request, &selection).map_err(|e| {
            if e.is_invariant() {
                warn!(error = %e, "Aborting match");
                GameError::Aborted(e)
            } else {
                debug!(error = %e, "Selection refused");
                GameError::MalformedSelection(e)
            }
        })?;

        if action != request.action_type() {
            debug!("Transition: {} -> {}", action, request.action_type());
        }
        if action == ActionType::Score {
            info!(
                round = state.rounds,
                score = ?state.score,
                "Round scored"
            );
        }

        self.state = state;
        self.request = request;
        for player in &self.players {
            player.update(&self.state, action);
        }
        Ok(action)
    }

    /// Play until a threshold is crossed.
    pub fn resolve(&mut self) -> Result<MatchSummary, GameError> {
        while !self.over() {
            if self.state.deals >= self.config.max_deals {
                warn!(deals = self.state.deals, "Deal limit reached");
                return Err(GameError::DealLimit(self.state.deals));
            }
            self.advance()?;
        }
        let summary = self.summary();
        info!(
            rounds = summary.rounds,
            deals = summary.deals,
            score = ?summary.score,
            winner = ?summary.winner,
            "Match completed"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            score: self.state.score,
            rounds: self.state.rounds,
            deals: self.state.deals,
            winner: self.winner(),
        }
    }

    /// The partnership over the winning line, or failing that the one whose
    /// opponents fell under the losing line.
    fn winner(&self) -> Option<Team> {
        let score = &self.state.score;
        let best = Seat::ALL.into_iter().max_by_key(|s| score[s.index()])?;
        if score[best.index()] > self.config.winning_score {
            return Some(best.team());
        }
        let worst = Seat::ALL.into_iter().min_by_key(|s| score[s.index()])?;
        if score[worst.index()] < self.config.losing_score {
            return Some(worst.next().team());
        }
        None
    }
}
