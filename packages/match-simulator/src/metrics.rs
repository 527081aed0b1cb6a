//! Per-match metrics for the output files.

use highfive::{Seat, Team};
use serde::Serialize;

use crate::simulator::{MatchResult, RoundRecord};

#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchSetup,
    pub result: MatchResultMetrics,
    pub teams: Vec<TeamMetrics>,
    pub rounds: Vec<RoundRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSetup {
    pub players: [String; 4],
    pub dealer: Seat,
    pub winning_score: i32,
    pub losing_score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub final_score: [i32; 4],
    pub winner: Option<Team>,
    pub rounds: u32,
    pub deals: u32,
    pub throw_ins: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMetrics {
    pub team: Team,
    pub bids_won: u32,
    pub bids_made: u32,
    pub bids_set: u32,
    pub avg_points_per_round: f64,
}

/// One CSV line per match.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub winner: String,
    pub north_south: i32,
    pub east_west: i32,
    pub rounds: u32,
    pub deals: u32,
    pub seat0_player: String,
    pub seat1_player: String,
    pub seat2_player: String,
    pub seat3_player: String,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(m: &MatchMetrics) -> Self {
        let [p0, p1, p2, p3] = m.config.players.clone();
        Self {
            match_id: m.match_id,
            seed: m.seed,
            winner: m
                .result
                .winner
                .map_or_else(|| "none".to_string(), |t| t.to_string()),
            north_south: m.result.final_score[Seat::North.index()],
            east_west: m.result.final_score[Seat::East.index()],
            rounds: m.result.rounds,
            deals: m.result.deals,
            seat0_player: p0,
            seat1_player: p1,
            seat2_player: p2,
            seat3_player: p3,
        }
    }
}

pub fn build_match_metrics(
    match_id: u32,
    seed: u64,
    config: MatchSetup,
    result: MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let teams = [Team::NorthSouth, Team::EastWest]
        .into_iter()
        .map(|team| build_team_metrics(team, &result.rounds))
        .collect();

    MatchMetrics {
        match_id,
        seed,
        timestamp,
        config,
        result: MatchResultMetrics {
            final_score: result.final_score,
            winner: result.winner,
            rounds: result.rounds.len() as u32,
            deals: result.deals,
            throw_ins: result.throw_ins(),
            duration_ms,
        },
        teams,
        rounds: result.rounds,
    }
}

fn build_team_metrics(team: Team, rounds: &[RoundRecord]) -> TeamMetrics {
    let [seat, _] = team.seats();
    let won: Vec<&RoundRecord> = rounds.iter().filter(|r| r.bidder.team() == team).collect();
    let made = won.iter().filter(|r| r.made()).count() as u32;
    let points: i32 = rounds.iter().map(|r| r.points[seat.index()]).sum();
    let avg_points_per_round = if rounds.is_empty() {
        0.0
    } else {
        points as f64 / rounds.len() as f64
    };

    TeamMetrics {
        team,
        bids_won: won.len() as u32,
        bids_made: made,
        bids_set: won.len() as u32 - made,
        avg_points_per_round,
    }
}
