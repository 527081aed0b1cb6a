//! Match simulator CLI: plays computer players against each other in memory
//! and writes per-match results.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use highfive::ai::registry::{by_name, names};
use highfive::domain::derive_player_seed;
use highfive::telemetry::init_tracing;
use highfive::{MatchConfig, Player, Seat, Team};
use metrics::{build_match_metrics, MatchMetrics, MatchSetup};
use output::OutputWriter;
use simulator::simulate_match;
use tracing::{info, warn};
use types::{OutputFormat, PlayerType};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "In-memory High Five match simulator")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Player type for all seats
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<PlayerType>,

    /// Player type for North
    #[arg(long, default_value = "heuristic")]
    seat0: PlayerType,

    /// Player type for East
    #[arg(long, default_value = "heuristic")]
    seat1: PlayerType,

    /// Player type for South
    #[arg(long, default_value = "heuristic")]
    seat2: PlayerType,

    /// Player type for West
    #[arg(long, default_value = "heuristic")]
    seat3: PlayerType,

    /// Base seed; match n uses seed + n. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Seat holding the deal before the first hand (it passes on at once)
    #[arg(long, default_value = "west")]
    dealer: Seat,

    #[arg(long, default_value_t = highfive::config::DEFAULT_WINNING_SCORE, allow_hyphen_values = true)]
    winning_score: i32,

    #[arg(long, default_value_t = highfive::config::DEFAULT_LOSING_SCORE, allow_hyphen_values = true)]
    losing_score: i32,

    /// Give up on a match after this many deals
    #[arg(long, default_value_t = highfive::config::DEFAULT_MAX_DEALS)]
    max_deals: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    #[arg(long, value_enum, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Gzip the detailed output
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default: warnings and errors only
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    init_tracing(filter, args.json_logs)?;

    let seat_types = match args.seats {
        Some(all) => [all; 4],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let config = MatchConfig {
        winning_score: args.winning_score,
        losing_score: args.losing_score,
        max_deals: args.max_deals,
    };
    info!(games = args.games, players = ?seat_types, ?config, "Starting match simulator");

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for match_id in 1..=args.games {
        let seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(match_id)),
            None => rand::random(),
        };
        let players = make_players(seat_types, seed)?;
        let match_start = Instant::now();

        match simulate_match(args.dealer, seed, players, config) {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                info!(match_id, seed, score = ?result.final_score, winner = ?result.winner, "Match finished");
                let setup = MatchSetup {
                    players: seat_types.map(|t| t.name().to_string()),
                    dealer: args.dealer,
                    winning_score: config.winning_score,
                    losing_score: config.losing_score,
                };
                let metrics = build_match_metrics(match_id, seed, setup, result, duration_ms);
                results.push(Outcome::from(&metrics));
                if let Err(e) = output_writer.write_match(metrics) {
                    warn!(match_id, error = %e, "Failed to write match metrics");
                }
            }
            Err(e) => {
                errors += 1;
                warn!(match_id, seed, error = %e, "Match failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn make_players(types: [PlayerType; 4], seed: u64) -> Result<[Box<dyn Player>; 4], String> {
    let mut players = Vec::with_capacity(4);
    for (seat, player_type) in types.into_iter().enumerate() {
        let factory = by_name(player_type.name())
            .ok_or_else(|| format!("Unknown player type: {} (known: {})", player_type.name(), names()))?;
        players.push(factory.build(Some(derive_player_seed(seed, seat))));
    }
    players
        .try_into()
        .map_err(|_| "expected exactly four players".to_string())
}

/// What the summary needs from each finished match.
struct Outcome {
    score: [i32; 4],
    winner: Option<Team>,
    rounds: u32,
    throw_ins: u32,
}

impl From<&MatchMetrics> for Outcome {
    fn from(m: &MatchMetrics) -> Self {
        Self {
            score: m.result.final_score,
            winner: m.result.winner,
            rounds: m.result.rounds,
            throw_ins: m.result.throw_ins,
        }
    }
}

fn print_summary(results: &[Outcome], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!("Average time per match: {:?}", elapsed / results.len() as u32);

    let n = results.len() as f64;
    let rounds: u32 = results.iter().map(|r| r.rounds).sum();
    let throw_ins: u32 = results.iter().map(|r| r.throw_ins).sum();
    println!("Average rounds per match: {:.1}", f64::from(rounds) / n);
    println!("Average throw-ins per match: {:.1}", f64::from(throw_ins) / n);

    println!("\n=== Results by Partnership ===");
    for team in [Team::NorthSouth, Team::EastWest] {
        let [seat, _] = team.seats();
        let wins = results.iter().filter(|r| r.winner == Some(team)).count();
        let scores: Vec<i32> = results.iter().map(|r| r.score[seat.index()]).collect();
        let avg = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / n;
        let min = scores.iter().min().copied().unwrap_or(0);
        let max = scores.iter().max().copied().unwrap_or(0);
        println!(
            "{team}: avg={avg:.1}, min={min}, max={max}, wins={wins} ({:.1}%)",
            wins as f64 / n * 100.0
        );
    }
}
