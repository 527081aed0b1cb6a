//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per match, one per line.
    Jsonl,
    /// A single JSON array written when the run finishes.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerType {
    Dumb,
    Random,
    Heuristic,
    Inconsistent,
    Noisy,
}

impl PlayerType {
    /// Name in the player registry.
    pub fn name(self) -> &'static str {
        match self {
            PlayerType::Dumb => "dumb",
            PlayerType::Random => "random",
            PlayerType::Heuristic => "heuristic",
            PlayerType::Inconsistent => "inconsistent",
            PlayerType::Noisy => "noisy",
        }
    }
}
