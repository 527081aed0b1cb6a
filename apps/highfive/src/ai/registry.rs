//! Name-based lookup of the computer players.
//!
//! A new player gets an entry in `AI_FACTORIES` with a stable lowercase name.
//! Seeded construction must be reproducible: the simulator and the
//! conformance tests replay matches by seed.

use super::{Dumb, Heuristic, RandomPlayer};
use crate::player::Player;

pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn Player>,
}

impl AiFactory {
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Player> {
        (self.make)(seed)
    }
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: Dumb::NAME,
        version: Dumb::VERSION,
        make: |seed| Box::new(Dumb::new(seed)) as Box<dyn Player>,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: |seed| Box::new(RandomPlayer::new(seed)) as Box<dyn Player>,
    },
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: |seed| Box::new(Heuristic::new(seed)) as Box<dyn Player>,
    },
    AiFactory {
        name: Heuristic::INCONSISTENT_NAME,
        version: Heuristic::VERSION,
        make: |seed| Box::new(Heuristic::inconsistent(seed)) as Box<dyn Player>,
    },
    AiFactory {
        name: Heuristic::NOISY_NAME,
        version: Heuristic::VERSION,
        make: |seed| Box::new(Heuristic::noisy(seed)) as Box<dyn Player>,
    },
];

pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Registered names joined for messages, e.g. "dumb, random, heuristic".
pub fn names() -> String {
    AI_FACTORIES
        .iter()
        .map(|f| f.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Case-insensitive lookup.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    AI_FACTORIES
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
}
