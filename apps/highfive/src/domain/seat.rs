//! Table positions, rotation and partnerships.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

/// The two partnerships.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    NorthSouth,
    EastWest,
}

impl Seat {
    pub const ALL: [Seat; PLAYERS] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn from_index(index: usize) -> Seat {
        Self::ALL[index % PLAYERS]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Seat `delta` places clockwise (negative for counter-clockwise).
    pub fn offset(self, delta: isize) -> Seat {
        let i = (self as isize + delta).rem_euclid(PLAYERS as isize);
        Self::ALL[i as usize]
    }

    pub fn next(self) -> Seat {
        self.offset(1)
    }

    pub fn prev(self) -> Seat {
        self.offset(-1)
    }

    pub fn partner(self) -> Seat {
        self.offset(2)
    }

    /// All four seats clockwise, starting with `self`.
    pub fn rotation(self) -> impl Iterator<Item = Seat> {
        (0..PLAYERS as isize).map(move |n| self.offset(n))
    }

    pub fn team(self) -> Team {
        match self {
            Seat::North | Seat::South => Team::NorthSouth,
            Seat::East | Seat::West => Team::EastWest,
        }
    }

    pub fn same_team(self, other: Seat) -> bool {
        self.team() == other.team()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        };
        f.write_str(name)
    }
}

impl FromStr for Seat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Seat::North),
            "east" | "e" => Ok(Seat::East),
            "south" | "s" => Ok(Seat::South),
            "west" | "w" => Ok(Seat::West),
            _ => Err(DomainError::validation(
                ValidationKind::ParseSeat,
                format!("Parse seat: {s}"),
            )),
        }
    }
}

impl Team {
    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::NorthSouth => [Seat::North, Seat::South],
            Team::EastWest => [Seat::East, Seat::West],
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::NorthSouth => f.write_str("North/South"),
            Team::EastWest => f.write_str("East/West"),
        }
    }
}
