//! Common types used throughout the rating engine

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for competitors
pub type CompetitorId = String;

/// Result of a match from the first participant's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Numeric score fed to the rating calculator (1, 0.5 or 0)
    pub fn score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Draw => 0.5,
            Outcome::Loss => 0.0,
        }
    }

    /// The same result seen from the second participant
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Draw => Outcome::Draw,
            Outcome::Loss => Outcome::Win,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "W"),
            Outcome::Draw => write!(f, "D"),
            Outcome::Loss => write!(f, "L"),
        }
    }
}

impl FromStr for Outcome {
    type Err = RatingError;

    /// Accepts the `W` / `L` / `D` codes used by match logs as well as
    /// their numeric scores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "W" | "1" | "1.0" => Ok(Outcome::Win),
            "D" | "0.5" => Ok(Outcome::Draw),
            "L" | "0" | "0.0" => Ok(Outcome::Loss),
            _ => Err(RatingError::UnknownOutcome {
                code: s.to_string(),
            }),
        }
    }
}

/// A single pairwise match, consumed once in log order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player_a: CompetitorId,
    pub player_b: CompetitorId,
    pub outcome: Outcome,
}

impl MatchRecord {
    pub fn new(
        player_a: impl Into<CompetitorId>,
        player_b: impl Into<CompetitorId>,
        outcome: Outcome,
    ) -> Self {
        Self {
            player_a: player_a.into(),
            player_b: player_b.into(),
            outcome,
        }
    }
}

/// Rating change information for one applied match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub player_a: CompetitorId,
    pub player_b: CompetitorId,
    pub outcome: Outcome,
    pub old_rating_a: f64,
    pub old_rating_b: f64,
    pub new_rating_a: f64,
    pub new_rating_b: f64,
}

impl RatingUpdate {
    /// Signed change for the first participant; the second moved by the negation
    pub fn delta_a(&self) -> f64 {
        self.new_rating_a - self.old_rating_a
    }

    pub fn delta_b(&self) -> f64 {
        self.new_rating_b - self.old_rating_b
    }
}
