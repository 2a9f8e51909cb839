//! Rating calculator trait and the ELO implementation
//!
//! The free functions are the pure ELO math; [`EloCalculator`] binds them to a
//! configured K-factor and starting rating so the ledger can stay generic over
//! [`RatingCalculator`].

use crate::error::RatingError;
use serde::Serialize;

/// Rating assigned to competitors with no prior history
pub const DEFAULT_RATING: f64 = 1500.0;

/// K-factor for ELO updates (higher = more volatile)
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Rating gap at which the stronger side is expected to score ten times as often
const LOGISTIC_SCALE: f64 = 400.0;

/// Probability that a competitor rated `rating_a` beats one rated `rating_b`.
///
/// Always in (0, 1) for finite inputs, and
/// `expected_outcome(a, b) + expected_outcome(b, a) == 1`.
pub fn expected_outcome(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / LOGISTIC_SCALE))
}

/// New ratings for both sides of a single match.
///
/// `outcome` is the first participant's score (1 win, 0.5 draw, 0 loss). It is
/// not validated: any real value is accepted and the caller is responsible for
/// keeping it in [0, 1]. Non-finite inputs propagate to the outputs.
///
/// The second adjustment is the exact negation of the first, so the pair's
/// total rating is preserved.
pub fn update_ratings(rating_a: f64, rating_b: f64, outcome: f64, k_factor: f64) -> (f64, f64) {
    let expected_a = expected_outcome(rating_a, rating_b);
    let actual_a = outcome;

    // k * ((1 - o) - (1 - e)) == -(k * (o - e))
    let delta_a = k_factor * (actual_a - expected_a);
    let delta_b = -delta_a;

    (rating_a + delta_a, rating_b + delta_b)
}

/// Trait for calculating rating changes after a match
pub trait RatingCalculator {
    /// Compute both participants' new ratings from their pre-match ratings
    /// and the first participant's score.
    fn update(&self, rating_a: f64, rating_b: f64, score: f64) -> (f64, f64);

    /// Get the initial rating for new competitors
    fn initial_rating(&self) -> f64;

    /// Maximum single-match swing
    fn k_factor(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}

/// Standard ELO calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EloCalculator {
    k_factor: f64,
    initial_rating: f64,
}

impl EloCalculator {
    /// Create a new ELO calculator
    pub fn new(k_factor: f64, initial_rating: f64) -> crate::error::Result<Self> {
        if !k_factor.is_finite() || k_factor <= 0.0 {
            return Err(RatingError::InvalidKFactor { value: k_factor }.into());
        }
        if !initial_rating.is_finite() {
            return Err(RatingError::InvalidDefaultRating {
                value: initial_rating,
            }
            .into());
        }

        Ok(Self {
            k_factor,
            initial_rating,
        })
    }
}

impl Default for EloCalculator {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            initial_rating: DEFAULT_RATING,
        }
    }
}

impl RatingCalculator for EloCalculator {
    fn update(&self, rating_a: f64, rating_b: f64, score: f64) -> (f64, f64) {
        update_ratings(rating_a, rating_b, score, self.k_factor)
    }

    fn initial_rating(&self) -> f64 {
        self.initial_rating
    }

    fn k_factor(&self) -> f64 {
        self.k_factor
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "elo",
            "k_factor": self.k_factor,
            "initial_rating": self.initial_rating
        })
    }
}
