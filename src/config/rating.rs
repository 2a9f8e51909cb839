//! Rating system configuration

use crate::rating::calculator::{EloCalculator, DEFAULT_K_FACTOR, DEFAULT_RATING};
use serde::{Deserialize, Serialize};

/// ELO parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Maximum rating swing for a single match
    pub k_factor: f64,
    /// Starting rating for competitors with no history
    pub default_rating: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            default_rating: DEFAULT_RATING,
        }
    }
}

impl RatingSettings {
    /// Build the calculator these settings describe
    pub fn calculator(&self) -> crate::error::Result<EloCalculator> {
        EloCalculator::new(self.k_factor, self.default_rating)
    }
}
