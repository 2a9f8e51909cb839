//! ELO rating calculation and the running rating ledger
//!
//! This module provides the pure rating math, the calculator seam used by the
//! ledger, and the ledger that folds an ordered match log into a rating table.

pub mod calculator;
pub mod ledger;

// Re-export commonly used types
pub use calculator::{
    expected_outcome, update_ratings, EloCalculator, RatingCalculator, DEFAULT_K_FACTOR,
    DEFAULT_RATING,
};
pub use ledger::{collect_competitors, RatingLedger};
