//! Elo Ledger - batch ELO ratings from sequential match logs
//!
//! This crate provides the ELO rating math, a ledger that folds an ordered
//! log of pairwise matches into a final rating table, and the CSV
//! collaborators that feed and persist it.

pub mod config;
pub mod error;
pub mod io;
pub mod rating;
pub mod service;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{EloCalculator, RatingCalculator, RatingLedger};
pub use service::{RatingRun, RunSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
