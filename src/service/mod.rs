//! Service layer for the elo-ledger batch run
//!
//! This module ties the match reader, rating ledger and rating sink together
//! into a single run.

pub mod run;

pub use run::{RatingRun, RunSummary};
