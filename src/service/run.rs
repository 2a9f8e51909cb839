//! Batch run coordination
//!
//! A [`RatingRun`] reads the configured match log, seeds a fresh ledger from
//! every competitor in it, folds the matches in order, and hands the final
//! table to a sink. Input problems abort the run; output problems do not.

use crate::config::AppConfig;
use crate::error::Result;
use crate::io::reader::read_matches_from_path;
use crate::io::writer::{publish_ratings, RatingSink};
use crate::rating::calculator::{EloCalculator, RatingCalculator};
use crate::rating::ledger::{collect_competitors, RatingLedger};
use crate::types::{CompetitorId, MatchRecord};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub matches_applied: usize,
    pub rows_skipped: usize,
    pub competitors: usize,
    /// False when the sink failed; the ratings were still computed
    pub persisted: bool,
    /// Final ratings, best first, whether or not the sink accepted them
    pub standings: Vec<(CompetitorId, f64)>,
}

/// One batch rating computation
#[derive(Debug, Clone)]
pub struct RatingRun {
    config: AppConfig,
    calculator: EloCalculator,
}

impl RatingRun {
    /// Create a run, validating the rating parameters
    pub fn new(config: AppConfig) -> Result<Self> {
        let calculator = config.rating.calculator()?;
        Ok(Self { config, calculator })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Seed a ledger from every competitor in `matches` and apply them in order
    pub fn compute(&self, matches: &[MatchRecord]) -> RatingLedger {
        let competitors = collect_competitors(matches);
        debug!("Seeding ledger with {} competitors", competitors.len());

        let mut ledger = RatingLedger::seed(competitors, self.calculator.initial_rating());
        ledger.apply_all(&self.calculator, matches);

        ledger
    }

    /// Read the configured match log, rate it, and publish to `sink`
    pub fn execute<S>(&self, sink: &S) -> Result<RunSummary>
    where
        S: RatingSink + ?Sized,
    {
        let start_time = Instant::now();
        let input = &self.config.input;

        info!("Reading matches from {}", input.path.display());
        let log = read_matches_from_path(&input.path, &input.reader_config())?;

        info!(
            "Rating {} matches with {}",
            log.matches.len(),
            self.calculator.config()
        );
        let ledger = self.compute(&log.matches);
        let standings = ledger.standings();

        let persisted = publish_ratings(sink, &standings);

        let summary = RunSummary {
            matches_applied: log.matches.len(),
            rows_skipped: log.skipped,
            competitors: ledger.len(),
            persisted,
            standings,
        };

        info!(
            "Rated {} competitors over {} matches in {:?} ({} rows skipped)",
            summary.competitors,
            summary.matches_applied,
            start_time.elapsed(),
            summary.rows_skipped
        );

        Ok(summary)
    }
}
