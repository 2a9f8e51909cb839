//! Rating sink interface and implementations
//!
//! This module defines the interface for persisting a final rating table,
//! with a two-column CSV writer and an in-memory sink.

use crate::error::{RatingError, Result};
use crate::types::CompetitorId;
use anyhow::Context;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{error, info};

/// Trait for rating table persistence
pub trait RatingSink {
    /// Persist a full rating table, rows in the given order
    fn store_ratings(&self, standings: &[(CompetitorId, f64)]) -> Result<()>;
}

/// Writes `competitor,rating` rows with no header
#[derive(Debug, Clone)]
pub struct CsvRatingWriter {
    path: PathBuf,
}

impl CsvRatingWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RatingSink for CsvRatingWriter {
    fn store_ratings(&self, standings: &[(CompetitorId, f64)]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        for (competitor, rating) in standings {
            writer
                .write_record([competitor.as_str(), format_rating(*rating).as_str()])
                .map_err(|e| RatingError::OutputFailed {
                    message: e.to_string(),
                })?;
        }

        writer.flush().map_err(|e| RatingError::OutputFailed {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

/// Ratings always carry a fractional part (`1516.0`, not `1516`)
fn format_rating(rating: f64) -> String {
    format!("{:?}", rating)
}

/// In-memory sink that keeps every stored table
#[derive(Debug, Default)]
pub struct InMemoryRatingSink {
    tables: RwLock<Vec<Vec<(CompetitorId, f64)>>>,
}

impl InMemoryRatingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all stored tables (for testing)
    pub fn stored_tables(&self) -> Vec<Vec<(CompetitorId, f64)>> {
        self.tables
            .read()
            .map(|tables| tables.clone())
            .unwrap_or_default()
    }

    /// Most recently stored table
    pub fn last_table(&self) -> Option<Vec<(CompetitorId, f64)>> {
        self.stored_tables().pop()
    }
}

impl RatingSink for InMemoryRatingSink {
    fn store_ratings(&self, standings: &[(CompetitorId, f64)]) -> Result<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RatingError::OutputFailed {
                message: "Failed to acquire rating table write lock".to_string(),
            })?;

        tables.push(standings.to_vec());
        Ok(())
    }
}

/// Hand the final table to a sink.
///
/// Failures are logged and reported as `false`; the computed ratings are
/// already final at this point and must not be lost to an output error.
pub fn publish_ratings<S>(sink: &S, standings: &[(CompetitorId, f64)]) -> bool
where
    S: RatingSink + ?Sized,
{
    match sink.store_ratings(standings) {
        Ok(()) => {
            info!("Stored ratings for {} competitors", standings.len());
            true
        }
        Err(e) => {
            error!("An error occurred while writing ratings: {:#}", e);
            false
        }
    }
}
