//! CSV match log reader
//!
//! Turns a tabular match log into ordered [`MatchRecord`]s. Outcome codes are
//! normalized here so the rating core only ever sees a typed [`Outcome`].

use crate::error::{RatingError, Result};
use crate::types::{MatchRecord, Outcome};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Column names used to locate the fields of a match row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReaderConfig {
    pub player_a_column: String,
    pub player_b_column: String,
    pub outcome_column: String,
}

impl Default for MatchReaderConfig {
    fn default() -> Self {
        Self {
            player_a_column: "Fighter".to_string(),
            player_b_column: "Opponent".to_string(),
            outcome_column: "W/L".to_string(),
        }
    }
}

/// Matches read from a log, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchLog {
    pub matches: Vec<MatchRecord>,
    /// Rows dropped because a participant was blank or the outcome unknown
    pub skipped: usize,
}

/// Read a match log from a CSV file
pub fn read_matches_from_path(path: impl AsRef<Path>, config: &MatchReaderConfig) -> Result<MatchLog> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open match log {}", path.display()))?;

    read_matches(file, config)
        .with_context(|| format!("Failed to read match log {}", path.display()))
}

/// Read a match log from any CSV source with a header row
pub fn read_matches<R: Read>(source: R, config: &MatchReaderConfig) -> Result<MatchLog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| RatingError::InputFailed {
            message: e.to_string(),
        })?
        .clone();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| {
                RatingError::MissingColumn {
                    column: name.to_string(),
                }
                .into()
            })
    };

    let player_a_idx = column(&config.player_a_column)?;
    let player_b_idx = column(&config.player_b_column)?;
    let outcome_idx = column(&config.outcome_column)?;

    let mut log = MatchLog::default();

    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| RatingError::InputFailed {
            message: e.to_string(),
        })?;
        // Header is line 1
        let line = row + 2;

        let player_a = record.get(player_a_idx).unwrap_or_default();
        let player_b = record.get(player_b_idx).unwrap_or_default();
        let code = record.get(outcome_idx).unwrap_or_default();

        if player_a.is_empty() || player_b.is_empty() {
            warn!("Skipping line {}: missing participant", line);
            log.skipped += 1;
            continue;
        }

        let outcome = match code.parse::<Outcome>() {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Skipping line {}: {}", line, e);
                log.skipped += 1;
                continue;
            }
        };

        log.matches.push(MatchRecord::new(player_a, player_b, outcome));
    }

    debug!(
        "Read {} matches ({} rows skipped)",
        log.matches.len(),
        log.skipped
    );

    Ok(log)
}
