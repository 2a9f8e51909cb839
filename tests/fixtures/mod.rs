//! Test fixtures and helpers for integration testing

#![allow(dead_code)]

use elo_ledger::error::{RatingError, Result};
use elo_ledger::io::RatingSink;
use elo_ledger::types::{CompetitorId, MatchRecord, Outcome};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sink that always fails, counting attempts
#[derive(Debug, Default)]
pub struct FailingSink {
    attempts: AtomicUsize,
}

impl FailingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl RatingSink for FailingSink {
    fn store_ratings(&self, _standings: &[(CompetitorId, f64)]) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(RatingError::OutputFailed {
            message: "simulated write failure".to_string(),
        }
        .into())
    }
}

/// Scratch directory unique to one test
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "elo-ledger-it-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.file(name);
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// A short fight log in the default column layout
pub const FIGHT_LOG: &str = "\
Fighter,Opponent,W/L,Method
Alice,Bob,W,KO
Carol,Dave,L,Decision
Alice,Carol,D,Decision
Bob,Dave,W,Submission
Dave,Alice,W,KO
";

pub fn win(a: &str, b: &str) -> MatchRecord {
    MatchRecord::new(a, b, Outcome::Win)
}

pub fn draw(a: &str, b: &str) -> MatchRecord {
    MatchRecord::new(a, b, Outcome::Draw)
}

pub fn loss(a: &str, b: &str) -> MatchRecord {
    MatchRecord::new(a, b, Outcome::Loss)
}

/// Deterministic round-robin style log over `players` competitors
pub fn generated_log(players: usize, matches: usize) -> Vec<MatchRecord> {
    (0..matches)
        .map(|i| {
            let a = format!("player_{}", i % players);
            let b = format!("player_{}", (i * 7 + 3) % players);
            let b = if a == b {
                format!("player_{}", (i + 1) % players)
            } else {
                b
            };
            let outcome = match i % 3 {
                0 => Outcome::Win,
                1 => Outcome::Draw,
                _ => Outcome::Loss,
            };
            MatchRecord::new(a, b, outcome)
        })
        .collect()
}
