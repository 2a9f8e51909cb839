//! Running rating table for a single batch run
//!
//! The ledger maps every competitor to their current rating and is mutated
//! only through [`RatingLedger::apply_match`]. Matches must be applied in log
//! order: ratings compound, so a reordered log yields a different table.

use crate::rating::calculator::RatingCalculator;
use crate::types::{CompetitorId, MatchRecord, RatingUpdate};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Distinct competitors across both participant roles.
///
/// First-appearance order: every first participant, then every second
/// participant not already seen.
pub fn collect_competitors(matches: &[MatchRecord]) -> Vec<CompetitorId> {
    let mut seen = HashSet::new();
    let mut competitors = Vec::new();

    let first_roles = matches.iter().map(|record| &record.player_a);
    let second_roles = matches.iter().map(|record| &record.player_b);

    for id in first_roles.chain(second_roles) {
        if seen.insert(id.as_str()) {
            competitors.push(id.clone());
        }
    }

    competitors
}

/// Mapping from competitor to current rating
#[derive(Debug, Clone, PartialEq)]
pub struct RatingLedger {
    ratings: HashMap<CompetitorId, f64>,
    default_rating: f64,
}

impl RatingLedger {
    /// Create a ledger with every competitor at `default_rating`
    pub fn seed<I>(competitors: I, default_rating: f64) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CompetitorId>,
    {
        let ratings = competitors
            .into_iter()
            .map(|id| (id.into(), default_rating))
            .collect();

        Self {
            ratings,
            default_rating,
        }
    }

    /// Current rating, or the default for a competitor the ledger has not
    /// seen yet. Never inserts: unseen competitors enter the ledger through
    /// the write-back in [`apply_match`](Self::apply_match).
    pub fn rating_or_default(&self, competitor: &str) -> f64 {
        self.ratings
            .get(competitor)
            .copied()
            .unwrap_or(self.default_rating)
    }

    /// Recorded rating, `None` if the competitor has no entry
    pub fn get(&self, competitor: &str) -> Option<f64> {
        self.ratings.get(competitor).copied()
    }

    pub fn contains(&self, competitor: &str) -> bool {
        self.ratings.contains_key(competitor)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn default_rating(&self) -> f64 {
        self.default_rating
    }

    /// Apply one match and overwrite both participants' ratings.
    ///
    /// Both ratings are read before either is written, so the update always
    /// uses the same pre-match snapshot.
    pub fn apply_match<C>(&mut self, calculator: &C, record: &MatchRecord) -> RatingUpdate
    where
        C: RatingCalculator + ?Sized,
    {
        let old_rating_a = self.rating_or_default(&record.player_a);
        let old_rating_b = self.rating_or_default(&record.player_b);

        let (new_rating_a, new_rating_b) =
            calculator.update(old_rating_a, old_rating_b, record.outcome.score());

        self.ratings.insert(record.player_a.clone(), new_rating_a);
        self.ratings.insert(record.player_b.clone(), new_rating_b);

        RatingUpdate {
            player_a: record.player_a.clone(),
            player_b: record.player_b.clone(),
            outcome: record.outcome,
            old_rating_a,
            old_rating_b,
            new_rating_a,
            new_rating_b,
        }
    }

    /// Apply every match strictly in order, returning how many were applied
    pub fn apply_all<'a, C, I>(&mut self, calculator: &C, matches: I) -> usize
    where
        C: RatingCalculator + ?Sized,
        I: IntoIterator<Item = &'a MatchRecord>,
    {
        let mut applied = 0;

        for record in matches {
            let update = self.apply_match(calculator, record);
            applied += 1;

            debug!(
                "{} ({}) vs {} ({}) | {}: {:.2} -> {:.2}, {}: {:.2} -> {:.2}",
                update.player_a,
                update.outcome,
                update.player_b,
                update.outcome.reversed(),
                update.player_a,
                update.old_rating_a,
                update.new_rating_a,
                update.player_b,
                update.old_rating_b,
                update.new_rating_b
            );
        }

        applied
    }

    /// Full contents for handoff to an output collaborator
    pub fn finalize(&self) -> HashMap<CompetitorId, f64> {
        self.ratings.clone()
    }

    /// Ratings sorted best first; equal ratings are ordered by competitor id
    pub fn standings(&self) -> Vec<(CompetitorId, f64)> {
        let mut standings: Vec<(CompetitorId, f64)> = self
            .ratings
            .iter()
            .map(|(id, rating)| (id.clone(), *rating))
            .collect();

        standings.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        standings
    }
}
