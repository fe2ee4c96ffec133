//! Run summary statistics.
//!
//! Condenses a finished [`ScheduleOutcome`] into per-league and per-team
//! tallies for console reporting and assertions in tests.

use std::collections::BTreeMap;

use crate::scheduler::{LeagueOutcome, ScheduleOutcome};

/// Summary of one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    /// Matches required across all leagues.
    pub total_required: usize,
    /// Matches committed across all leagues.
    pub total_scheduled: usize,
    /// Per-league tallies, in league input order.
    pub leagues: Vec<LeagueOutcome>,
    /// Scheduled appearances per team display name; either side counts.
    pub appearances: BTreeMap<String, usize>,
}

impl ScheduleReport {
    /// Computes the summary for a finished run.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let mut appearances: BTreeMap<String, usize> = BTreeMap::new();
        for m in &outcome.matches {
            *appearances.entry(m.team1_name.clone()).or_insert(0) += 1;
            *appearances.entry(m.team2_name.clone()).or_insert(0) += 1;
        }

        Self {
            total_required: outcome.leagues.iter().map(|l| l.required).sum(),
            total_scheduled: outcome.leagues.iter().map(|l| l.scheduled).sum(),
            leagues: outcome.leagues.clone(),
            appearances,
        }
    }

    /// Matches still missing after backfill, across all leagues.
    #[inline]
    pub fn total_deficit(&self) -> usize {
        self.total_required - self.total_scheduled
    }

    /// Whether every required match was scheduled.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.total_deficit() == 0
    }

    /// Scheduled appearances for one team name, zero when absent.
    pub fn appearances_for(&self, team: &str) -> usize {
        self.appearances.get(team).copied().unwrap_or(0)
    }

    /// Leagues skipped without scheduling.
    pub fn skipped_leagues(&self) -> impl Iterator<Item = &LeagueOutcome> {
        self.leagues.iter().filter(|l| l.skipped.is_some())
    }
}
