//! League model.
//!
//! A league fixes the season horizon (an inclusive week range), the
//! games-per-team target and the season label stamped onto every
//! scheduled match.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::LeagueId;

/// A league to schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    /// Unique league identifier.
    pub id: LeagueId,
    /// Display name.
    pub name: String,
    /// First week of the season.
    pub season_start: i32,
    /// Last week of the season (inclusive).
    pub season_end: i32,
    /// Matches each team should play over the season.
    pub games_per_team: u32,
    /// Season label, e.g. `2024`. Leagues without one are skipped.
    pub season: Option<String>,
}

impl League {
    /// Creates a league with no season label.
    pub fn new(
        id: LeagueId,
        name: impl Into<String>,
        season_start: i32,
        season_end: i32,
        games_per_team: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            season_start,
            season_end,
            games_per_team,
            season: None,
        }
    }

    /// Sets the season label.
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// The inclusive week range searched for slots.
    #[inline]
    pub fn weeks(&self) -> RangeInclusive<i32> {
        self.season_start..=self.season_end
    }
}
