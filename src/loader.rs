//! CSV ingestion for the three input tables.
//!
//! Reads `team.csv`, `venue.csv` and `league.csv` (all with headers) into
//! domain models. Per-day availability columns `d1Start`/`d1End` through
//! `d7Start`/`d7End` may be missing entirely or left empty per row; absent
//! values default to the whole day, `[0, 24)`.
//!
//! A league's season label is read from `seasonYear`, falling back to
//! `season`. Records with neither column keep no label and are later
//! skipped by the scheduler with a diagnostic.
//!
//! Each table has a path-taking entry point and a reader-taking core, so
//! tests can feed records without touching the filesystem.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    DayWindow, League, LeagueId, Team, TeamId, VenueField, VenueId, WeekAvailability,
};
use crate::scheduler::ScheduleRequest;

/// Errors raised while loading input tables.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file could not be opened or read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A record failed to parse.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Raw `team.csv` row.
#[derive(Debug, Deserialize)]
struct TeamRecord {
    #[serde(rename = "teamId")]
    team_id: TeamId,
    name: String,
    #[serde(rename = "leagueId")]
    league_id: LeagueId,
    #[serde(default, rename = "d1Start")]
    d1_start: Option<f64>,
    #[serde(default, rename = "d1End")]
    d1_end: Option<f64>,
    #[serde(default, rename = "d2Start")]
    d2_start: Option<f64>,
    #[serde(default, rename = "d2End")]
    d2_end: Option<f64>,
    #[serde(default, rename = "d3Start")]
    d3_start: Option<f64>,
    #[serde(default, rename = "d3End")]
    d3_end: Option<f64>,
    #[serde(default, rename = "d4Start")]
    d4_start: Option<f64>,
    #[serde(default, rename = "d4End")]
    d4_end: Option<f64>,
    #[serde(default, rename = "d5Start")]
    d5_start: Option<f64>,
    #[serde(default, rename = "d5End")]
    d5_end: Option<f64>,
    #[serde(default, rename = "d6Start")]
    d6_start: Option<f64>,
    #[serde(default, rename = "d6End")]
    d6_end: Option<f64>,
    #[serde(default, rename = "d7Start")]
    d7_start: Option<f64>,
    #[serde(default, rename = "d7End")]
    d7_end: Option<f64>,
}

impl TeamRecord {
    fn into_team(self) -> Team {
        let availability = week_from_columns([
            (self.d1_start, self.d1_end),
            (self.d2_start, self.d2_end),
            (self.d3_start, self.d3_end),
            (self.d4_start, self.d4_end),
            (self.d5_start, self.d5_end),
            (self.d6_start, self.d6_end),
            (self.d7_start, self.d7_end),
        ]);
        Team::new(self.team_id, self.name, self.league_id).with_availability(availability)
    }
}

/// Raw `venue.csv` row; one row per field.
#[derive(Debug, Deserialize)]
struct VenueRecord {
    #[serde(rename = "venueId")]
    venue_id: VenueId,
    name: String,
    field: u32,
    #[serde(default, rename = "d1Start")]
    d1_start: Option<f64>,
    #[serde(default, rename = "d1End")]
    d1_end: Option<f64>,
    #[serde(default, rename = "d2Start")]
    d2_start: Option<f64>,
    #[serde(default, rename = "d2End")]
    d2_end: Option<f64>,
    #[serde(default, rename = "d3Start")]
    d3_start: Option<f64>,
    #[serde(default, rename = "d3End")]
    d3_end: Option<f64>,
    #[serde(default, rename = "d4Start")]
    d4_start: Option<f64>,
    #[serde(default, rename = "d4End")]
    d4_end: Option<f64>,
    #[serde(default, rename = "d5Start")]
    d5_start: Option<f64>,
    #[serde(default, rename = "d5End")]
    d5_end: Option<f64>,
    #[serde(default, rename = "d6Start")]
    d6_start: Option<f64>,
    #[serde(default, rename = "d6End")]
    d6_end: Option<f64>,
    #[serde(default, rename = "d7Start")]
    d7_start: Option<f64>,
    #[serde(default, rename = "d7End")]
    d7_end: Option<f64>,
}

impl VenueRecord {
    fn into_venue(self) -> VenueField {
        let availability = week_from_columns([
            (self.d1_start, self.d1_end),
            (self.d2_start, self.d2_end),
            (self.d3_start, self.d3_end),
            (self.d4_start, self.d4_end),
            (self.d5_start, self.d5_end),
            (self.d6_start, self.d6_end),
            (self.d7_start, self.d7_end),
        ]);
        VenueField::new(self.venue_id, self.field, self.name).with_availability(availability)
    }
}

/// Raw `league.csv` row.
#[derive(Debug, Deserialize)]
struct LeagueRecord {
    #[serde(rename = "leagueId")]
    league_id: LeagueId,
    #[serde(rename = "leagueName")]
    league_name: String,
    #[serde(rename = "seasonStart")]
    season_start: i32,
    #[serde(rename = "seasonEnd")]
    season_end: i32,
    #[serde(rename = "numberOfGames")]
    number_of_games: u32,
    #[serde(default, rename = "seasonYear")]
    season_year: Option<String>,
    #[serde(default)]
    season: Option<String>,
}

impl LeagueRecord {
    fn into_league(self) -> League {
        let league = League::new(
            self.league_id,
            self.league_name,
            self.season_start,
            self.season_end,
            self.number_of_games,
        );
        match self.season_year.or(self.season) {
            Some(label) => league.with_season(label),
            None => league,
        }
    }
}

fn week_from_columns(columns: [(Option<f64>, Option<f64>); 7]) -> WeekAvailability {
    WeekAvailability::from_days(
        columns.map(|(start, end)| DayWindow::new(start.unwrap_or(0.0), end.unwrap_or(24.0))),
    )
}

/// Loads teams from a CSV file.
pub fn load_teams(path: impl AsRef<Path>) -> Result<Vec<Team>, LoadError> {
    load_teams_reader(File::open(path)?)
}

/// Loads teams from any CSV source.
pub fn load_teams_reader<R: Read>(reader: R) -> Result<Vec<Team>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut teams = Vec::new();
    for record in csv_reader.deserialize() {
        let record: TeamRecord = record?;
        teams.push(record.into_team());
    }
    Ok(teams)
}

/// Loads venue fields from a CSV file.
pub fn load_venues(path: impl AsRef<Path>) -> Result<Vec<VenueField>, LoadError> {
    load_venues_reader(File::open(path)?)
}

/// Loads venue fields from any CSV source.
pub fn load_venues_reader<R: Read>(reader: R) -> Result<Vec<VenueField>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut venues = Vec::new();
    for record in csv_reader.deserialize() {
        let record: VenueRecord = record?;
        venues.push(record.into_venue());
    }
    Ok(venues)
}

/// Loads leagues from a CSV file.
pub fn load_leagues(path: impl AsRef<Path>) -> Result<Vec<League>, LoadError> {
    load_leagues_reader(File::open(path)?)
}

/// Loads leagues from any CSV source.
pub fn load_leagues_reader<R: Read>(reader: R) -> Result<Vec<League>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut leagues = Vec::new();
    for record in csv_reader.deserialize() {
        let record: LeagueRecord = record?;
        leagues.push(record.into_league());
    }
    Ok(leagues)
}

/// Loads all three tables from a directory holding `team.csv`,
/// `venue.csv` and `league.csv`.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<ScheduleRequest, LoadError> {
    let dir = dir.as_ref();
    Ok(ScheduleRequest::new(
        load_teams(dir.join("team.csv"))?,
        load_venues(dir.join("venue.csv"))?,
        load_leagues(dir.join("league.csv"))?,
    ))
}
