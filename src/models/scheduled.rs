//! Scheduled match record.
//!
//! The committed output row: who plays whom, when and where. The field
//! names and their declaration order are the export contract shared by the
//! CSV and JSON writers, so this struct serializes to exactly the nine
//! published columns.

use serde::{Deserialize, Serialize};

/// One committed match assignment.
///
/// Created once per successful slot search and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMatch {
    /// First team's display name.
    pub team1_name: String,
    /// Second team's display name.
    pub team2_name: String,
    /// Season week the match is booked in.
    pub week: i32,
    /// Weekday, 1-7.
    pub day: u8,
    /// Start hour.
    pub start: f64,
    /// End hour.
    pub end: f64,
    /// Season label of the owning league.
    pub season: String,
    /// Owning league's display name.
    pub league: String,
    /// Venue display string, e.g. `Riverside Park Field #2`.
    pub location: String,
}
