//! League scheduling domain models.
//!
//! Provides the core data types for describing a scheduling run: the
//! records loaded from the input tables, the time primitives the engine
//! searches over, and the committed output rows.
//!
//! # Input Mappings
//!
//! | Model | Input table | Role |
//! |-------|-------------|------|
//! | `Team` | `team.csv` | who plays, and when they can |
//! | `VenueField` | `venue.csv` | where matches can be booked |
//! | `League` | `league.csv` | season horizon and games-per-team target |

mod availability;
mod interval;
mod league;
mod matchup;
mod scheduled;
mod team;
mod venue;

/// Team identifier.
pub type TeamId = u32;
/// Venue identifier; one venue may contribute several fields.
pub type VenueId = u32;
/// League identifier.
pub type LeagueId = u32;

pub use availability::{DayWindow, WeekAvailability};
pub use interval::{Interval, InvalidInterval, MATCH_DURATION_HOURS};
pub use league::League;
pub use matchup::Matchup;
pub use scheduled::ScheduledMatch;
pub use team::Team;
pub use venue::{FieldId, VenueField};
