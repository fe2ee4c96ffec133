//! Scheduling engine.
//!
//! The conflict index and pairing generator are the engine's building
//! blocks. [`SeasonScheduler`] drives the two-pass first-fit assignment
//! over every league, and [`ScheduleReport`] summarizes the result.
//!
//! # Strategy
//!
//! The search is first-fit and greedy: it commits the first feasible slot
//! in a fixed iteration order and never backtracks. Runs are reproducible,
//! not optimal; a league that cannot be fully placed finishes with a
//! reported deficit instead of an error.

mod conflict;
mod engine;
mod pairing;
mod report;

pub use conflict::ConflictIndex;
pub use engine::{LeagueOutcome, ScheduleOutcome, ScheduleRequest, SeasonScheduler, SkipReason};
pub use pairing::{pairing_sequence, required_total};
pub use report::ScheduleReport;
