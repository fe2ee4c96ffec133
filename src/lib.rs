//! Deterministic league match scheduler.
//!
//! Computes a conflict-free season schedule of paired matches for one or
//! more leagues. Teams with per-weekday availability windows are paired
//! as evenly as possible, and each required match gets a week, weekday,
//! start time and venue field such that no team and no venue field is
//! ever double-booked.
//!
//! The search is first-fit and greedy: instances are tried in a fixed,
//! fairness-balanced order and the earliest feasible slot wins. Runs are
//! bit-for-bit reproducible but not globally optimal. Leagues that cannot
//! be fully placed finish with a reported deficit rather than an error.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Team`, `VenueField`, `League`,
//!   `Matchup`, `Interval`, availability windows, `ScheduledMatch`)
//! - **`scheduler`**: Conflict index, pairing generation, first-fit slot
//!   search, two-pass orchestration, run reports
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   league references, inverted windows)
//! - **`loader`**: CSV ingestion for the three input tables
//! - **`export`**: CSV and JSON schedule writers
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling: a survey"
//! - de Werra (1988), "Some models of graphs for scheduling sports competitions"

pub mod export;
pub mod loader;
pub mod models;
pub mod scheduler;
pub mod validation;
