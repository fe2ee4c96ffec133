//! Booking interval model.
//!
//! An [`Interval`] is one match slot pinned to a season week and a weekday.
//! Times are hours within the day and starts are half-hour quantized, so
//! intervals convert losslessly to integer half-hour ticks for indexing.
//!
//! # Overlap
//!
//! Intervals on different (week, day) coordinates never overlap. On the
//! same coordinates they are half-open ranges: `[start, end)` overlaps
//! `[s, e)` iff `start < e && s < end`, so back-to-back slots sharing a
//! boundary are compatible.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed match duration in hours.
pub const MATCH_DURATION_HOURS: f64 = 2.0;

/// Error constructing an interval whose end does not lie after its start.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid interval on week {week} day {day}: end {end} must be after start {start}")]
pub struct InvalidInterval {
    /// Season week of the rejected interval.
    pub week: i32,
    /// Weekday (1-7) of the rejected interval.
    pub day: u8,
    /// Offending start hour.
    pub start: f64,
    /// Offending end hour.
    pub end: f64,
}

/// A half-open booking window `[start, end)` on one (week, day) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Season week.
    pub week: i32,
    /// Weekday, 1-7.
    pub day: u8,
    /// Start hour (inclusive).
    pub start: f64,
    /// End hour (exclusive).
    pub end: f64,
}

impl Interval {
    /// Creates an interval, rejecting non-positive durations.
    pub fn new(week: i32, day: u8, start: f64, end: f64) -> Result<Self, InvalidInterval> {
        if end <= start {
            return Err(InvalidInterval {
                week,
                day,
                start,
                end,
            });
        }
        Ok(Self {
            week,
            day,
            start,
            end,
        })
    }

    /// Creates the standard match slot beginning at `start`.
    pub fn match_slot(week: i32, day: u8, start: f64) -> Self {
        Self {
            week,
            day,
            start,
            end: start + MATCH_DURATION_HOURS,
        }
    }

    /// Duration in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether two intervals overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.week == other.week
            && self.day == other.day
            && self.start < other.end
            && other.start < self.end
    }

    /// Start hour in half-hour ticks.
    #[inline]
    pub(crate) fn start_ticks(&self) -> i32 {
        to_ticks(self.start)
    }

    /// End hour in half-hour ticks.
    #[inline]
    pub(crate) fn end_ticks(&self) -> i32 {
        to_ticks(self.end)
    }
}

/// Converts an hour value to half-hour ticks.
///
/// Exact for half-hour quantized inputs; rounds to the nearest tick
/// otherwise.
#[inline]
pub(crate) fn to_ticks(hours: f64) -> i32 {
    (hours * 2.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_slot_duration() {
        let slot = Interval::match_slot(1, 3, 9.5);
        assert_eq!(slot.week, 1);
        assert_eq!(slot.day, 3);
        assert!((slot.end - 11.5).abs() < 1e-10);
        assert!((slot.duration() - MATCH_DURATION_HOURS).abs() < 1e-10);
    }

    #[test]
    fn test_new_rejects_inverted() {
        assert!(Interval::new(1, 1, 10.0, 10.0).is_err());
        assert!(Interval::new(1, 1, 10.0, 9.0).is_err());
        assert!(Interval::new(1, 1, 9.0, 10.0).is_ok());
    }

    #[test]
    fn test_overlap_same_day() {
        let a = Interval::match_slot(1, 1, 9.0);
        let b = Interval::match_slot(1, 1, 10.5);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_slots_do_not_overlap() {
        let a = Interval::match_slot(1, 1, 9.0);
        let b = Interval::match_slot(1, 1, 11.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_across_days_or_weeks() {
        let a = Interval::match_slot(1, 1, 9.0);
        assert!(!a.overlaps(&Interval::match_slot(1, 2, 9.0)));
        assert!(!a.overlaps(&Interval::match_slot(2, 1, 9.0)));
    }

    #[test]
    fn test_ticks() {
        assert_eq!(to_ticks(0.0), 0);
        assert_eq!(to_ticks(9.0), 18);
        assert_eq!(to_ticks(9.5), 19);
        assert_eq!(Interval::match_slot(1, 1, 9.5).end_ticks(), 23);
    }

    #[test]
    fn test_error_display() {
        let err = Interval::new(2, 4, 12.0, 11.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid interval on week 2 day 4: end 11 must be after start 12"
        );
    }
}
