//! Per-weekday availability windows.
//!
//! Teams and venue fields declare when they can play as one `[start, end)`
//! window per weekday, in hours. A missing window means the whole day,
//! `[0, 24)`. Candidate match starts are enumerated on the half hour.

use serde::{Deserialize, Serialize};

use super::MATCH_DURATION_HOURS;

/// A single day's availability window `[start, end)`, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayWindow {
    /// First available hour (inclusive).
    pub start: f64,
    /// Last available hour (exclusive).
    pub end: f64,
}

impl Default for DayWindow {
    fn default() -> Self {
        Self::all_day()
    }
}

impl DayWindow {
    /// Creates a window.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The whole-day window `[0, 24)`.
    pub fn all_day() -> Self {
        Self::new(0.0, 24.0)
    }

    /// Hours spanned by this window.
    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Intersects two windows.
    ///
    /// Returns `None` when the common window is shorter than one match
    /// duration; a match must fit entirely inside the intersection.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end - start < MATCH_DURATION_HOURS {
            return None;
        }
        Some(Self::new(start, end))
    }

    /// Whether `[start, end)` lies entirely inside this window.
    #[inline]
    pub fn covers(&self, start: f64, end: f64) -> bool {
        start >= self.start && end <= self.end
    }

    /// Half-hour-aligned match start times within this window, ascending.
    ///
    /// A start `s` qualifies when `s >= start` and the whole match fits:
    /// `s + MATCH_DURATION_HOURS <= end`.
    pub fn candidate_starts(&self) -> impl Iterator<Item = f64> {
        let first = (self.start * 2.0).ceil() as i32;
        let last = ((self.end - MATCH_DURATION_HOURS) * 2.0).floor() as i32;
        (first..=last).map(|tick| tick as f64 / 2.0)
    }
}

/// A week of availability windows, indexed by weekday 1-7.
///
/// Defaults to the whole day on every weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekAvailability {
    days: [DayWindow; 7],
}

impl Default for WeekAvailability {
    fn default() -> Self {
        Self {
            days: [DayWindow::all_day(); 7],
        }
    }
}

impl WeekAvailability {
    /// Availability with every weekday fully open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from seven explicit windows, day 1 first.
    pub fn from_days(days: [DayWindow; 7]) -> Self {
        Self { days }
    }

    /// Returns the window for a weekday (1-7).
    #[inline]
    pub fn day(&self, day: u8) -> DayWindow {
        self.days[usize::from(day - 1)]
    }

    /// Replaces one weekday's window (1-7).
    pub fn with_day(mut self, day: u8, start: f64, end: f64) -> Self {
        self.days[usize::from(day - 1)] = DayWindow::new(start, end);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_basic() {
        let a = DayWindow::new(8.0, 16.0);
        let b = DayWindow::new(9.0, 17.0);
        let joint = a.intersect(&b).unwrap();
        assert!((joint.start - 9.0).abs() < 1e-10);
        assert!((joint.end - 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_intersect_too_short() {
        let a = DayWindow::new(8.0, 10.0);
        let b = DayWindow::new(9.0, 17.0);
        assert!(a.intersect(&b).is_none());

        // Exactly one match length is enough.
        let c = DayWindow::new(8.0, 11.0);
        assert!(c.intersect(&b).is_some());
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = DayWindow::new(8.0, 10.0);
        let b = DayWindow::new(18.0, 22.0);
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn test_candidate_starts() {
        let window = DayWindow::new(9.0, 16.0);
        let starts: Vec<f64> = window.candidate_starts().collect();
        assert_eq!(starts.len(), 11);
        assert!((starts[0] - 9.0).abs() < 1e-10);
        assert!((starts[1] - 9.5).abs() < 1e-10);
        assert!((starts[10] - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_candidate_starts_snap_up_to_half_hour() {
        // 8.25 is not a valid start; the first candidate is 8.5.
        let window = DayWindow::new(8.25, 12.0);
        let starts: Vec<f64> = window.candidate_starts().collect();
        assert!((starts[0] - 8.5).abs() < 1e-10);
        assert!((starts[starts.len() - 1] - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_candidate_starts_empty_when_too_narrow() {
        let window = DayWindow::new(9.0, 10.75);
        assert_eq!(window.candidate_starts().count(), 0);
    }

    #[test]
    fn test_covers() {
        let window = DayWindow::new(8.0, 18.0);
        assert!(window.covers(8.0, 10.0));
        assert!(window.covers(16.0, 18.0));
        assert!(!window.covers(7.5, 9.5));
        assert!(!window.covers(17.0, 19.0));
    }

    #[test]
    fn test_week_defaults_open() {
        let week = WeekAvailability::new();
        for day in 1..=7 {
            assert_eq!(week.day(day), DayWindow::all_day());
        }
    }

    #[test]
    fn test_with_day_replaces_single_window() {
        let week = WeekAvailability::new().with_day(3, 17.0, 21.0);
        assert_eq!(week.day(3), DayWindow::new(17.0, 21.0));
        assert_eq!(week.day(2), DayWindow::all_day());
        assert_eq!(week.day(4), DayWindow::all_day());
    }
}
