//! Per-resource conflict index.
//!
//! Each team and each venue field owns one [`ConflictIndex`] recording the
//! intervals already booked against it. Storage is partitioned by
//! (week, day); within a partition bookings are kept ordered by start
//! time, so queries and inserts are both O(log k) in the partition size.
//!
//! Committed bookings never overlap, so an overlap query only has to
//! inspect the nearest booking starting before the query's end: any
//! earlier booking ends at or before that one's start.

use std::collections::{BTreeMap, HashMap};

use crate::models::Interval;

/// Booked intervals for a single resource.
#[derive(Debug, Clone, Default)]
pub struct ConflictIndex {
    /// (week, day) -> booking start -> booking end, in half-hour ticks.
    buckets: HashMap<(i32, u8), BTreeMap<i32, i32>>,
}

impl ConflictIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any stored booking overlaps the query interval.
    pub fn overlaps(&self, interval: &Interval) -> bool {
        let Some(bucket) = self.buckets.get(&(interval.week, interval.day)) else {
            return false;
        };
        match bucket.range(..interval.end_ticks()).next_back() {
            Some((_, &booked_end)) => booked_end > interval.start_ticks(),
            None => false,
        }
    }

    /// Records a booking.
    ///
    /// The caller must have established via [`overlaps`](Self::overlaps)
    /// that the interval is free; no overlap re-validation happens here.
    pub fn insert(&mut self, interval: &Interval) {
        self.buckets
            .entry((interval.week, interval.day))
            .or_default()
            .insert(interval.start_ticks(), interval.end_ticks());
    }

    /// Total number of bookings across all (week, day) buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    /// Whether the index holds no bookings.
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(BTreeMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index_has_no_overlap() {
        let index = ConflictIndex::new();
        assert!(!index.overlaps(&Interval::match_slot(1, 1, 9.0)));
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_overlap_detected_after_insert() {
        let mut index = ConflictIndex::new();
        index.insert(&Interval::match_slot(1, 1, 9.0));

        assert!(index.overlaps(&Interval::match_slot(1, 1, 9.0)));
        assert!(index.overlaps(&Interval::match_slot(1, 1, 10.5)));
        assert!(index.overlaps(&Interval::match_slot(1, 1, 7.5)));
    }

    #[test]
    fn test_touching_bookings_are_free() {
        let mut index = ConflictIndex::new();
        index.insert(&Interval::match_slot(1, 1, 9.0));

        assert!(!index.overlaps(&Interval::match_slot(1, 1, 11.0)));
        assert!(!index.overlaps(&Interval::match_slot(1, 1, 7.0)));
    }

    #[test]
    fn test_buckets_are_independent() {
        let mut index = ConflictIndex::new();
        index.insert(&Interval::match_slot(1, 1, 9.0));

        assert!(!index.overlaps(&Interval::match_slot(1, 2, 9.0)));
        assert!(!index.overlaps(&Interval::match_slot(2, 1, 9.0)));
    }

    #[test]
    fn test_gap_between_bookings() {
        let mut index = ConflictIndex::new();
        index.insert(&Interval::match_slot(1, 1, 8.0));
        index.insert(&Interval::match_slot(1, 1, 14.0));

        assert!(!index.overlaps(&Interval::match_slot(1, 1, 10.0)));
        assert!(!index.overlaps(&Interval::match_slot(1, 1, 12.0)));
        assert!(index.overlaps(&Interval::match_slot(1, 1, 13.0)));
    }

    #[test]
    fn test_len_counts_all_buckets() {
        let mut index = ConflictIndex::new();
        index.insert(&Interval::match_slot(1, 1, 8.0));
        index.insert(&Interval::match_slot(1, 2, 8.0));
        index.insert(&Interval::match_slot(2, 1, 8.0));

        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_packed_day_reports_only_true_gap() {
        let mut index = ConflictIndex::new();
        for hour in [8.0, 10.0, 12.0, 16.0, 18.0] {
            index.insert(&Interval::match_slot(3, 5, hour));
        }

        assert!(!index.overlaps(&Interval::match_slot(3, 5, 14.0)));
        for hour in [8.5, 11.0, 13.5, 15.0, 17.0, 19.5] {
            assert!(
                index.overlaps(&Interval::match_slot(3, 5, hour)),
                "start {hour} should collide"
            );
        }
    }
}
