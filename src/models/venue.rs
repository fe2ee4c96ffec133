//! Venue field model.
//!
//! A venue contributes one bookable record per playing field. A field is
//! identified by the (venue, field number) pair and is shared by every
//! league in a run.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{VenueId, WeekAvailability};

/// Identifier of one bookable field: a venue plus a field number.
///
/// The derived ordering is (venue, field) ascending, which fixes the venue
/// scan order during slot search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldId {
    /// Owning venue.
    pub venue_id: VenueId,
    /// Field number within the venue.
    pub field: u32,
}

impl FieldId {
    /// Creates a field identifier.
    pub fn new(venue_id: VenueId, field: u32) -> Self {
        Self { venue_id, field }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_field_{}", self.venue_id, self.field)
    }
}

/// A bookable venue field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueField {
    /// Field identifier.
    pub id: FieldId,
    /// Venue display name.
    pub name: String,
    /// When this field can be booked, per weekday.
    pub availability: WeekAvailability,
}

impl VenueField {
    /// Creates a field that is bookable all week.
    pub fn new(venue_id: VenueId, field: u32, name: impl Into<String>) -> Self {
        Self {
            id: FieldId::new(venue_id, field),
            name: name.into(),
            availability: WeekAvailability::default(),
        }
    }

    /// Sets the full week of availability windows.
    pub fn with_availability(mut self, availability: WeekAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Restricts one weekday (1-7) to `[start, end)`.
    pub fn with_day_window(mut self, day: u8, start: f64, end: f64) -> Self {
        self.availability = self.availability.with_day(day, start, end);
        self
    }

    /// Display string used in schedule output, e.g. `Riverside Park Field #2`.
    pub fn location(&self) -> String {
        format!("{} Field #{}", self.name, self.id.field)
    }
}
