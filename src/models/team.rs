//! Team model.

use serde::{Deserialize, Serialize};

use super::{LeagueId, TeamId, WeekAvailability};

/// A team participating in a league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// League this team belongs to.
    pub league_id: LeagueId,
    /// When this team can play, per weekday.
    pub availability: WeekAvailability,
}

impl Team {
    /// Creates a team that is available all week.
    pub fn new(id: TeamId, name: impl Into<String>, league_id: LeagueId) -> Self {
        Self {
            id,
            name: name.into(),
            league_id,
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayWindow;

    #[test]
    fn test_team_builder() {
        let team = Team::new(7, "Rovers", 2)
            .with_day_window(1, 9.0, 17.0)
            .with_day_window(6, 8.0, 12.0);

        assert_eq!(team.id, 7);
        assert_eq!(team.name, "Rovers");
        assert_eq!(team.league_id, 2);
        assert_eq!(team.availability.day(1), DayWindow::new(9.0, 17.0));
        assert_eq!(team.availability.day(6), DayWindow::new(8.0, 12.0));
        assert_eq!(team.availability.day(3), DayWindow::all_day());
    }
}
