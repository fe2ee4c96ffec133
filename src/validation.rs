//! Input validation for scheduling runs.
//!
//! Checks the structural integrity of loaded teams, venue fields and
//! leagues. Findings are diagnostics: the engine tolerates all of them
//! (a team in an unknown league is never scheduled, an inverted window
//! yields no candidate slots), so callers typically log the errors and
//! proceed.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{League, Team, VenueField, WeekAvailability};

/// Validation result: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Categories of validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same identifier.
    DuplicateId,
    /// A team references a league that was not loaded.
    UnknownLeague,
    /// An availability window ends before it starts.
    InvertedWindow,
}

/// Validates loaded input records.
///
/// Checks:
/// 1. No duplicate league IDs
/// 2. No duplicate team IDs
/// 3. No duplicate venue field IDs
/// 4. Every team's league reference points to a loaded league
/// 5. No availability window with start after end, on any weekday
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    teams: &[Team],
    venues: &[VenueField],
    leagues: &[League],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut league_ids = HashSet::new();
    for league in leagues {
        if !league_ids.insert(league.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate league ID: {}", league.id),
            ));
        }
    }

    let mut team_ids = HashSet::new();
    for team in teams {
        if !team_ids.insert(team.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate team ID: {}", team.id),
            ));
        }
        if !league_ids.contains(&team.league_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLeague,
                format!(
                    "team '{}' references unknown league {}",
                    team.name, team.league_id
                ),
            ));
        }
        check_windows(&mut errors, "team", &team.name, &team.availability);
    }

    let mut field_ids = HashSet::new();
    for venue in venues {
        if !field_ids.insert(venue.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate venue field ID: {}", venue.id),
            ));
        }
        check_windows(&mut errors, "venue field", &venue.name, &venue.availability);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_windows(
    errors: &mut Vec<ValidationError>,
    entity: &str,
    name: &str,
    availability: &WeekAvailability,
) {
    for day in 1..=7u8 {
        let window = availability.day(day);
        if window.start > window.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedWindow,
                format!(
                    "{entity} '{name}' has an inverted window on day {day}: [{}, {})",
                    window.start, window.end
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_leagues() -> Vec<League> {
        vec![League::new(1, "League 1", 1, 4, 2).with_season("2024")]
    }

    fn sample_teams() -> Vec<Team> {
        vec![Team::new(1, "Team A", 1), Team::new(2, "Team B", 1)]
    }

    fn sample_venues() -> Vec<VenueField> {
        vec![VenueField::new(1, 1, "Venue 1")]
    }

    #[test]
    fn test_valid_input_passes() {
        let result = validate_input(&sample_teams(), &sample_venues(), &sample_leagues());
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_team_id() {
        let mut teams = sample_teams();
        teams.push(Team::new(1, "Impostor", 1));
        let errors = validate_input(&teams, &sample_venues(), &sample_leagues()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("team ID: 1"));
    }

    #[test]
    fn test_duplicate_venue_field_id() {
        let mut venues = sample_venues();
        venues.push(VenueField::new(1, 1, "Clone"));
        let errors = validate_input(&sample_teams(), &venues, &sample_leagues()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_duplicate_league_id() {
        let mut leagues = sample_leagues();
        leagues.push(League::new(1, "Shadow", 1, 4, 2).with_season("2024"));
        let errors = validate_input(&sample_teams(), &sample_venues(), &leagues).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_unknown_league_reference() {
        let mut teams = sample_teams();
        teams.push(Team::new(3, "Orphan", 99));
        let errors = validate_input(&teams, &sample_venues(), &sample_leagues()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownLeague);
        assert!(errors[0].message.contains("Orphan"));
    }

    #[test]
    fn test_inverted_window() {
        let mut teams = sample_teams();
        teams[0] = Team::new(1, "Team A", 1).with_day_window(3, 18.0, 9.0);
        let errors = validate_input(&teams, &sample_venues(), &sample_leagues()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvertedWindow);
        assert!(errors[0].message.contains("day 3"));
    }

    #[test]
    fn test_collects_multiple_errors() {
        let teams = vec![
            Team::new(1, "Team A", 1),
            Team::new(1, "Dup", 1),
            Team::new(2, "Orphan", 42),
        ];
        let venues = vec![
            VenueField::new(1, 1, "V").with_day_window(2, 20.0, 8.0),
            VenueField::new(1, 1, "W"),
        ];
        let errors = validate_input(&teams, &venues, &sample_leagues()).unwrap_err();

        assert_eq!(errors.len(), 4);
    }
}
