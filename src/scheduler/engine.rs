//! Slot search and season orchestration.
//!
//! [`SeasonScheduler`] drives a whole run: for each league in input order
//! it expands the pairing sequence, then walks the season horizon with a
//! first-fit search per instance. After every league has had its initial
//! pass, leagues that fell short get one backfill pass over their
//! unscheduled instances.
//!
//! # Search order
//!
//! Per instance: week ascending over the league's season, weekday 1-7,
//! candidate start ascending within the teams' joint window, venue fields
//! ascending by (venue, field). The first slot where both teams and a
//! venue field are free wins and is never reconsidered. Venue indices are
//! shared across leagues, so an earlier league's bookings constrain later
//! leagues.
//!
//! # Determinism
//!
//! Every iteration order above is fixed by the inputs alone. Two runs
//! over the same records produce identical match sequences.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::models::{
    FieldId, Interval, League, LeagueId, Matchup, ScheduledMatch, Team, TeamId, VenueField,
};
use crate::scheduler::conflict::ConflictIndex;
use crate::scheduler::pairing::pairing_sequence;

/// Input container for a scheduling run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// All teams across all leagues.
    pub teams: Vec<Team>,
    /// All bookable venue fields, shared by every league.
    pub venues: Vec<VenueField>,
    /// Leagues in processing order.
    pub leagues: Vec<League>,
}

impl ScheduleRequest {
    /// Creates a request.
    pub fn new(teams: Vec<Team>, venues: Vec<VenueField>, leagues: Vec<League>) -> Self {
        Self {
            teams,
            venues,
            leagues,
        }
    }
}

/// Why a league was skipped without scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The league carries no season label.
    MissingSeasonLabel,
    /// Fewer than two distinct teams in the roster.
    TooFewTeams,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeasonLabel => write!(f, "missing season label"),
            Self::TooFewTeams => write!(f, "fewer than two teams"),
        }
    }
}

/// Per-league tallies for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueOutcome {
    /// League identifier.
    pub league_id: LeagueId,
    /// League display name.
    pub league_name: String,
    /// Matches the league required (pairing sequence length).
    pub required: usize,
    /// Matches committed across both passes.
    pub scheduled: usize,
    /// Set when the league was skipped outright.
    pub skipped: Option<SkipReason>,
}

impl LeagueOutcome {
    /// Matches still missing after backfill.
    #[inline]
    pub fn deficit(&self) -> usize {
        self.required - self.scheduled
    }
}

/// Result of a scheduling run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOutcome {
    /// Committed matches in commit order.
    pub matches: Vec<ScheduledMatch>,
    /// Per-league tallies, in league input order.
    pub leagues: Vec<LeagueOutcome>,
}

impl ScheduleOutcome {
    /// Number of committed matches.
    #[inline]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Total deficit across all leagues.
    pub fn total_deficit(&self) -> usize {
        self.leagues.iter().map(LeagueOutcome::deficit).sum()
    }
}

/// Deterministic first-fit season scheduler.
///
/// Processes leagues in input order against a venue pool shared by all of
/// them, then gives shorthanded leagues one backfill pass over their
/// leftover instances.
///
/// # Example
///
/// ```
/// use league_schedule::models::{League, Team, VenueField};
/// use league_schedule::scheduler::SeasonScheduler;
///
/// let leagues = vec![League::new(1, "Rec League", 1, 4, 2).with_season("2024")];
/// let teams = vec![
///     Team::new(1, "Rovers", 1).with_day_window(1, 9.0, 17.0),
///     Team::new(2, "United", 1).with_day_window(1, 9.0, 17.0),
/// ];
/// let venues = vec![VenueField::new(1, 1, "Riverside Park")];
///
/// let outcome = SeasonScheduler::new().schedule(&teams, &venues, &leagues);
/// assert_eq!(outcome.matches.len(), 2);
/// assert_eq!(outcome.matches[0].location, "Riverside Park Field #1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeasonScheduler;

impl SeasonScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules every league against the shared venue pool.
    pub fn schedule(
        &self,
        teams: &[Team],
        venues: &[VenueField],
        leagues: &[League],
    ) -> ScheduleOutcome {
        let mut state = RunState::new(teams, venues);

        // First record wins when a team id is duplicated.
        let mut team_lookup: HashMap<TeamId, &Team> = HashMap::new();
        for team in teams {
            team_lookup.entry(team.id).or_insert(team);
        }

        let mut outcome = ScheduleOutcome::default();
        let mut pending: Vec<BackfillItem<'_>> = Vec::new();

        for league in leagues {
            let Some(season) = league.season.clone() else {
                warn!("league '{}' has no season label, skipping", league.name);
                outcome.leagues.push(LeagueOutcome {
                    league_id: league.id,
                    league_name: league.name.clone(),
                    required: 0,
                    scheduled: 0,
                    skipped: Some(SkipReason::MissingSeasonLabel),
                });
                continue;
            };

            let roster: Vec<TeamId> = teams
                .iter()
                .filter(|t| t.league_id == league.id)
                .map(|t| t.id)
                .collect();
            let instances = pairing_sequence(&roster, league.games_per_team);

            if instances.is_empty() {
                let skipped = if league.games_per_team == 0 {
                    // Nothing required; the league completes trivially.
                    None
                } else {
                    warn!(
                        "league '{}' has fewer than two distinct teams, skipping",
                        league.name
                    );
                    Some(SkipReason::TooFewTeams)
                };
                outcome.leagues.push(LeagueOutcome {
                    league_id: league.id,
                    league_name: league.name.clone(),
                    required: 0,
                    scheduled: 0,
                    skipped,
                });
                continue;
            }

            let required = instances.len();
            info!(
                "scheduling league '{}': {} teams, {} matches required",
                league.name,
                roster.len(),
                required
            );

            let unscheduled = run_pass(league, &season, &instances, &team_lookup, &mut state, true);
            let scheduled = required - unscheduled.len();
            info!(
                "league '{}': initial pass placed {}/{} matches",
                league.name, scheduled, required
            );

            outcome.leagues.push(LeagueOutcome {
                league_id: league.id,
                league_name: league.name.clone(),
                required,
                scheduled,
                skipped: None,
            });

            if !unscheduled.is_empty() {
                pending.push(BackfillItem {
                    outcome_index: outcome.leagues.len() - 1,
                    league,
                    season,
                    unscheduled,
                });
            }
        }

        // Backfill runs only after every league has had its initial pass,
        // so retries see the complete booking picture.
        for item in pending {
            debug!(
                "backfill for league '{}': retrying {} instances",
                item.league.name,
                item.unscheduled.len()
            );
            let still = run_pass(
                item.league,
                &item.season,
                &item.unscheduled,
                &team_lookup,
                &mut state,
                false,
            );
            let recovered = item.unscheduled.len() - still.len();
            let entry = &mut outcome.leagues[item.outcome_index];
            entry.scheduled += recovered;

            if still.is_empty() {
                info!(
                    "league '{}': backfill placed the remaining {} matches",
                    item.league.name, recovered
                );
            } else {
                warn!(
                    "league '{}': {} of {} required matches could not be scheduled",
                    item.league.name,
                    still.len(),
                    entry.required
                );
            }
        }

        outcome.matches = state.matches;
        outcome
    }

    /// Schedules from a request container.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> ScheduleOutcome {
        self.schedule(&request.teams, &request.venues, &request.leagues)
    }
}

/// A league queued for the backfill sweep.
struct BackfillItem<'a> {
    outcome_index: usize,
    league: &'a League,
    season: String,
    unscheduled: Vec<Matchup>,
}

/// Mutable booking state for one run.
struct RunState<'a> {
    /// Venue fields in fixed scan order: ascending (venue, field).
    venue_catalog: Vec<&'a VenueField>,
    /// One conflict index per distinct venue field.
    venue_index: HashMap<FieldId, ConflictIndex>,
    /// One conflict index per team.
    team_index: HashMap<TeamId, ConflictIndex>,
    /// Matches each team has committed so far.
    games_played: HashMap<TeamId, u32>,
    /// Committed rows in commit order.
    matches: Vec<ScheduledMatch>,
}

impl<'a> RunState<'a> {
    fn new(teams: &[Team], venues: &'a [VenueField]) -> Self {
        let mut venue_catalog: Vec<&VenueField> = venues.iter().collect();
        venue_catalog.sort_by_key(|v| v.id);

        // Duplicate field ids share one index, so they also share bookings.
        let mut venue_index = HashMap::new();
        for venue in venues {
            venue_index.entry(venue.id).or_insert_with(ConflictIndex::new);
        }

        Self {
            venue_catalog,
            venue_index,
            team_index: teams.iter().map(|t| (t.id, ConflictIndex::new())).collect(),
            games_played: teams.iter().map(|t| (t.id, 0)).collect(),
            matches: Vec::new(),
        }
    }

    fn team_free(&self, id: TeamId, slot: &Interval) -> bool {
        self.team_index.get(&id).map_or(true, |ix| !ix.overlaps(slot))
    }

    fn venue_free(&self, id: FieldId, slot: &Interval) -> bool {
        self.venue_index.get(&id).map_or(true, |ix| !ix.overlaps(slot))
    }

    fn games_for(&self, id: TeamId) -> u32 {
        self.games_played.get(&id).copied().unwrap_or(0)
    }

    fn commit(
        &mut self,
        slot: Interval,
        venue: &VenueField,
        team_a: &Team,
        team_b: &Team,
        league: &League,
        season: &str,
    ) {
        self.team_index.entry(team_a.id).or_default().insert(&slot);
        self.team_index.entry(team_b.id).or_default().insert(&slot);
        self.venue_index.entry(venue.id).or_default().insert(&slot);
        *self.games_played.entry(team_a.id).or_insert(0) += 1;
        *self.games_played.entry(team_b.id).or_insert(0) += 1;

        self.matches.push(ScheduledMatch {
            team1_name: team_a.name.clone(),
            team2_name: team_b.name.clone(),
            week: slot.week,
            day: slot.day,
            start: slot.start,
            end: slot.end,
            season: season.to_string(),
            league: league.name.clone(),
            location: venue.location(),
        });
    }
}

/// Runs one scheduling pass over `instances`, in order.
///
/// Returns the instances that could not be placed, preserving their
/// relative order. When `enforce_cap` is set, an instance is skipped
/// without searching as soon as either team has already reached the
/// league's games-per-team target.
fn run_pass(
    league: &League,
    season: &str,
    instances: &[Matchup],
    teams: &HashMap<TeamId, &Team>,
    state: &mut RunState<'_>,
    enforce_cap: bool,
) -> Vec<Matchup> {
    let mut unscheduled = Vec::new();

    for &matchup in instances {
        // Pairing sequences are built from the team table, so both lookups
        // succeed for sequences produced by this crate.
        let (Some(team_a), Some(team_b)) = (
            teams.get(&matchup.first()).copied(),
            teams.get(&matchup.second()).copied(),
        ) else {
            unscheduled.push(matchup);
            continue;
        };

        if enforce_cap
            && (state.games_for(team_a.id) >= league.games_per_team
                || state.games_for(team_b.id) >= league.games_per_team)
        {
            debug!(
                "skipping {} vs {}: games-per-team target already reached",
                team_a.name, team_b.name
            );
            unscheduled.push(matchup);
            continue;
        }

        match find_slot(league, team_a, team_b, state) {
            Some((slot, venue)) => {
                debug!(
                    "scheduled {} vs {} on week {} day {} at {} ({})",
                    team_a.name,
                    team_b.name,
                    slot.week,
                    slot.day,
                    slot.start,
                    venue.location()
                );
                state.commit(slot, venue, team_a, team_b, league, season);
            }
            None => {
                debug!("no slot for {} vs {}", team_a.name, team_b.name);
                unscheduled.push(matchup);
            }
        }
    }

    unscheduled
}

/// First-fit search for one instance.
///
/// Walks weeks, days, candidate starts and the venue catalog in fixed
/// ascending order; the first slot where both teams and a venue field are
/// free is returned. `None` means the season horizon is exhausted.
fn find_slot<'a>(
    league: &League,
    team_a: &Team,
    team_b: &Team,
    state: &RunState<'a>,
) -> Option<(Interval, &'a VenueField)> {
    for week in league.weeks() {
        for day in 1..=7u8 {
            let Some(window) = team_a
                .availability
                .day(day)
                .intersect(&team_b.availability.day(day))
            else {
                continue;
            };

            for start in window.candidate_starts() {
                let slot = Interval::match_slot(week, day, start);
                if !state.team_free(team_a.id, &slot) || !state.team_free(team_b.id, &slot) {
                    continue;
                }

                for &venue in &state.venue_catalog {
                    if !venue.availability.day(day).covers(slot.start, slot.end) {
                        continue;
                    }
                    if !state.venue_free(venue.id, &slot) {
                        continue;
                    }
                    return Some((slot, venue));
                }
            }
        }
    }
    None
}
