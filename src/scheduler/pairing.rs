//! Pairing generation.
//!
//! Expands a league roster and games-per-team target into the ordered
//! sequence of match instances the engine will try to place. The sequence
//! is the scheduling attempt order: the first-fit search hands the
//! earliest slots to the earliest instances, so this order is part of the
//! output contract.
//!
//! # Distribution
//!
//! With `n` distinct teams and a target of `g` games per team, a league
//! requires `floor(g * n / 2)` matches, spread over all `n * (n - 1) / 2`
//! unordered pairs. Every pair plays `base = required / pairs` times,
//! listed consecutively per pair in ascending pair order, and the first
//! `required % pairs` pairs play once more, appended after the base
//! rounds. Pair counts therefore never differ by more than one.

use crate::models::{Matchup, TeamId};

/// Total matches a league with `team_count` distinct teams requires.
#[inline]
pub fn required_total(team_count: usize, games_per_team: u32) -> usize {
    games_per_team as usize * team_count / 2
}

/// Builds the ordered instance sequence for one league.
///
/// `team_ids` may contain duplicates and arrive in any order; the roster
/// is deduplicated and sorted ascending before pairs are formed. Returns
/// an empty sequence when fewer than two distinct teams remain.
pub fn pairing_sequence(team_ids: &[TeamId], games_per_team: u32) -> Vec<Matchup> {
    let mut ids = team_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    if ids.len() < 2 {
        return Vec::new();
    }

    let mut pairs = Vec::with_capacity(ids.len() * (ids.len() - 1) / 2);
    for (i, &first) in ids.iter().enumerate() {
        for &second in &ids[i + 1..] {
            pairs.push(Matchup::new(first, second));
        }
    }

    let required = required_total(ids.len(), games_per_team);
    let base = required / pairs.len();
    let extra = required % pairs.len();

    let mut sequence = Vec::with_capacity(required);
    for &pair in &pairs {
        for _ in 0..base {
            sequence.push(pair);
        }
    }
    sequence.extend_from_slice(&pairs[..extra]);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_two_teams() {
        let seq = pairing_sequence(&[1, 2], 2);
        assert_eq!(seq, vec![Matchup::new(1, 2), Matchup::new(1, 2)]);
    }

    #[test]
    fn test_single_round_robin() {
        let seq = pairing_sequence(&[1, 2, 3], 2);
        assert_eq!(
            seq,
            vec![Matchup::new(1, 2), Matchup::new(1, 3), Matchup::new(2, 3)]
        );
    }

    #[test]
    fn test_extra_games_go_to_first_pairs() {
        // 3 teams at 3 games each: floor(9/2) = 4 over 3 pairs.
        let seq = pairing_sequence(&[1, 2, 3], 3);
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[3], Matchup::new(1, 2));
    }

    #[test]
    fn test_base_games_are_consecutive() {
        // 6 teams at 10 games each: 30 over 15 pairs, every pair twice.
        let seq = pairing_sequence(&[1, 2, 3, 4, 5, 6], 10);
        assert_eq!(seq.len(), 30);
        for chunk in seq.chunks(2) {
            assert_eq!(chunk[0], chunk[1]);
        }
        assert_eq!(seq[0], Matchup::new(1, 2));
        assert_eq!(seq[29], Matchup::new(5, 6));
    }

    #[test]
    fn test_roster_is_deduplicated_and_sorted() {
        let seq = pairing_sequence(&[5, 3, 5, 1], 2);
        assert_eq!(
            seq,
            vec![Matchup::new(1, 3), Matchup::new(1, 5), Matchup::new(3, 5)]
        );
    }

    #[test]
    fn test_too_few_teams() {
        assert!(pairing_sequence(&[], 4).is_empty());
        assert!(pairing_sequence(&[7], 4).is_empty());
        assert!(pairing_sequence(&[7, 7, 7], 4).is_empty());
    }

    #[test]
    fn test_zero_games() {
        assert!(pairing_sequence(&[1, 2, 3], 0).is_empty());
        assert_eq!(required_total(3, 0), 0);
    }

    #[test]
    fn test_fair_distribution_bound() {
        // 5 teams at 7 games each: 17 over 10 pairs. Every pair appears
        // once or twice, and exactly 7 pairs get the higher count.
        let ids: Vec<TeamId> = (1..=5).collect();
        let seq = pairing_sequence(&ids, 7);
        assert_eq!(seq.len(), 17);

        let mut counts: HashMap<Matchup, usize> = HashMap::new();
        for m in &seq {
            *counts.entry(*m).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 10);
        assert!(counts.values().all(|&c| c == 1 || c == 2));
        assert_eq!(counts.values().filter(|&&c| c == 2).count(), 7);
    }
}
