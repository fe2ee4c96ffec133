//! Matchup model.
//!
//! An unordered pair of teams required to play each other. The pair is
//! normalized so the smaller identifier always comes first, which makes
//! matchups directly comparable and gives them a total order.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// An unordered pair of teams, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Matchup {
    first: TeamId,
    second: TeamId,
}

impl Matchup {
    /// Creates a matchup between two teams, normalizing the order.
    pub fn new(a: TeamId, b: TeamId) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// The smaller team id.
    #[inline]
    pub fn first(&self) -> TeamId {
        self.first
    }

    /// The larger team id.
    #[inline]
    pub fn second(&self) -> TeamId {
        self.second
    }
}
