//! League domain entity
//!
//! The top-level grouping. Leagues own teams; nothing points at a league
//! except a team's `league_id`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub i32);

impl From<i32> for LeagueId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LeagueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LeagueId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    /// Inactive leagues are reported as invalid by `LeagueRepository::is_valid`
    pub active: bool,
}

impl League {
    pub fn is_valid(&self) -> bool {
        self.active
    }
}
