//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Absence is never an error: lookups return `Ok(None)`, `Ok(vec![])` or
//! `Ok(false)`. An `Err` means the store itself failed.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{LeagueId, Player, PlayerId, Team, TeamId};
use crate::error::DomainError;

/// Repository for Player entities
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find a player by ID
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, DomainError>;

    /// Find all players on a team, in storage order
    async fn find_by_team(&self, team_id: &TeamId) -> Result<Vec<Player>, DomainError>;
}

/// Repository for Team entities
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find all teams in a league, in storage order
    async fn find_by_league(&self, league_id: &LeagueId) -> Result<Vec<Team>, DomainError>;
}

/// Repository for League entities
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Check whether a league ID refers to a valid league
    async fn is_valid(&self, league_id: &LeagueId) -> Result<bool, DomainError>;
}
