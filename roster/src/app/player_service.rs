//! Player service
//!
//! Answers read-only player queries, including the league roster, which has
//! to be rebuilt by walking league -> teams -> players because players do not
//! reference their league directly.

use std::sync::Arc;

use crate::domain::entities::{LeagueId, Player, PlayerId};
use crate::domain::ports::{LeagueRepository, PlayerRepository, TeamRepository};
use crate::error::DomainError;

/// What `get_for_league` does when the league repository reports an invalid id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidLeaguePolicy {
    /// Return an empty roster without consulting teams or players
    #[default]
    ShortCircuit,
    /// Resolve teams and players anyway
    Proceed,
}

impl std::fmt::Display for InvalidLeaguePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidLeaguePolicy::ShortCircuit => write!(f, "short_circuit"),
            InvalidLeaguePolicy::Proceed => write!(f, "proceed"),
        }
    }
}

impl std::str::FromStr for InvalidLeaguePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short_circuit" => Ok(InvalidLeaguePolicy::ShortCircuit),
            "proceed" => Ok(InvalidLeaguePolicy::Proceed),
            _ => Err(format!("Unknown invalid league policy: {}", s)),
        }
    }
}

/// Service for player lookups
///
/// Stateless apart from the injected repositories, so one instance can be
/// shared behind an `Arc` by any number of callers. Repository errors are
/// returned exactly as the repository produced them.
pub struct PlayerService<PR, TR, LR>
where
    PR: PlayerRepository,
    TR: TeamRepository,
    LR: LeagueRepository,
{
    players: Arc<PR>,
    teams: Arc<TR>,
    leagues: Arc<LR>,
    invalid_league_policy: InvalidLeaguePolicy,
}

impl<PR, TR, LR> PlayerService<PR, TR, LR>
where
    PR: PlayerRepository,
    TR: TeamRepository,
    LR: LeagueRepository,
{
    pub fn new(players: Arc<PR>, teams: Arc<TR>, leagues: Arc<LR>) -> Self {
        Self {
            players,
            teams,
            leagues,
            invalid_league_policy: InvalidLeaguePolicy::default(),
        }
    }

    pub fn with_invalid_league_policy(mut self, policy: InvalidLeaguePolicy) -> Self {
        self.invalid_league_policy = policy;
        self
    }

    pub fn invalid_league_policy(&self) -> InvalidLeaguePolicy {
        self.invalid_league_policy
    }

    /// Get a player by ID
    pub async fn get_by_id(&self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        self.players.find_by_id(id).await
    }

    /// Get every player in a league
    ///
    /// Players come back grouped by team, teams in the order the team
    /// repository returned them, players in the order the player repository
    /// returned them. Nothing is deduplicated.
    pub async fn get_for_league(&self, league_id: &LeagueId) -> Result<Vec<Player>, DomainError> {
        if !self.leagues.is_valid(league_id).await? {
            match self.invalid_league_policy {
                InvalidLeaguePolicy::ShortCircuit => {
                    tracing::debug!("League {} is not valid, returning empty roster", league_id);
                    return Ok(Vec::new());
                }
                InvalidLeaguePolicy::Proceed => {
                    tracing::warn!("League {} is not valid, resolving roster anyway", league_id);
                }
            }
        }

        let teams = self.teams.find_by_league(league_id).await?;

        let mut rosters = Vec::with_capacity(teams.len());
        for team in &teams {
            rosters.push(self.players.find_by_team(&team.id).await?);
        }

        let players: Vec<Player> = rosters.into_iter().flatten().collect();

        tracing::debug!(
            "Resolved {} players across {} teams for league {}",
            players.len(),
            teams.len(),
            league_id
        );

        Ok(players)
    }
}
