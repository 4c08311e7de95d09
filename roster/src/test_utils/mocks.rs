//! In-memory implementations of the repository ports
//!
//! These store data in memory, keep insertion order, and allow tests to
//! verify what was asked of them.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{League, LeagueId, Player, PlayerId, Team, TeamId};
use crate::domain::ports::{LeagueRepository, PlayerRepository, TeamRepository};
use crate::error::DomainError;

fn mock_failure() -> DomainError {
    DomainError::Database("Mock failure".to_string())
}

// ============================================================================
// In-Memory Player Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<Vec<Player>>>,
    /// Team IDs passed to `find_by_team`, in call order
    pub team_lookups: Arc<RwLock<Vec<TeamId>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let repo = Self::default();
        *repo.should_fail.write().unwrap() = true;
        repo
    }

    /// Pre-populate with a player for testing
    pub fn with_player(self, player: Player) -> Self {
        self.players.write().unwrap().push(player);
        self
    }

    pub fn with_players(self, players: impl IntoIterator<Item = Player>) -> Self {
        self.players.write().unwrap().extend(players);
        self
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(mock_failure());
        }

        let players = self.players.read().unwrap();
        Ok(players.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_by_team(&self, team_id: &TeamId) -> Result<Vec<Player>, DomainError> {
        self.team_lookups.write().unwrap().push(*team_id);

        if *self.should_fail.read().unwrap() {
            return Err(mock_failure());
        }

        let players = self.players.read().unwrap();
        Ok(players
            .iter()
            .filter(|p| p.team_id == *team_id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Team Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<Vec<Team>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let repo = Self::default();
        *repo.should_fail.write().unwrap() = true;
        repo
    }

    /// Pre-populate with a team for testing
    pub fn with_team(self, team: Team) -> Self {
        self.teams.write().unwrap().push(team);
        self
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_by_league(&self, league_id: &LeagueId) -> Result<Vec<Team>, DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(mock_failure());
        }

        let teams = self.teams.read().unwrap();
        Ok(teams
            .iter()
            .filter(|t| t.league_id == *league_id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory League Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryLeagueRepository {
    leagues: Arc<RwLock<HashMap<LeagueId, League>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryLeagueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let repo = Self::default();
        *repo.should_fail.write().unwrap() = true;
        repo
    }

    /// Pre-populate with a league for testing
    pub fn with_league(self, league: League) -> Self {
        self.leagues.write().unwrap().insert(league.id, league);
        self
    }

    /// Register an active league with a generated name
    pub fn with_valid(self, id: LeagueId) -> Self {
        self.with_league(League {
            id,
            name: format!("League {}", id),
            active: true,
        })
    }
}

#[async_trait]
impl LeagueRepository for InMemoryLeagueRepository {
    async fn is_valid(&self, league_id: &LeagueId) -> Result<bool, DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(mock_failure());
        }

        let leagues = self.leagues.read().unwrap();
        Ok(leagues.get(league_id).is_some_and(League::is_valid))
    }
}
