//! PostgreSQL adapter for LeagueRepository
//!
//! A league is valid when its row exists and is marked active.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::entities::{League, LeagueId};
use crate::domain::ports::LeagueRepository;
use crate::entity::leagues;
use crate::error::DomainError;

/// PostgreSQL implementation of LeagueRepository
pub struct PostgresLeagueRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresLeagueRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeagueRepository for PostgresLeagueRepository {
    async fn is_valid(&self, league_id: &LeagueId) -> Result<bool, DomainError> {
        let result = leagues::Entity::find_by_id(league_id.0)
            .one(self.db.as_ref())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(League::from).is_some_and(|league| league.is_valid()))
    }
}

impl From<leagues::Model> for League {
    fn from(model: leagues::Model) -> Self {
        League {
            id: LeagueId::from(model.id),
            name: model.name,
            active: model.active,
        }
    }
}
