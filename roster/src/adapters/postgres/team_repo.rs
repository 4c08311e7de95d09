//! PostgreSQL adapter for TeamRepository

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{LeagueId, Team, TeamId};
use crate::domain::ports::TeamRepository;
use crate::entity::teams;
use crate::error::DomainError;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresTeamRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_by_league(&self, league_id: &LeagueId) -> Result<Vec<Team>, DomainError> {
        let results = teams::Entity::find()
            .filter(teams::Column::LeagueId.eq(league_id.0))
            .order_by_asc(teams::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Team {
            id: TeamId::from(model.id),
            name: model.name,
            founding_date: model.founding_date,
            league_id: LeagueId::from(model.league_id),
        }
    }
}
