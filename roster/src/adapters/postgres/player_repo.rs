//! PostgreSQL adapter for PlayerRepository

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Player, PlayerId, TeamId};
use crate::domain::ports::PlayerRepository;
use crate::entity::players;
use crate::error::DomainError;

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresPlayerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        let result = players::Entity::find_by_id(id.0)
            .one(self.db.as_ref())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_team(&self, team_id: &TeamId) -> Result<Vec<Player>, DomainError> {
        let results = players::Entity::find()
            .filter(players::Column::TeamId.eq(team_id.0))
            .order_by_asc(players::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Player {
            id: PlayerId::from(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            team_id: TeamId::from(model.team_id),
        }
    }
}
