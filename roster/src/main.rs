//! Roster service entry point
//!
//! Wires the PostgreSQL adapters into a `PlayerService` and, when
//! `REPORT_LEAGUE_ID` is set, logs that league's roster.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster::adapters::{PostgresLeagueRepository, PostgresPlayerRepository, PostgresTeamRepository};
use roster::{Config, PlayerService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting roster service...");

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Arc::new(
        Database::connect(&config.database_url)
            .await
            .context("Failed to connect to database")?,
    );
    tracing::info!("Database connected");

    let player_repo = Arc::new(PostgresPlayerRepository::new(db.clone()));
    let team_repo = Arc::new(PostgresTeamRepository::new(db.clone()));
    let league_repo = Arc::new(PostgresLeagueRepository::new(db));

    let player_service = PlayerService::new(player_repo, team_repo, league_repo)
        .with_invalid_league_policy(config.invalid_league_policy);
    tracing::info!(
        "Player service ready (invalid league policy: {})",
        player_service.invalid_league_policy()
    );

    let Some(league_id) = config.report_league_id else {
        tracing::info!("REPORT_LEAGUE_ID not set, nothing to report");
        return Ok(());
    };

    let roster = player_service
        .get_for_league(&league_id)
        .await
        .with_context(|| format!("Failed to load roster for league {}", league_id))?;

    tracing::info!("League {} has {} players", league_id, roster.len());
    let today = Utc::now().date_naive();
    for player in &roster {
        tracing::info!(
            age = player.age_on(today),
            "{}",
            serde_json::to_string(player).context("Failed to serialize player")?
        );
    }

    Ok(())
}
