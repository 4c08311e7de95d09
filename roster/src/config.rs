use std::env;

use crate::app::InvalidLeaguePolicy;
use crate::domain::entities::LeagueId;
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// What `PlayerService::get_for_league` does with a league that fails validation
    pub invalid_league_policy: InvalidLeaguePolicy,
    /// League whose roster is reported on startup, if any
    pub report_league_id: Option<LeagueId>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let invalid_league_policy: InvalidLeaguePolicy = match lookup("INVALID_LEAGUE_POLICY") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "INVALID_LEAGUE_POLICY",
                value,
            })?,
            None => InvalidLeaguePolicy::default(),
        };

        let report_league_id: Option<LeagueId> = lookup("REPORT_LEAGUE_ID")
            .map(|value| {
                value.parse().map_err(|_| ConfigError::Invalid {
                    key: "REPORT_LEAGUE_ID",
                    value,
                })
            })
            .transpose()?;

        Ok(Self {
            database_url,
            invalid_league_policy,
            report_league_id,
        })
    }
}
