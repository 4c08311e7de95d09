//! Roster
//!
//! Player lookups over three independent stores: players, teams and leagues.
//! Players point at teams and teams point at leagues, so "every player in a
//! league" is assembled by walking the chain.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::{InvalidLeaguePolicy, PlayerService};
pub use config::Config;
pub use error::{ConfigError, DomainError};
