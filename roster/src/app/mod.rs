//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod player_service;

pub use player_service::{InvalidLeaguePolicy, PlayerService};
