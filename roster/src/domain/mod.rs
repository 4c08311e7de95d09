//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for players, teams and leagues
//! - `ports`: Repository traits the application layer depends on

pub mod entities;
pub mod ports;
