//! Domain entities
//!
//! Pure domain models representing leagues, their teams and the players on them.
//! These are separate from the SeaORM table models in the `entity` module.

pub mod league;
pub mod player;
pub mod team;

pub use league::{League, LeagueId};
pub use player::{Player, PlayerId};
pub use team::{Team, TeamId};
