//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod league_repo;
pub mod player_repo;
pub mod team_repo;


pub use league_repo::PostgresLeagueRepository;
pub use player_repo::PostgresPlayerRepository;
pub use team_repo::PostgresTeamRepository;
