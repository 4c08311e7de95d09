//! SeaORM table models
//!
//! Mirrors of the `leagues`, `teams` and `players` tables. Domain code never
//! sees these; adapters convert them with `From<Model>`.

pub mod leagues;
pub mod players;
pub mod teams;
