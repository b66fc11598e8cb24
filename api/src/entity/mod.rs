//! SeaORM entities
//!
//! Table mappings for the PostgreSQL backend. See `migrations/` for the schema.

pub mod exercises;
pub mod track_exercises;
pub mod tracks;
