//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod dogrally;
pub mod memory;
pub mod postgres;

pub use dogrally::DogRallyApiClient;
pub use memory::{InMemoryExerciseRepository, InMemoryStore, InMemoryTrackRepository};
pub use postgres::{PostgresExerciseRepository, PostgresTrackRepository};
