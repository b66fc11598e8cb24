//! In-memory adapters
//!
//! A relational store kept in process memory, and repository implementations
//! over it. Used when no database or remote API is configured, and as the
//! fake backend in tests.

pub mod exercise_repo;
pub mod seed;
pub mod store;
pub mod track_repo;

pub use exercise_repo::InMemoryExerciseRepository;
pub use seed::seed_demo_data;
pub use store::InMemoryStore;
pub use track_repo::InMemoryTrackRepository;
