//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;

#[cfg(test)]
pub use repositories::MockExerciseReader;
pub use repositories::{ExerciseReader, TrackDetails, TrackReader, TrackWriter};
