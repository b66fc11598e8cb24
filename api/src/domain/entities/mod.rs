//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod exercise;
pub mod track;
pub mod track_exercise;
pub mod view_model;

pub use exercise::{Exercise, ExerciseClass, ExerciseId, Pace};
pub use track::{Track, TrackId};
pub use track_exercise::TrackExercise;
#[cfg(test)]
pub use view_model::PlacementDto;
pub use view_model::{ExerciseDto, TrackDetailsDto, TrackDto, TrackExerciseViewModel};
