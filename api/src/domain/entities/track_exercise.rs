//! Placement of an exercise on a track

use serde::Serialize;

use super::exercise::ExerciseId;
use super::track::TrackId;

/// Join row between a track and an exercise, carrying the position of this
/// particular placement. The same exercise may appear on a track more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackExercise {
    pub track_id: TrackId,
    pub exercise_id: ExerciseId,
    pub position_x: i32,
    pub position_y: i32,
}
