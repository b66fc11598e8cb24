//! Transfer shapes
//!
//! Plain data moved between the HTTP boundary, the track service and the
//! remote DogRally API. Field names follow the JSON contract, not the tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::exercise::{Exercise, ExerciseClass, ExerciseId, Pace};
use super::track::{Track, TrackId};
use super::track_exercise::TrackExercise;

/// Track as submitted by, or shown to, a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackDto {
    #[serde(default)]
    pub id: TrackId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub user_id: String,
}

impl TrackDto {
    /// The track row this transfer record describes
    pub fn to_track(&self) -> Track {
        Track {
            id: self.id,
            name: self.name.clone(),
            date: self.date,
            user_id: self.user_id.clone(),
        }
    }
}

impl From<&Track> for TrackDto {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id,
            name: track.name.clone(),
            date: track.date,
            user_id: track.user_id.clone(),
        }
    }
}

impl From<Track> for TrackDto {
    fn from(track: Track) -> Self {
        Self {
            id: track.id,
            name: track.name,
            date: track.date,
            user_id: track.user_id,
        }
    }
}

/// Exercise as submitted by, or shown to, a client
///
/// Only `id` is required on input; clients placing an exercise usually send
/// the id, a name and the position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDto {
    pub id: ExerciseId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub movement: Pace,
    #[serde(default)]
    pub side_shift: bool,
    #[serde(default)]
    pub illustration_path: String,
    #[serde(default)]
    pub class: ExerciseClass,
    #[serde(default)]
    pub sign_number: i32,
    #[serde(default)]
    pub position_x: i32,
    #[serde(default)]
    pub position_y: i32,
}

impl ExerciseDto {
    /// A transfer record carrying only an id and a name, everything else defaulted
    pub fn named(id: i32, name: &str) -> Self {
        Self {
            id: ExerciseId(id),
            name: name.to_string(),
            movement: Pace::default(),
            side_shift: false,
            illustration_path: String::new(),
            class: ExerciseClass::default(),
            sign_number: 0,
            position_x: 0,
            position_y: 0,
        }
    }
}

impl From<&Exercise> for ExerciseDto {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.clone(),
            movement: exercise.movement,
            side_shift: exercise.side_shift,
            illustration_path: exercise.illustration_path.clone(),
            class: exercise.class,
            sign_number: exercise.sign_number,
            position_x: exercise.position_x,
            position_y: exercise.position_y,
        }
    }
}

impl From<Exercise> for ExerciseDto {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
            movement: exercise.movement,
            side_shift: exercise.side_shift,
            illustration_path: exercise.illustration_path,
            class: exercise.class,
            sign_number: exercise.sign_number,
            position_x: exercise.position_x,
            position_y: exercise.position_y,
        }
    }
}

/// One track together with its ordered exercises
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackExerciseViewModel {
    #[serde(default)]
    pub track: TrackDto,
    #[serde(default)]
    pub exercises: Vec<ExerciseDto>,
}

impl TrackExerciseViewModel {
    /// Form model for a track that does not exist yet
    pub fn for_new_track(exercises: Vec<ExerciseDto>) -> Self {
        Self {
            track: TrackDto::default(),
            exercises,
        }
    }

    /// One placement per submitted exercise, in submission order
    pub fn placements(&self) -> Vec<TrackExercise> {
        self.exercises
            .iter()
            .map(|exercise| TrackExercise {
                track_id: self.track.id,
                exercise_id: exercise.id,
                position_x: exercise.position_x,
                position_y: exercise.position_y,
            })
            .collect()
    }
}

/// A placement as shown to a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDto {
    pub exercise_id: ExerciseId,
    pub position_x: i32,
    pub position_y: i32,
}

impl From<TrackExercise> for PlacementDto {
    fn from(placement: TrackExercise) -> Self {
        Self {
            exercise_id: placement.exercise_id,
            position_x: placement.position_x,
            position_y: placement.position_y,
        }
    }
}

/// A stored track and its placements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDetailsDto {
    pub track: TrackDto,
    pub exercises: Vec<PlacementDto>,
}

impl TrackDetailsDto {
    pub fn new(track: Track, placements: Vec<TrackExercise>) -> Self {
        Self {
            track: track.into(),
            exercises: placements.into_iter().map(PlacementDto::from).collect(),
        }
    }

    /// Back to domain rows; placements take the id of the enclosing track
    pub fn into_parts(self) -> (Track, Vec<TrackExercise>) {
        let track = self.track.to_track();
        let placements = self
            .exercises
            .into_iter()
            .map(|p| TrackExercise {
                track_id: track.id,
                exercise_id: p.exercise_id,
                position_x: p.position_x,
                position_y: p.position_y,
            })
            .collect();
        (track, placements)
    }
}
