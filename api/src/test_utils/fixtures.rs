//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use chrono::Utc;

use crate::adapters::memory::{
    seed_demo_data, InMemoryExerciseRepository, InMemoryStore, InMemoryTrackRepository,
};
use crate::app::RequestContext;
use crate::domain::entities::{
    Exercise, ExerciseClass, ExerciseDto, ExerciseId, Pace, Track, TrackDto,
    TrackExerciseViewModel, TrackId,
};
use crate::AppState;

/// Create a test exercise with default metadata
pub fn test_exercise(id: i32, name: &str) -> Exercise {
    Exercise {
        id: ExerciseId(id),
        name: name.to_string(),
        movement: Pace::Walk,
        side_shift: false,
        illustration_path: format!("/images/exercises/{}.png", id),
        class: ExerciseClass::Beginner,
        sign_number: id,
        position_x: 10,
        position_y: 75 * id,
    }
}

/// Create a test track owned by `user_id`
pub fn test_track(id: i32, user_id: &str) -> Track {
    Track {
        id: TrackId(id),
        name: format!("Track {}", id),
        date: Utc::now(),
        user_id: user_id.to_string(),
    }
}

/// A store holding the demo exercises, tracks and placements
pub fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    seed_demo_data(&store).expect("seeding an empty store succeeds");
    store
}

/// Application state backed by `store`
pub fn memory_state(store: Arc<InMemoryStore>) -> AppState {
    let tracks = Arc::new(InMemoryTrackRepository::new(store.clone()));
    AppState::new(
        Arc::new(InMemoryExerciseRepository::new(store)),
        tracks.clone(),
        tracks,
        "in-memory",
    )
}

/// A submitted form for a new track placing both demo exercises
pub fn new_track_view_model(track_id: i32, user_id: &str) -> TrackExerciseViewModel {
    let mut first = ExerciseDto::named(1, "Exercise 1");
    first.position_x = 10;
    first.position_y = 20;
    let mut second = ExerciseDto::named(2, "Exercise 2");
    second.position_x = 30;
    second.position_y = 40;

    TrackExerciseViewModel {
        track: TrackDto {
            id: TrackId(track_id),
            name: format!("Track {}", track_id),
            date: Utc::now(),
            user_id: user_id.to_string(),
        },
        exercises: vec![first, second],
    }
}

/// A context carrying a credential for "user1"
pub fn authed_context() -> RequestContext {
    RequestContext::anonymous()
        .with_token("test-token")
        .with_user("user1")
}
