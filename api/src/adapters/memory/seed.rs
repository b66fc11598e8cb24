//! Demo data for the in-memory backend

use chrono::Utc;

use super::store::InMemoryStore;
use crate::domain::entities::{
    Exercise, ExerciseClass, ExerciseId, Pace, Track, TrackExercise, TrackId,
};
use crate::error::DomainError;

pub fn demo_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: ExerciseId(1),
            name: "Højresving".to_string(),
            movement: Pace::Walk,
            side_shift: false,
            illustration_path: "/images/exercises/3.png".to_string(),
            class: ExerciseClass::Beginner,
            sign_number: 3,
            position_x: 10,
            position_y: 75,
        },
        Exercise {
            id: ExerciseId(2),
            name: "Venstresving".to_string(),
            movement: Pace::Walk,
            side_shift: false,
            illustration_path: "/images/exercises/4.png".to_string(),
            class: ExerciseClass::Beginner,
            sign_number: 4,
            position_x: 10,
            position_y: 150,
        },
    ]
}

pub fn demo_tracks() -> Vec<Track> {
    let now = Utc::now();
    vec![
        Track {
            id: TrackId(1),
            name: "Track 1".to_string(),
            date: now,
            user_id: "user1".to_string(),
        },
        Track {
            id: TrackId(2),
            name: "Track 2".to_string(),
            date: now,
            user_id: "user2".to_string(),
        },
    ]
}

pub fn demo_track_exercises() -> Vec<TrackExercise> {
    [(1, 1, 10, 20), (1, 2, 30, 40), (2, 1, 15, 25), (2, 2, 35, 45)]
        .into_iter()
        .map(|(track, exercise, x, y)| TrackExercise {
            track_id: TrackId(track),
            exercise_id: ExerciseId(exercise),
            position_x: x,
            position_y: y,
        })
        .collect()
}

/// Seed the store with the demo exercises, tracks and placements in one commit
pub fn seed_demo_data(store: &InMemoryStore) -> Result<usize, DomainError> {
    let mut changes = store.begin();
    changes
        .add_range(demo_exercises())
        .add_range(demo_tracks())
        .add_range(demo_track_exercises());
    store.save(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_fills_all_tables() {
        let store = InMemoryStore::new();
        assert_eq!(seed_demo_data(&store).unwrap(), 8);
        assert_eq!(store.exercises().unwrap().len(), 2);
        assert_eq!(store.tracks().unwrap().len(), 2);
        assert_eq!(store.track_exercises().unwrap().len(), 4);
    }

    #[test]
    fn seeding_twice_fails() {
        let store = InMemoryStore::new();
        seed_demo_data(&store).unwrap();
        assert!(matches!(
            seed_demo_data(&store),
            Err(DomainError::AlreadyExists(_))
        ));
        assert_eq!(store.exercises().unwrap().len(), 2);
    }

    #[test]
    fn demo_placements_reference_demo_rows() {
        let exercise_ids: Vec<_> = demo_exercises().iter().map(|e| e.id).collect();
        let track_ids: Vec<_> = demo_tracks().iter().map(|t| t.id).collect();
        for placement in demo_track_exercises() {
            assert!(exercise_ids.contains(&placement.exercise_id));
            assert!(track_ids.contains(&placement.track_id));
        }
    }
}
