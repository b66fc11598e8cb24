//! In-memory relational store
//!
//! Three tables held in insertion order behind one lock. Writes go through a
//! [`ChangeSet`]: rows are staged on a value owned by the caller and applied
//! together by [`InMemoryStore::save`], so a failed save leaves every table
//! untouched and concurrent writers never observe each other's staged rows.

use std::collections::HashSet;
#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Exercise, ExerciseId, Track, TrackExercise, TrackId};
use crate::error::DomainError;

/// A row of any of the three tables
#[derive(Debug, Clone)]
pub enum Row {
    Exercise(Exercise),
    Track(Track),
    TrackExercise(TrackExercise),
}

impl From<Exercise> for Row {
    fn from(exercise: Exercise) -> Self {
        Row::Exercise(exercise)
    }
}

impl From<Track> for Row {
    fn from(track: Track) -> Self {
        Row::Track(track)
    }
}

impl From<TrackExercise> for Row {
    fn from(track_exercise: TrackExercise) -> Self {
        Row::TrackExercise(track_exercise)
    }
}

/// Rows staged for a single commit
#[derive(Debug, Default)]
pub struct ChangeSet {
    rows: Vec<Row>,
}

impl ChangeSet {
    pub fn add(&mut self, row: impl Into<Row>) -> &mut Self {
        self.rows.push(row.into());
        self
    }

    pub fn add_range<I, R>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        self.rows.extend(rows.into_iter().map(Into::into));
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Default)]
struct Tables {
    exercises: Vec<Exercise>,
    tracks: Vec<Track>,
    track_exercises: Vec<TrackExercise>,
}

/// Shared in-memory store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    #[cfg(test)]
    fail_saves: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a unit of work
    pub fn begin(&self) -> ChangeSet {
        ChangeSet::default()
    }

    /// Apply every staged row, or none of them.
    ///
    /// Exercise and track ids are primary keys; a duplicate rejects the whole
    /// change set. Placements carry no key. Returns the number of rows written.
    pub fn save(&self, changes: ChangeSet) -> Result<usize, DomainError> {
        self.check_injected_failure()?;
        if changes.is_empty() {
            return Ok(0);
        }

        let mut tables = self.write()?;

        let mut exercise_ids: HashSet<ExerciseId> =
            tables.exercises.iter().map(|e| e.id).collect();
        let mut track_ids: HashSet<TrackId> = tables.tracks.iter().map(|t| t.id).collect();

        for row in &changes.rows {
            match row {
                Row::Exercise(exercise) if !exercise_ids.insert(exercise.id) => {
                    return Err(DomainError::AlreadyExists(format!(
                        "Exercise {} already exists",
                        exercise.id
                    )));
                }
                Row::Track(track) if !track_ids.insert(track.id) => {
                    return Err(DomainError::AlreadyExists(format!(
                        "Track {} already exists",
                        track.id
                    )));
                }
                _ => {}
            }
        }

        let written = changes.rows.len();
        for row in changes.rows {
            match row {
                Row::Exercise(exercise) => tables.exercises.push(exercise),
                Row::Track(track) => tables.tracks.push(track),
                Row::TrackExercise(track_exercise) => tables.track_exercises.push(track_exercise),
            }
        }

        tracing::debug!(rows = written, "Committed change set");
        Ok(written)
    }

    pub fn exercises(&self) -> Result<Vec<Exercise>, DomainError> {
        Ok(self.read()?.exercises.clone())
    }

    pub fn tracks(&self) -> Result<Vec<Track>, DomainError> {
        Ok(self.read()?.tracks.clone())
    }

    pub fn track_exercises(&self) -> Result<Vec<TrackExercise>, DomainError> {
        Ok(self.read()?.track_exercises.clone())
    }

    /// Make every following save fail until switched back
    #[cfg(test)]
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    #[cfg(test)]
    fn check_injected_failure(&self) -> Result<(), DomainError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::Database("store rejected the save".to_string()));
        }
        Ok(())
    }

    #[cfg(not(test))]
    fn check_injected_failure(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DomainError> {
        self.tables
            .read()
            .map_err(|_| DomainError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DomainError> {
        self.tables
            .write()
            .map_err(|_| DomainError::Internal("store lock poisoned".to_string()))
    }
}
