//! Fake implementations of port traits

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::TrackExerciseViewModel;
use crate::domain::ports::TrackWriter;
use crate::error::DomainError;

// ============================================================================
// Failing Track Writer
// ============================================================================

/// Writer whose backend is always down
pub struct FailingTrackWriter;

#[async_trait]
impl TrackWriter for FailingTrackWriter {
    async fn write(
        &self,
        _view_model: &TrackExerciseViewModel,
        _auth_token: Option<&str>,
    ) -> Result<(), DomainError> {
        Err(DomainError::Database("connection reset".to_string()))
    }
}

// ============================================================================
// Recording Track Writer
// ============================================================================

/// Writer that accepts everything and remembers what it was given
#[derive(Default)]
pub struct RecordingTrackWriter {
    calls: Mutex<Vec<(TrackExerciseViewModel, Option<String>)>>,
}

impl RecordingTrackWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    pub fn written(&self) -> Vec<TrackExerciseViewModel> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(view_model, _)| view_model.clone())
            .collect()
    }
}

#[async_trait]
impl TrackWriter for RecordingTrackWriter {
    async fn write(
        &self,
        view_model: &TrackExerciseViewModel,
        auth_token: Option<&str>,
    ) -> Result<(), DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((view_model.clone(), auth_token.map(str::to_string)));
        Ok(())
    }
}
