//! In-memory adapter for TrackWriter and TrackReader

use std::sync::Arc;

use async_trait::async_trait;

use super::store::InMemoryStore;
use crate::domain::entities::{Track, TrackExerciseViewModel, TrackId};
use crate::domain::ports::{TrackDetails, TrackReader, TrackWriter};
use crate::error::DomainError;

/// Track repository over the in-memory store
pub struct InMemoryTrackRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryTrackRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TrackWriter for InMemoryTrackRepository {
    async fn write(
        &self,
        view_model: &TrackExerciseViewModel,
        _auth_token: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut changes = self.store.begin();
        changes
            .add(view_model.track.to_track())
            .add_range(view_model.placements());

        tracing::debug!(
            track_id = %view_model.track.id,
            rows = changes.len(),
            "Saving track"
        );
        self.store.save(changes)?;
        Ok(())
    }
}

#[async_trait]
impl TrackReader for InMemoryTrackRepository {
    async fn list(&self, owner: Option<&str>) -> Result<Vec<Track>, DomainError> {
        let tracks = self.store.tracks()?;
        Ok(match owner {
            Some(owner) => tracks.into_iter().filter(|t| t.is_owned_by(owner)).collect(),
            None => tracks,
        })
    }

    async fn find(&self, id: TrackId) -> Result<Option<TrackDetails>, DomainError> {
        let Some(track) = self.store.tracks()?.into_iter().find(|t| t.id == id) else {
            return Ok(None);
        };

        let placements = self
            .store
            .track_exercises()?
            .into_iter()
            .filter(|te| te.track_id == id)
            .collect();

        Ok(Some((track, placements)))
    }
}
