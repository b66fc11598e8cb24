//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory, PostgreSQL, remote API).

use async_trait::async_trait;

use crate::domain::entities::{ExerciseDto, Track, TrackExercise, TrackExerciseViewModel, TrackId};
use crate::error::DomainError;

/// A track together with its placements, in placement order
pub type TrackDetails = (Track, Vec<TrackExercise>);

/// Read side for exercise reference data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseReader: Send + Sync {
    /// Every exercise, mapped to its transfer shape, in store order
    async fn list(&self) -> Result<Vec<ExerciseDto>, DomainError>;
}

/// Write side for tracks
#[async_trait]
pub trait TrackWriter: Send + Sync {
    /// Persist the track and one placement per exercise as a single commit.
    ///
    /// `auth_token` is the caller's credential, forwarded by adapters that
    /// talk to an authenticated backend.
    async fn write(
        &self,
        view_model: &TrackExerciseViewModel,
        auth_token: Option<&str>,
    ) -> Result<(), DomainError>;
}

/// Read side for tracks
#[async_trait]
pub trait TrackReader: Send + Sync {
    /// All tracks, or only those owned by `owner`, in store order
    async fn list(&self, owner: Option<&str>) -> Result<Vec<Track>, DomainError>;

    /// A track and its placements
    async fn find(&self, id: TrackId) -> Result<Option<TrackDetails>, DomainError>;
}
