//! Track service
//!
//! The create-track use case and the track listings it redirects to.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::context::RequestContext;
use super::validation::ValidationErrors;
use crate::domain::entities::{Track, TrackExerciseViewModel, TrackId};
use crate::domain::ports::{ExerciseReader, TrackDetails, TrackReader, TrackWriter};
use crate::error::DomainError;

pub const SIGN_IN_REQUIRED_MESSAGE: &str = "You must be logged in to create a track.";
pub const SAVE_FAILED_MESSAGE: &str = "The track could not be saved. Please try again.";

/// Which tracks a listing shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackListFilter {
    #[default]
    AllTracks,
    MyTracks,
}

impl TrackListFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackListFilter::AllTracks => "AllTracks",
            TrackListFilter::MyTracks => "MyTracks",
        }
    }
}

impl std::fmt::Display for TrackListFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TrackListFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AllTracks" => Ok(TrackListFilter::AllTracks),
            "MyTracks" => Ok(TrackListFilter::MyTracks),
            _ => Err(format!("Unknown track list type: {}", s)),
        }
    }
}

/// Where a successful write sends the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectTarget {
    pub action: &'static str,
    pub list_type: TrackListFilter,
}

impl RedirectTarget {
    pub const MY_TRACKS: RedirectTarget = RedirectTarget {
        action: "Tracks",
        list_type: TrackListFilter::MyTracks,
    };

    /// Relative URL of the target listing
    pub fn location(&self) -> String {
        format!(
            "/{}?type={}",
            self.action.to_lowercase(),
            urlencoding::encode(self.list_type.as_str())
        )
    }
}

/// Result of submitting the create-track form
#[derive(Debug, Clone, PartialEq)]
pub enum CreateTrackOutcome {
    /// Track saved
    Redirect(RedirectTarget),
    /// No credential; nothing was written
    Rejected {
        view: TrackExerciseViewModel,
        errors: ValidationErrors,
    },
    /// The writer reported a failure
    Failed {
        view: TrackExerciseViewModel,
        errors: ValidationErrors,
    },
}

/// Service for creating and listing tracks
pub struct TrackService<ER, TW, TR>
where
    ER: ExerciseReader + ?Sized,
    TW: TrackWriter + ?Sized,
    TR: TrackReader + ?Sized,
{
    exercises: Arc<ER>,
    writer: Arc<TW>,
    tracks: Arc<TR>,
}

impl<ER, TW, TR> TrackService<ER, TW, TR>
where
    ER: ExerciseReader + ?Sized,
    TW: TrackWriter + ?Sized,
    TR: TrackReader + ?Sized,
{
    pub fn new(exercises: Arc<ER>, writer: Arc<TW>, tracks: Arc<TR>) -> Self {
        Self {
            exercises,
            writer,
            tracks,
        }
    }

    /// Form model for a new track: every exercise and a placeholder track
    pub async fn create_track_form(&self) -> Result<TrackExerciseViewModel, DomainError> {
        let exercises = self.exercises.list().await?;
        tracing::debug!(exercise_count = exercises.len(), "Loaded exercises for track form");
        Ok(TrackExerciseViewModel::for_new_track(exercises))
    }

    /// Handle a submitted create-track form
    ///
    /// The writer is only called when the context carries a credential.
    /// Errors are returned only when the form model cannot be rebuilt.
    pub async fn create_track(
        &self,
        ctx: RequestContext,
        view_model: TrackExerciseViewModel,
    ) -> Result<CreateTrackOutcome, DomainError> {
        let Some(token) = ctx.token() else {
            tracing::info!(track_id = %view_model.track.id, "Track submitted without credential");
            return Ok(CreateTrackOutcome::Rejected {
                view: self.create_track_form().await?,
                errors: ValidationErrors::generic(SIGN_IN_REQUIRED_MESSAGE),
            });
        };

        match self.writer.write(&view_model, Some(token)).await {
            Ok(()) => {
                tracing::info!(
                    track_id = %view_model.track.id,
                    exercise_count = view_model.exercises.len(),
                    "Track created"
                );
                Ok(CreateTrackOutcome::Redirect(RedirectTarget::MY_TRACKS))
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    track_id = %view_model.track.id,
                    "Failed to save track"
                );
                Ok(CreateTrackOutcome::Failed {
                    view: self.create_track_form().await?,
                    errors: ValidationErrors::generic(SAVE_FAILED_MESSAGE),
                })
            }
        }
    }

    /// List tracks; `MyTracks` needs a credential and a user id
    pub async fn list_tracks(
        &self,
        ctx: RequestContext,
        filter: TrackListFilter,
    ) -> Result<Vec<Track>, DomainError> {
        match filter {
            TrackListFilter::AllTracks => self.tracks.list(None).await,
            TrackListFilter::MyTracks => {
                let user_id = ctx
                    .user_id()
                    .filter(|_| ctx.has_credential())
                    .ok_or_else(|| {
                        DomainError::Unauthorized("sign in to see your tracks".to_string())
                    })?;
                self.tracks.list(Some(user_id)).await
            }
        }
    }

    /// A track with its placements
    pub async fn get_track(&self, id: TrackId) -> Result<TrackDetails, DomainError> {
        self.tracks
            .find(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Track {} not found", id)))
    }
}
