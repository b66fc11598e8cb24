//! Track handlers
//!
//! The create-track form and submission, and the track listings.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{CreateTrackOutcome, RequestContext, TrackListFilter, ValidationErrors};
use crate::domain::entities::{TrackDetailsDto, TrackDto, TrackExerciseViewModel, TrackId};
use crate::error::AppError;
use crate::AppState;

/// Name of the view the create-track models are rendered with
pub const CREATE_TRACK_VIEW: &str = "CreateTrack";

/// A model to render, plus any messages to show with it
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: &'static str,
    pub model: TrackExerciseViewModel,
    pub errors: ValidationErrors,
}

impl ViewResponse {
    fn create_track(model: TrackExerciseViewModel, errors: ValidationErrors) -> Self {
        Self {
            view: CREATE_TRACK_VIEW,
            model,
            errors,
        }
    }
}

/// Query parameters for listing tracks
#[derive(Debug, Deserialize)]
pub struct ListTracksQuery {
    #[serde(rename = "type")]
    pub list_type: Option<String>,
}

/// GET /tracks/create
///
/// The form model: every exercise and an empty track.
pub async fn create_track_form(
    State(state): State<AppState>,
) -> Result<Json<ViewResponse>, AppError> {
    let model = state.track_service.create_track_form().await?;
    Ok(Json(ViewResponse::create_track(model, ValidationErrors::new())))
}

/// POST /tracks/create
///
/// Save a track. Redirects to the caller's tracks on success; otherwise the
/// form model comes back with a message.
pub async fn create_track(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(view_model): Json<TrackExerciseViewModel>,
) -> Result<Response, AppError> {
    let outcome = state.track_service.create_track(ctx, view_model).await?;

    let response = match outcome {
        CreateTrackOutcome::Redirect(target) => Redirect::to(&target.location()).into_response(),
        CreateTrackOutcome::Rejected { view, errors } => (
            StatusCode::UNAUTHORIZED,
            Json(ViewResponse::create_track(view, errors)),
        )
            .into_response(),
        CreateTrackOutcome::Failed { view, errors } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ViewResponse::create_track(view, errors)),
        )
            .into_response(),
    };

    Ok(response)
}

/// GET /tracks?type=MyTracks|AllTracks
pub async fn list_tracks(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<ListTracksQuery>,
) -> Result<Json<Vec<TrackDto>>, AppError> {
    let filter = match query.list_type.as_deref() {
        None | Some("") => TrackListFilter::default(),
        Some(list_type) => list_type.parse().map_err(AppError::BadRequest)?,
    };

    let tracks = state.track_service.list_tracks(ctx, filter).await?;

    Ok(Json(tracks.into_iter().map(TrackDto::from).collect()))
}

/// GET /tracks/:id
pub async fn get_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrackDetailsDto>, AppError> {
    let id: i32 = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid track ID: {}", id)))?;

    let (track, placements) = state.track_service.get_track(TrackId(id)).await?;
    Ok(Json(TrackDetailsDto::new(track, placements)))
}
