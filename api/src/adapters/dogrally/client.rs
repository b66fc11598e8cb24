//! DogRally API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{
    ExerciseDto, Track, TrackDetailsDto, TrackDto, TrackExerciseViewModel, TrackId,
};
use crate::domain::ports::{ExerciseReader, TrackDetails, TrackReader, TrackWriter};
use crate::error::{DomainError, RemoteApiError};

/// Client for a remote DogRally API
pub struct DogRallyApiClient {
    http: Client,
    base_url: String,
}

impl DogRallyApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, RemoteApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| RemoteApiError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(RemoteApiError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(RemoteApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), RemoteApiError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(RemoteApiError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(RemoteApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get_exercises(&self) -> Result<Vec<ExerciseDto>, RemoteApiError> {
        let response = self.http.get(self.api_url("/exercises")).send().await?;
        self.handle_response(response).await
    }

    async fn post_track(
        &self,
        view_model: &TrackExerciseViewModel,
        auth_token: Option<&str>,
    ) -> Result<(), RemoteApiError> {
        let mut request = self.http.post(self.api_url("/tracks")).json(view_model);
        if let Some(token) = auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        self.handle_empty_response(response).await
    }

    async fn get_tracks(&self, owner: Option<&str>) -> Result<Vec<TrackDto>, RemoteApiError> {
        let path = match owner {
            Some(owner) => format!("/tracks?userId={}", encode(owner)),
            None => "/tracks".to_string(),
        };

        let response = self.http.get(self.api_url(&path)).send().await?;
        self.handle_response(response).await
    }

    async fn get_track(&self, id: TrackId) -> Result<Option<TrackDetailsDto>, RemoteApiError> {
        let response = self
            .http
            .get(self.api_url(&format!("/tracks/{}", id)))
            .send()
            .await?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        self.handle_response(response).await.map(Some)
    }
}

#[async_trait]
impl ExerciseReader for DogRallyApiClient {
    async fn list(&self) -> Result<Vec<ExerciseDto>, DomainError> {
        Ok(self.get_exercises().await?)
    }
}

#[async_trait]
impl TrackWriter for DogRallyApiClient {
    async fn write(
        &self,
        view_model: &TrackExerciseViewModel,
        auth_token: Option<&str>,
    ) -> Result<(), DomainError> {
        self.post_track(view_model, auth_token).await?;
        tracing::debug!(track_id = %view_model.track.id, "Posted track to remote API");
        Ok(())
    }
}

#[async_trait]
impl TrackReader for DogRallyApiClient {
    async fn list(&self, owner: Option<&str>) -> Result<Vec<Track>, DomainError> {
        let tracks = self.get_tracks(owner).await?;
        Ok(tracks.iter().map(TrackDto::to_track).collect())
    }

    async fn find(&self, id: TrackId) -> Result<Option<TrackDetails>, DomainError> {
        Ok(self.get_track(id).await?.map(TrackDetailsDto::into_parts))
    }
}
