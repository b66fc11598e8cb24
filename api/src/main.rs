//! DogRally API Server
//!
//! Lets handlers build rally-obedience tracks from the exercise catalogue and
//! browse the tracks already saved.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod routes;

#[cfg(test)]
mod test_utils;


use adapters::{
    memory::seed_demo_data, DogRallyApiClient, InMemoryExerciseRepository, InMemoryStore,
    InMemoryTrackRepository, PostgresExerciseRepository, PostgresTrackRepository,
};
use app::TrackService;
use config::{Config, StoreBackend};
use domain::ports::{ExerciseReader, TrackReader, TrackWriter};

pub type DynTrackService = TrackService<dyn ExerciseReader, dyn TrackWriter, dyn TrackReader>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub track_service: Arc<DynTrackService>,
    /// Name of the configured store, reported by the health check
    pub backend: &'static str,
}

impl AppState {
    pub fn new(
        exercises: Arc<dyn ExerciseReader>,
        writer: Arc<dyn TrackWriter>,
        tracks: Arc<dyn TrackReader>,
        backend: &'static str,
    ) -> Self {
        Self {
            track_service: Arc::new(TrackService::new(exercises, writer, tracks)),
            backend,
        }
    }
}

/// Wire the ports to the configured backend
async fn build_state(backend: &StoreBackend) -> anyhow::Result<AppState> {
    let state = match backend {
        StoreBackend::Postgres { database_url } => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            let tracks = Arc::new(PostgresTrackRepository::new(db.clone()));
            AppState::new(
                Arc::new(PostgresExerciseRepository::new(db)),
                tracks.clone(),
                tracks,
                backend.name(),
            )
        }
        StoreBackend::RemoteApi { base_url } => {
            tracing::info!(base_url = %base_url, "Using remote DogRally API");
            let client = Arc::new(DogRallyApiClient::new(base_url.clone()));
            AppState::new(client.clone(), client.clone(), client, backend.name())
        }
        StoreBackend::InMemory { seed_demo_data: seed } => {
            let store = Arc::new(InMemoryStore::new());
            if *seed {
                let rows = seed_demo_data(&store)?;
                tracing::info!(rows, "Seeded in-memory store with demo data");
            } else {
                tracing::warn!("Using an empty in-memory store; tracks are lost on restart");
            }

            let tracks = Arc::new(InMemoryTrackRepository::new(store.clone()));
            AppState::new(
                Arc::new(InMemoryExerciseRepository::new(store)),
                tracks.clone(),
                tracks,
                backend.name(),
            )
        }
    };

    Ok(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dogrally_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DogRally API...");

    // Load configuration
    let config = Config::from_env();
    let backend = config.backend();
    tracing::info!(backend = backend.name(), "Selected track store");

    let state = build_state(&backend).await?;
    let app = routes::router(state, Some(config.rate_limit))?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
