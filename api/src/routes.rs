//! Router construction
//!
//! Shared by `main` and the route tests so both exercise the same stack.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::RateLimit;
use crate::handlers;
use crate::AppState;

/// GET renders the form, POST submits it. With a rate limit, only POST is limited.
fn create_track_route(rate_limit: Option<RateLimit>) -> anyhow::Result<MethodRouter<AppState>> {
    let form = get(handlers::create_track_form);

    let Some(limit) = rate_limit else {
        return Ok(form.post(handlers::create_track));
    };

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(limit.per_second)
            .burst_size(limit.burst)
            .finish()
            .context("rate limit values must be positive")?,
    );

    Ok(form.merge(post(handlers::create_track).layer(GovernorLayer {
        config: governor_config,
    })))
}

/// Build the application router
pub fn router(state: AppState, rate_limit: Option<RateLimit>) -> anyhow::Result<Router> {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/tracks", get(handlers::list_tracks))
        .route("/tracks/create", create_track_route(rate_limit)?)
        .route("/tracks/:id", get(handlers::get_track))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
