//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod tracks;

pub use health::health;
pub use tracks::{create_track, create_track_form, get_track, list_tracks};
