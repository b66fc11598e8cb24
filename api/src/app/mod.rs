//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod context;
pub mod track_service;
pub mod validation;

pub use context::RequestContext;
#[cfg(test)]
pub use track_service::{SAVE_FAILED_MESSAGE, SIGN_IN_REQUIRED_MESSAGE};
pub use track_service::{CreateTrackOutcome, TrackListFilter, TrackService};
pub use validation::ValidationErrors;
