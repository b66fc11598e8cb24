//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models and the transfer shapes crossing the API boundary
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
