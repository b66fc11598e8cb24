//! Request authentication
//!
//! Builds the per-request [`RequestContext`](crate::app::RequestContext) from
//! headers and session cookies. Handlers decide what a missing credential means.

pub mod context;
