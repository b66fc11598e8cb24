//! Remote DogRally API adapter
//!
//! Implements the repository ports by calling another DogRally API over HTTP.

pub mod client;

pub use client::DogRallyApiClient;
