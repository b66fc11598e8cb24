//! Test utilities
//!
//! Manual fakes and test fixtures for unit testing.
//!
//! The in-memory store doubles as the main fake backend. The fakes here
//! cover what it cannot: writers that fail or record their calls. Ports
//! without reference arguments get a `mockall` mock generated next to
//! their trait instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
