//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod exercise_repo;
pub mod track_repo;

#[cfg(test)]
mod integration_tests;

pub use exercise_repo::PostgresExerciseRepository;
pub use track_repo::PostgresTrackRepository;

use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

/// Map a SeaORM error, keeping unique-key violations distinguishable
pub(crate) fn db_error(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::AlreadyExists(msg),
        _ => DomainError::Database(e.to_string()),
    }
}
