//! In-memory adapter for ExerciseReader

use std::sync::Arc;

use async_trait::async_trait;

use super::store::InMemoryStore;
use crate::domain::entities::ExerciseDto;
use crate::domain::ports::ExerciseReader;
use crate::error::DomainError;

/// ExerciseReader over the in-memory store
pub struct InMemoryExerciseRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryExerciseRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ExerciseReader for InMemoryExerciseRepository {
    async fn list(&self) -> Result<Vec<ExerciseDto>, DomainError> {
        let exercises = self.store.exercises()?;
        Ok(exercises.into_iter().map(ExerciseDto::from).collect())
    }
}
