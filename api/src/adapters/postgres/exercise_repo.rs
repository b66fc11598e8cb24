//! PostgreSQL adapter for ExerciseReader

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::db_error;
use crate::domain::entities::{Exercise, ExerciseClass, ExerciseDto, ExerciseId, Pace};
use crate::domain::ports::ExerciseReader;
use crate::entity::exercises;
use crate::error::DomainError;

/// PostgreSQL implementation of ExerciseReader
pub struct PostgresExerciseRepository {
    db: DatabaseConnection,
}

impl PostgresExerciseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExerciseReader for PostgresExerciseRepository {
    async fn list(&self) -> Result<Vec<ExerciseDto>, DomainError> {
        let results = exercises::Entity::find()
            .order_by_asc(exercises::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results
            .into_iter()
            .map(|m| ExerciseDto::from(Exercise::from(m)))
            .collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<exercises::Model> for Exercise {
    fn from(model: exercises::Model) -> Self {
        Exercise {
            id: ExerciseId(model.id),
            name: model.name,
            movement: model.movement.parse().unwrap_or(Pace::Walk),
            side_shift: model.side_shift,
            illustration_path: model.illustration_path,
            class: model.class.parse().unwrap_or(ExerciseClass::Beginner),
            sign_number: model.sign_number,
            position_x: model.position_x,
            position_y: model.position_y,
        }
    }
}
