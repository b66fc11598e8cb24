//! PostgreSQL adapter for TrackWriter and TrackReader

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::db_error;
use crate::domain::entities::{ExerciseId, Track, TrackExercise, TrackExerciseViewModel, TrackId};
use crate::domain::ports::{TrackDetails, TrackReader, TrackWriter};
use crate::entity::{track_exercises, tracks};
use crate::error::DomainError;

/// PostgreSQL implementation of the track ports
pub struct PostgresTrackRepository {
    db: DatabaseConnection,
}

impl PostgresTrackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TrackWriter for PostgresTrackRepository {
    async fn write(
        &self,
        view_model: &TrackExerciseViewModel,
        _auth_token: Option<&str>,
    ) -> Result<(), DomainError> {
        let track = view_model.track.to_track();
        let placements: Vec<track_exercises::ActiveModel> = view_model
            .placements()
            .into_iter()
            .map(|p| track_exercises::ActiveModel {
                track_id: Set(p.track_id.0),
                exercise_id: Set(p.exercise_id.0),
                position_x: Set(p.position_x),
                position_y: Set(p.position_y),
                ..Default::default()
            })
            .collect();

        let txn = self.db.begin().await.map_err(db_error)?;

        tracks::ActiveModel {
            id: Set(track.id.0),
            name: Set(track.name),
            date: Set(track.date.fixed_offset()),
            user_id: Set(track.user_id),
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;

        // insert_many rejects an empty batch
        if !placements.is_empty() {
            track_exercises::Entity::insert_many(placements)
                .exec(&txn)
                .await
                .map_err(db_error)?;
        }

        txn.commit().await.map_err(db_error)?;
        Ok(())
    }
}

#[async_trait]
impl TrackReader for PostgresTrackRepository {
    async fn list(&self, owner: Option<&str>) -> Result<Vec<Track>, DomainError> {
        let mut query = tracks::Entity::find().order_by_asc(tracks::Column::Id);
        if let Some(owner) = owner {
            query = query.filter(tracks::Column::UserId.eq(owner));
        }

        let results = query.all(&self.db).await.map_err(db_error)?;
        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find(&self, id: TrackId) -> Result<Option<TrackDetails>, DomainError> {
        let Some(track) = tracks::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_error)?
        else {
            return Ok(None);
        };

        let placements = track_exercises::Entity::find()
            .filter(track_exercises::Column::TrackId.eq(id.0))
            .order_by_asc(track_exercises::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(Some((
            track.into(),
            placements.into_iter().map(|m| m.into()).collect(),
        )))
    }
}

/// Convert SeaORM model to domain entity
impl From<tracks::Model> for Track {
    fn from(model: tracks::Model) -> Self {
        Track {
            id: TrackId(model.id),
            name: model.name,
            date: model.date.with_timezone(&Utc),
            user_id: model.user_id,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<track_exercises::Model> for TrackExercise {
    fn from(model: track_exercises::Model) -> Self {
        TrackExercise {
            track_id: TrackId(model.track_id),
            exercise_id: ExerciseId(model.exercise_id),
            position_x: model.position_x,
            position_y: model.position_y,
        }
    }
}
