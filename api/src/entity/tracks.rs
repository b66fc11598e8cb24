use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tracks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub date: DateTimeWithTimeZone,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::track_exercises::Entity")]
    TrackExercises,
}

impl Related<super::track_exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackExercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
