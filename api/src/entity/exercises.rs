use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub movement: String,
    pub side_shift: bool,
    pub illustration_path: String,
    pub class: String,
    pub sign_number: i32,
    pub position_x: i32,
    pub position_y: i32,
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
