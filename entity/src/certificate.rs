use sea_orm::entity::prelude::*;

/// Observer certificate, issued manually or on course completion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certificate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub serial: String,
    pub observer_id: i32,
    pub course_id: Option<i32>,
    pub issued_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
    pub revoked: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::observer::Entity",
        from = "Column::ObserverId",
        to = "super::observer::Column::Id"
    )]
    Observer,
    #[sea_orm(
        belongs_to = "super::training_course::Entity",
        from = "Column::CourseId",
        to = "super::training_course::Column::Id"
    )]
    TrainingCourse,
}

impl Related<super::observer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observer.def()
    }
}

impl Related<super::training_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingCourse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
