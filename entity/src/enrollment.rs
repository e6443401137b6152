use sea_orm::entity::prelude::*;

/// An observer's enrollment in a training course.
///
/// `status` holds one of `enrolled`, `completed`, or `failed`. `score` stays
/// unset until a result is recorded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub observer_id: i32,
    pub course_id: i32,
    pub score: Option<i32>,
    pub status: String,
    pub enrolled_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
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
