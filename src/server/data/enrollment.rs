//! Enrollment data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls an observer in a course with `enrolled` status.
    pub async fn create(
        &self,
        observer_id: i32,
        course_id: i32,
    ) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            observer_id: ActiveValue::Set(observer_id),
            course_id: ActiveValue::Set(course_id),
            score: ActiveValue::Set(None),
            status: ActiveValue::Set("enrolled".to_string()),
            enrolled_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds an open (not yet scored) enrollment for an observer/course pair.
    /// Used to prevent duplicate enrollment while still allowing re-enrollment
    /// after a failed attempt.
    pub async fn find_open(
        &self,
        observer_id: i32,
        course_id: i32,
    ) -> Result<Option<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::ObserverId.eq(observer_id))
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .filter(entity::enrollment::Column::Status.eq("enrolled"))
            .one(self.db)
            .await
    }

    pub async fn get_by_observer(
        &self,
        observer_id: i32,
    ) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::ObserverId.eq(observer_id))
            .order_by_desc(entity::enrollment::Column::EnrolledAt)
            .all(self.db)
            .await
    }

    /// Records the outcome of a course attempt.
    pub async fn record_result(
        &self,
        id: i32,
        score: i32,
        status: &str,
        completed_at: DateTime<Utc>,
    ) -> Result<entity::enrollment::Model, DbErr> {
        let enrollment = entity::prelude::Enrollment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Enrollment {} not found",
                id
            )))?;

        let mut active_model: entity::enrollment::ActiveModel = enrollment.into();
        active_model.score = ActiveValue::Set(Some(score));
        active_model.status = ActiveValue::Set(status.to_string());
        active_model.completed_at = ActiveValue::Set(Some(completed_at));

        active_model.update(self.db).await
    }
}
