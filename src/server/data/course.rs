//! Training course data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        passing_score: i32,
    ) -> Result<entity::training_course::Model, DbErr> {
        entity::training_course::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            passing_score: ActiveValue::Set(passing_score),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::training_course::Model>, DbErr> {
        entity::prelude::TrainingCourse::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all courses ordered by title, optionally restricted to active ones.
    pub async fn get_all(
        &self,
        active_only: bool,
    ) -> Result<Vec<entity::training_course::Model>, DbErr> {
        let mut query = entity::prelude::TrainingCourse::find();

        if active_only {
            query = query.filter(entity::training_course::Column::Active.eq(true));
        }

        query
            .order_by_asc(entity::training_course::Column::Title)
            .all(self.db)
            .await
    }

    /// Updates course fields. Fields left as `None` keep their current values.
    pub async fn update(
        &self,
        id: i32,
        title: Option<String>,
        description: Option<Option<String>>,
        passing_score: Option<i32>,
    ) -> Result<entity::training_course::Model, DbErr> {
        let course = entity::prelude::TrainingCourse::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Course {} not found", id)))?;

        let mut active_model: entity::training_course::ActiveModel = course.into();

        if let Some(title) = title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(passing_score) = passing_score {
            active_model.passing_score = ActiveValue::Set(passing_score);
        }

        active_model.update(self.db).await
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<(), DbErr> {
        entity::prelude::TrainingCourse::update_many()
            .filter(entity::training_course::Column::Id.eq(id))
            .col_expr(
                entity::training_course::Column::Active,
                sea_orm::sea_query::Expr::value(active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Checks whether any observer has ever enrolled in the course. Courses
    /// with enrollment history are deactivated instead of deleted.
    pub async fn has_enrollments(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::TrainingCourse::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
