//! Training course factory for tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test training courses with customizable fields.
pub struct TrainingCourseFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    passing_score: i32,
    active: bool,
}

impl<'a> TrainingCourseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Course {}", id),
            description: None,
            passing_score: 70,
            active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn passing_score(mut self, passing_score: i32) -> Self {
        self.passing_score = passing_score;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::training_course::Model, DbErr> {
        entity::training_course::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            passing_score: ActiveValue::Set(self.passing_score),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(
    db: &DatabaseConnection,
) -> Result<entity::training_course::Model, DbErr> {
    TrainingCourseFactory::new(db).build().await
}
