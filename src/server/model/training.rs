//! Training course and enrollment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::training::{CourseDto, EnrollmentDto},
    server::error::internal::InternalError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Enrolled,
    Completed,
    Failed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enrolled => "enrolled",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "enrolled" => Some(Self::Enrolled),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub passing_score: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn from_entity(entity: entity::training_course::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            passing_score: entity.passing_score,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            passing_score: self.passing_score,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub observer_id: i32,
    pub course_id: i32,
    pub score: Option<i32>,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Result<Self, InternalError> {
        let status = EnrollmentStatus::from_str(&entity.status).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                field: "enrollment.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            observer_id: entity.observer_id,
            course_id: entity.course_id,
            score: entity.score,
            status,
            enrolled_at: entity.enrolled_at,
            completed_at: entity.completed_at,
        })
    }

    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            observer_id: self.observer_id,
            course_id: self.course_id,
            score: self.score,
            status: self.status.as_str().to_string(),
            enrolled_at: self.enrolled_at,
            completed_at: self.completed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub title: String,
    pub description: Option<String>,
    pub passing_score: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateCourseParam {
    pub course_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub passing_score: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct EnrollParam {
    pub observer_id: i32,
    pub course_id: i32,
}

#[derive(Debug, Clone)]
pub struct RecordScoreParam {
    pub enrollment_id: i32,
    pub score: i32,
}
