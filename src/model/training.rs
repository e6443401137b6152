use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub passing_score: i32,
    pub active: bool,
}

#[derive(Serialize, Deserialize)]
pub struct CreateCourseDto {
    pub title: String,
    pub description: Option<String>,
    pub passing_score: i32,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateCourseDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub passing_score: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct EnrollmentDto {
    pub id: i32,
    pub observer_id: i32,
    pub course_id: i32,
    pub score: Option<i32>,
    pub status: String,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize)]
pub struct EnrollDto {
    pub observer_id: i32,
}

#[derive(Serialize, Deserialize)]
pub struct RecordScoreDto {
    pub score: i32,
}

/// Outcome of removing a course: `deleted` or `deactivated`.
#[derive(Serialize, Deserialize)]
pub struct CourseRemovalDto {
    pub outcome: String,
}

#[derive(Serialize, Deserialize)]
pub struct ScoreResultDto {
    pub enrollment: EnrollmentDto,
    pub certificate: Option<crate::model::certificate::CertificateDto>,
}
