//! Training service for business logic.
//!
//! Manages courses, enrollments, and scoring. Recording a passing score
//! completes the enrollment and issues a certificate for the course;
//! a failing score closes the enrollment and the observer may re-enroll.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository, observer::ObserverRepository,
    },
    error::AppError,
    model::{
        certificate::{Certificate, IssueCertificateParam},
        training::{
            Course, CreateCourseParam, EnrollParam, Enrollment, EnrollmentStatus, RecordScoreParam,
            UpdateCourseParam,
        },
    },
    service::certificate::CertificateService,
};

/// Outcome of deleting a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseRemoval {
    /// The course had no enrollment history and was deleted outright.
    Deleted,
    /// The course had enrollments and was deactivated to preserve records.
    Deactivated,
}

pub struct TrainingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TrainingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_course(&self, param: CreateCourseParam) -> Result<Course, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        if !(0..=100).contains(&param.passing_score) {
            return Err(AppError::BadRequest(
                "Passing score must be between 0 and 100".to_string(),
            ));
        }

        let course_repo = CourseRepository::new(self.db);
        let course = course_repo
            .create(
                param.title.trim().to_string(),
                param.description,
                param.passing_score,
            )
            .await?;

        Ok(Course::from_entity(course))
    }

    pub async fn get_course(&self, course_id: i32) -> Result<Option<Course>, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let course = course_repo.find_by_id(course_id).await?;
        Ok(course.map(Course::from_entity))
    }

    pub async fn get_courses(&self, active_only: bool) -> Result<Vec<Course>, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let courses = course_repo.get_all(active_only).await?;
        Ok(courses.into_iter().map(Course::from_entity).collect())
    }

    pub async fn update_course(&self, param: UpdateCourseParam) -> Result<Course, AppError> {
        let course_repo = CourseRepository::new(self.db);

        if course_repo.find_by_id(param.course_id).await?.is_none() {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        if let Some(passing_score) = param.passing_score {
            if !(0..=100).contains(&passing_score) {
                return Err(AppError::BadRequest(
                    "Passing score must be between 0 and 100".to_string(),
                ));
            }
        }

        let course = course_repo
            .update(
                param.course_id,
                param.title,
                param.description.map(Some),
                param.passing_score,
            )
            .await?;

        Ok(Course::from_entity(course))
    }

    /// Removes a course. Courses with enrollment history are deactivated
    /// instead of deleted so completion records stay intact.
    pub async fn remove_course(&self, course_id: i32) -> Result<CourseRemoval, AppError> {
        let course_repo = CourseRepository::new(self.db);

        if course_repo.find_by_id(course_id).await?.is_none() {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        if course_repo.has_enrollments(course_id).await? {
            course_repo.set_active(course_id, false).await?;
            return Ok(CourseRemoval::Deactivated);
        }

        course_repo.delete(course_id).await?;
        Ok(CourseRemoval::Deleted)
    }

    /// Enrolls an observer in an active course.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The new enrollment
    /// - `Err(AppError::NotFound)` - Observer or course missing
    /// - `Err(AppError::BadRequest)` - Course inactive or observer already enrolled
    pub async fn enroll(&self, param: EnrollParam) -> Result<Enrollment, AppError> {
        let course_repo = CourseRepository::new(self.db);
        let observer_repo = ObserverRepository::new(self.db);
        let enrollment_repo = EnrollmentRepository::new(self.db);

        let Some(course) = course_repo.find_by_id(param.course_id).await? else {
            return Err(AppError::NotFound("Course not found".to_string()));
        };
        if !course.active {
            return Err(AppError::BadRequest(
                "Course is not open for enrollment".to_string(),
            ));
        }

        if observer_repo.find_by_id(param.observer_id).await?.is_none() {
            return Err(AppError::NotFound("Observer not found".to_string()));
        }

        if enrollment_repo
            .find_open(param.observer_id, param.course_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "Observer is already enrolled in this course".to_string(),
            ));
        }

        let enrollment = enrollment_repo
            .create(param.observer_id, param.course_id)
            .await?;

        Ok(Enrollment::from_entity(enrollment)?)
    }

    /// Records a score for an open enrollment.
    ///
    /// A score at or above the course passing score completes the enrollment
    /// and issues a certificate for the course; anything lower marks it
    /// failed. Either way the enrollment is closed.
    ///
    /// # Returns
    /// - `Ok((enrollment, certificate))` - The closed enrollment and, on a
    ///   pass, the issued certificate
    /// - `Err(AppError::NotFound)` - No enrollment with that id
    /// - `Err(AppError::BadRequest)` - Score out of range or enrollment already closed
    pub async fn record_score(
        &self,
        param: RecordScoreParam,
    ) -> Result<(Enrollment, Option<Certificate>), AppError> {
        if !(0..=100).contains(&param.score) {
            return Err(AppError::BadRequest(
                "Score must be between 0 and 100".to_string(),
            ));
        }

        let enrollment_repo = EnrollmentRepository::new(self.db);
        let course_repo = CourseRepository::new(self.db);

        let Some(enrollment) = enrollment_repo.find_by_id(param.enrollment_id).await? else {
            return Err(AppError::NotFound("Enrollment not found".to_string()));
        };

        if enrollment.status != EnrollmentStatus::Enrolled.as_str() {
            return Err(AppError::BadRequest(
                "Enrollment has already been scored".to_string(),
            ));
        }

        let Some(course) = course_repo.find_by_id(enrollment.course_id).await? else {
            return Err(AppError::NotFound("Course not found".to_string()));
        };

        let passed = param.score >= course.passing_score;
        let status = if passed {
            EnrollmentStatus::Completed
        } else {
            EnrollmentStatus::Failed
        };

        let updated = enrollment_repo
            .record_result(param.enrollment_id, param.score, status.as_str(), Utc::now())
            .await?;

        let certificate = if passed {
            let certificate_service = CertificateService::new(self.db);
            Some(
                certificate_service
                    .issue(IssueCertificateParam {
                        observer_id: enrollment.observer_id,
                        course_id: Some(enrollment.course_id),
                    })
                    .await?,
            )
        } else {
            None
        };

        Ok((Enrollment::from_entity(updated)?, certificate))
    }

    pub async fn get_observer_enrollments(
        &self,
        observer_id: i32,
    ) -> Result<Vec<Enrollment>, AppError> {
        let enrollment_repo = EnrollmentRepository::new(self.db);

        let enrollments = enrollment_repo.get_by_observer(observer_id).await?;

        Ok(enrollments
            .into_iter()
            .map(Enrollment::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }
}
