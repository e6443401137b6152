use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::training::{
        CourseRemovalDto, CreateCourseDto, EnrollDto, RecordScoreDto, ScoreResultDto,
        UpdateCourseDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::training::{CreateCourseParam, EnrollParam, RecordScoreParam, UpdateCourseParam},
        service::training::{CourseRemoval, TrainingService},
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct CourseListQuery {
    #[serde(default)]
    pub active_only: bool,
}

/// POST /api/courses
/// Create a training course (admin)
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let training_service = TrainingService::new(&state.db);
    let course = training_service
        .create_course(CreateCourseParam {
            title: dto.title,
            description: dto.description,
            passing_score: dto.passing_score,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// GET /api/courses
/// List training courses
pub async fn get_courses(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CourseListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let training_service = TrainingService::new(&state.db);
    let courses = training_service.get_courses(query.active_only).await?;

    let dtos: Vec<_> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/courses/{course_id}
/// Get one training course
pub async fn get_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let training_service = TrainingService::new(&state.db);
    let course = training_service
        .get_course(course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// PUT /api/courses/{course_id}
/// Update a training course (admin)
pub async fn update_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Json(dto): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let training_service = TrainingService::new(&state.db);
    let course = training_service
        .update_course(UpdateCourseParam {
            course_id,
            title: dto.title,
            description: dto.description,
            passing_score: dto.passing_score,
        })
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// DELETE /api/courses/{course_id}
/// Remove a course; courses with enrollment history are deactivated (admin)
pub async fn remove_course(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let training_service = TrainingService::new(&state.db);
    let removal = training_service.remove_course(course_id).await?;

    let outcome = match removal {
        CourseRemoval::Deleted => "deleted",
        CourseRemoval::Deactivated => "deactivated",
    };

    Ok((
        StatusCode::OK,
        Json(CourseRemovalDto {
            outcome: outcome.to_string(),
        }),
    ))
}

/// POST /api/courses/{course_id}/enrollments
/// Enroll an observer in a course (admin)
pub async fn enroll_observer(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
    Json(dto): Json<EnrollDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let training_service = TrainingService::new(&state.db);
    let enrollment = training_service
        .enroll(EnrollParam {
            observer_id: dto.observer_id,
            course_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_dto())))
}

/// POST /api/enrollments/{enrollment_id}/score
/// Record a course score; passing issues a certificate (admin)
pub async fn record_score(
    State(state): State<AppState>,
    session: Session,
    Path(enrollment_id): Path<i32>,
    Json(dto): Json<RecordScoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let training_service = TrainingService::new(&state.db);
    let (enrollment, certificate) = training_service
        .record_score(RecordScoreParam {
            enrollment_id,
            score: dto.score,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ScoreResultDto {
            enrollment: enrollment.into_dto(),
            certificate: certificate.map(|c| c.into_dto()),
        }),
    ))
}
