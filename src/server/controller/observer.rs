use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::observer::{AssignStationDto, RegisterObserverDto, UpdateObserverDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::observer::{
            GetObserversParam, ObserverStatus, RegisterObserverParam, UpdateObserverParam,
        },
        service::{
            certificate::CertificateService, observer::ObserverService, training::TrainingService,
        },
        state::AppState,
    },
};

use super::default_per_page;

#[derive(Deserialize)]
pub struct ObserverListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub parish: Option<String>,
    pub status: Option<String>,
}

/// POST /api/observers
/// Public observer registration form
pub async fn register_observer(
    State(state): State<AppState>,
    Json(dto): Json<RegisterObserverDto>,
) -> Result<impl IntoResponse, AppError> {
    let observer_service = ObserverService::new(&state.db);

    let observer = observer_service
        .register(RegisterObserverParam {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            parish: dto.parish,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(observer.into_dto())))
}

/// GET /api/observers
/// List observers with optional parish/status filters
pub async fn get_observers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ObserverListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = match &query.status {
        Some(status) => Some(ObserverStatus::from_str(status).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown observer status '{}'", status))
        })?),
        None => None,
    };

    let observer_service = ObserverService::new(&state.db);
    let observers = observer_service
        .get_observers(GetObserversParam {
            parish: query.parish,
            status,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(observers.into_dto())))
}

/// GET /api/observers/{observer_id}
/// Get one observer
pub async fn get_observer(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let observer_service = ObserverService::new(&state.db);
    let observer = observer_service
        .get_observer(observer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Observer not found".to_string()))?;

    Ok((StatusCode::OK, Json(observer.into_dto())))
}

/// PUT /api/observers/{observer_id}
/// Update observer contact details (admin)
pub async fn update_observer(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
    Json(dto): Json<UpdateObserverDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let observer_service = ObserverService::new(&state.db);
    let observer = observer_service
        .update(UpdateObserverParam {
            observer_id,
            name: dto.name,
            phone: dto.phone,
        })
        .await?;

    Ok((StatusCode::OK, Json(observer.into_dto())))
}

/// DELETE /api/observers/{observer_id}
/// Delete an observer, revoking their certificates (admin)
pub async fn delete_observer(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let observer_service = ObserverService::new(&state.db);
    observer_service.delete(observer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/observers/{observer_id}/activate
/// Activate a verified observer (admin)
pub async fn activate_observer(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let observer_service = ObserverService::new(&state.db);
    observer_service.activate(observer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/observers/{observer_id}/suspend
/// Suspend an observer (admin)
pub async fn suspend_observer(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let observer_service = ObserverService::new(&state.db);
    observer_service.suspend(observer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/observers/{observer_id}/verify
/// Mark an observer's identity as verified (admin)
pub async fn verify_observer(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let observer_service = ObserverService::new(&state.db);
    observer_service.mark_verified(observer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/observers/{observer_id}/station
/// Assign an observer to a polling station (admin)
pub async fn assign_station(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
    Json(dto): Json<AssignStationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let observer_service = ObserverService::new(&state.db);
    observer_service
        .assign_station(observer_id, dto.station_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/observers/{observer_id}/station
/// Clear an observer's station assignment (admin)
pub async fn unassign_station(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let observer_service = ObserverService::new(&state.db);
    observer_service.unassign_station(observer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/observers/{observer_id}/certificates
/// List an observer's certificates
pub async fn get_observer_certificates(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let certificate_service = CertificateService::new(&state.db);
    let certificates = certificate_service.get_for_observer(observer_id).await?;

    let dtos: Vec<_> = certificates.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/observers/{observer_id}/enrollments
/// List an observer's training enrollments
pub async fn get_observer_enrollments(
    State(state): State<AppState>,
    session: Session,
    Path(observer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let training_service = TrainingService::new(&state.db);
    let enrollments = training_service
        .get_observer_enrollments(observer_id)
        .await?;

    let dtos: Vec<_> = enrollments.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
