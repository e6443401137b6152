use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::certificate::IssueCertificateDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::certificate::IssueCertificateParam,
        service::certificate::CertificateService,
        state::AppState,
    },
};

/// POST /api/certificates
/// Manually issue a certificate (admin)
pub async fn issue_certificate(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<IssueCertificateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let certificate_service = CertificateService::new(&state.db);
    let certificate = certificate_service
        .issue(IssueCertificateParam {
            observer_id: dto.observer_id,
            course_id: dto.course_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(certificate.into_dto())))
}

/// GET /api/certificates/verify/{serial}
/// Public certificate verification by serial
pub async fn verify_certificate(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let certificate_service = CertificateService::new(&state.db);
    let status = certificate_service.verify(&serial).await?;

    Ok((StatusCode::OK, Json(status.into_dto(serial))))
}

/// POST /api/certificates/{certificate_id}/revoke
/// Revoke a certificate (admin)
pub async fn revoke_certificate(
    State(state): State<AppState>,
    session: Session,
    Path(certificate_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let certificate_service = CertificateService::new(&state.db);
    certificate_service.revoke(certificate_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
