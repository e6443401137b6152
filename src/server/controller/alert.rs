use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::alert::{AlertWithDeliveriesDto, CreateAlertDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::alert::{AlertSeverity, CreateAlertParam, GetAlertsParam},
        service::alert::AlertService,
        state::AppState,
    },
};

use super::default_per_page;

#[derive(Deserialize)]
pub struct AlertListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    #[serde(default)]
    pub unresolved_only: bool,
}

/// POST /api/alerts
/// Raise an alert and broadcast it to all configured channels (admin)
pub async fn create_alert(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateAlertDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let severity = AlertSeverity::from_str(&dto.severity)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown severity '{}'", dto.severity)))?;

    let alert_service = AlertService::new(&state.db, &state.http_client);
    let (alert, deliveries) = alert_service
        .create_and_broadcast(CreateAlertParam {
            title: dto.title,
            message: dto.message,
            severity,
            parish: dto.parish,
            created_by: user.id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AlertWithDeliveriesDto {
            alert: alert.into_dto(),
            deliveries: deliveries.into_iter().map(|d| d.into_dto()).collect(),
        }),
    ))
}

/// GET /api/alerts
/// List alerts newest-first
pub async fn get_alerts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AlertListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let alert_service = AlertService::new(&state.db, &state.http_client);
    let alerts = alert_service
        .get_alerts(GetAlertsParam {
            unresolved_only: query.unresolved_only,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(alerts.into_dto())))
}

/// GET /api/alerts/{alert_id}
/// Get one alert with its delivery records
pub async fn get_alert(
    State(state): State<AppState>,
    session: Session,
    Path(alert_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let alert_service = AlertService::new(&state.db, &state.http_client);
    let (alert, deliveries) = alert_service
        .get_alert_with_deliveries(alert_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Alert not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(AlertWithDeliveriesDto {
            alert: alert.into_dto(),
            deliveries: deliveries.into_iter().map(|d| d.into_dto()).collect(),
        }),
    ))
}

/// POST /api/alerts/{alert_id}/resolve
/// Mark an alert resolved (admin)
pub async fn resolve_alert(
    State(state): State<AppState>,
    session: Session,
    Path(alert_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let alert_service = AlertService::new(&state.db, &state.http_client);
    alert_service.resolve(alert_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/alerts/{alert_id}/rebroadcast
/// Re-broadcast an unresolved critical alert (admin)
pub async fn rebroadcast_alert(
    State(state): State<AppState>,
    session: Session,
    Path(alert_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let alert_service = AlertService::new(&state.db, &state.http_client);
    let deliveries = alert_service.rebroadcast(alert_id).await?;

    let dtos: Vec<_> = deliveries.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
