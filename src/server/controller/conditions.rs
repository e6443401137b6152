use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, service::conditions::ConditionsService,
    state::AppState,
};

const MAX_WINDOW_HOURS: i64 = 168;

#[derive(Deserialize)]
pub struct WindowQuery {
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,
}

fn default_window_hours() -> i64 {
    24
}

fn check_window(window_hours: i64) -> Result<(), AppError> {
    if !(1..=MAX_WINDOW_HOURS).contains(&window_hours) {
        return Err(AppError::BadRequest(format!(
            "window_hours must be between 1 and {}",
            MAX_WINDOW_HOURS
        )));
    }
    Ok(())
}

/// GET /api/stations/{station_id}/conditions
/// Live traffic and weather for one station
pub async fn get_station_conditions(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let conditions_service = ConditionsService::new(&state.db, &state.http_client);
    let conditions = conditions_service.station_conditions(station_id).await?;

    Ok((StatusCode::OK, Json(conditions.into_dto())))
}

/// GET /api/conditions/snapshot
/// Live conditions for every monitored station
pub async fn get_snapshot(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let conditions_service = ConditionsService::new(&state.db, &state.http_client);
    let snapshot = conditions_service.snapshot().await?;

    Ok((StatusCode::OK, Json(snapshot.into_dto())))
}

/// GET /api/stations/{station_id}/conditions/history
/// Stored observations for a station over a lookback window
pub async fn get_history(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Query(query): Query<WindowQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    check_window(query.window_hours)?;

    let conditions_service = ConditionsService::new(&state.db, &state.http_client);
    let history = conditions_service
        .history(station_id, query.window_hours)
        .await?;

    Ok((StatusCode::OK, Json(history.into_dto())))
}

/// GET /api/stations/{station_id}/conditions/summary
/// In-memory aggregates over a station's stored traffic reports
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Query(query): Query<WindowQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    check_window(query.window_hours)?;

    let conditions_service = ConditionsService::new(&state.db, &state.http_client);
    let summary = conditions_service
        .summary(station_id, query.window_hours)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
