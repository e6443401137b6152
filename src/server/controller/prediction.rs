use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, service::prediction::PredictionService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct HorizonQuery {
    #[serde(default = "default_horizon_minutes")]
    pub horizon_minutes: i64,
}

fn default_horizon_minutes() -> i64 {
    60
}

/// GET /api/stations/{station_id}/prediction
/// AI traffic outlook for a station (baseline on provider failure)
pub async fn get_prediction(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Query(query): Query<HorizonQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let prediction_service = PredictionService::new(&state.db, &state.http_client);
    let prediction = prediction_service
        .predict(station_id, query.horizon_minutes)
        .await?;

    Ok((StatusCode::OK, Json(prediction.into_dto())))
}
