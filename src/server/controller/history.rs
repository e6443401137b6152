use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    service::history::{self, HistoryService},
    state::AppState,
};

#[derive(Deserialize)]
pub struct TurnoutQuery {
    pub parish: String,
    pub year: i32,
}

/// GET /api/history/turnout
/// One parish/year turnout record
pub async fn get_turnout(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TurnoutQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let record = history::turnout(&query.parish, query.year).ok_or_else(|| {
        AppError::NotFound(format!(
            "No turnout recorded for {} in {}",
            query.parish, query.year
        ))
    })?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// GET /api/history/parishes/{parish}
/// Participation summary for a parish across recorded elections
pub async fn get_parish_summary(
    State(state): State<AppState>,
    session: Session,
    Path(parish): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = history::parish_summary(&parish).ok_or_else(|| {
        AppError::NotFound(format!("No election history recorded for '{}'", parish))
    })?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// GET /api/history/parishes/{parish}/analysis
/// Narrative participation analysis (template on provider failure)
pub async fn get_parish_analysis(
    State(state): State<AppState>,
    session: Session,
    Path(parish): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let history_service = HistoryService::new(&state.db, &state.http_client);
    let analysis = history_service.analyze(&parish).await?;

    Ok((StatusCode::OK, Json(analysis.into_dto())))
}
