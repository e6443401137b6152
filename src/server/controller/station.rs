use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::station::{CreateStationDto, SetMonitoringDto, UpdateStationDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::station::{CreateStationParam, GetStationsParam, UpdateStationParam},
        service::station::StationService,
        state::AppState,
    },
};

use super::default_per_page;

#[derive(Deserialize)]
pub struct StationListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub parish: Option<String>,
    pub active: Option<bool>,
}

/// POST /api/stations
/// Create a polling station (admin)
pub async fn create_station(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let station_service = StationService::new(&state.db);
    let station = station_service
        .create(CreateStationParam {
            station_code: dto.station_code,
            name: dto.name,
            parish: dto.parish,
            address: dto.address,
            latitude: dto.latitude,
            longitude: dto.longitude,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(station.into_dto())))
}

/// GET /api/stations
/// List polling stations with optional parish/active filters
pub async fn get_stations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<StationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let station_service = StationService::new(&state.db);
    let stations = station_service
        .get_stations(GetStationsParam {
            parish: query.parish,
            active: query.active,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok((StatusCode::OK, Json(stations.into_dto())))
}

/// GET /api/stations/{station_id}
/// Get one polling station
pub async fn get_station(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let station_service = StationService::new(&state.db);
    let station = station_service
        .get_station(station_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Polling station not found".to_string()))?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

/// PUT /api/stations/{station_id}
/// Update a polling station (admin)
pub async fn update_station(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Json(dto): Json<UpdateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let station_service = StationService::new(&state.db);
    let station = station_service
        .update(UpdateStationParam {
            station_id,
            name: dto.name,
            address: dto.address,
            latitude: dto.latitude,
            longitude: dto.longitude,
        })
        .await?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

/// PUT /api/stations/{station_id}/monitoring
/// Enable or disable monitoring for a station (admin)
pub async fn set_monitoring(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Json(dto): Json<SetMonitoringDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let station_service = StationService::new(&state.db);
    station_service.set_monitoring(station_id, dto.active).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/stations/{station_id}
/// Delete a polling station, unassigning its observers (admin)
pub async fn delete_station(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let station_service = StationService::new(&state.db);
    station_service.delete(station_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
