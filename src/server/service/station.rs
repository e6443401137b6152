//! Polling station service for business logic.
//!
//! Handles monitoring-target configuration: station CRUD, geographic
//! validation against the Jamaica bounding box, and the monitoring flag that
//! gates scheduled condition collection.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{observer::ObserverRepository, station::StationRepository},
    error::AppError,
    model::station::{
        CreateStationParam, GetStationsParam, PaginatedStations, PollingStation,
        UpdateStationParam,
    },
    util::validate,
};

pub struct StationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new polling station with monitoring enabled.
    ///
    /// # Returns
    /// - `Ok(PollingStation)` - The created station
    /// - `Err(AppError::BadRequest)` - Unknown parish, coordinates outside
    ///   Jamaica, or duplicate station code
    pub async fn create(&self, param: CreateStationParam) -> Result<PollingStation, AppError> {
        if param.station_code.trim().is_empty() {
            return Err(AppError::BadRequest("Station code is required".to_string()));
        }
        let Some(parish) = validate::canonical_parish(&param.parish) else {
            return Err(AppError::BadRequest(format!(
                "Unknown parish '{}'",
                param.parish
            )));
        };
        if !validate::is_within_jamaica(param.latitude, param.longitude) {
            return Err(AppError::BadRequest(
                "Coordinates fall outside Jamaica".to_string(),
            ));
        }

        let station_repo = StationRepository::new(self.db);

        if station_repo
            .find_by_code(param.station_code.trim())
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "A station with this code already exists".to_string(),
            ));
        }

        let station = station_repo
            .create(
                param.station_code.trim().to_string(),
                param.name,
                parish.to_string(),
                param.address,
                param.latitude,
                param.longitude,
            )
            .await?;

        Ok(PollingStation::from_entity(station))
    }

    pub async fn get_station(&self, station_id: i32) -> Result<Option<PollingStation>, AppError> {
        let station_repo = StationRepository::new(self.db);
        let station = station_repo.find_by_id(station_id).await?;
        Ok(station.map(PollingStation::from_entity))
    }

    pub async fn get_stations(
        &self,
        param: GetStationsParam,
    ) -> Result<PaginatedStations, AppError> {
        let station_repo = StationRepository::new(self.db);

        let (entities, total) = station_repo
            .get_paginated(
                param.parish.as_deref(),
                param.active,
                param.page,
                param.per_page,
            )
            .await?;

        let total_pages = (total as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedStations {
            stations: entities
                .into_iter()
                .map(PollingStation::from_entity)
                .collect(),
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Updates station details, re-validating coordinates when they change.
    pub async fn update(&self, param: UpdateStationParam) -> Result<PollingStation, AppError> {
        let station_repo = StationRepository::new(self.db);

        let Some(station) = station_repo.find_by_id(param.station_id).await? else {
            return Err(AppError::NotFound("Polling station not found".to_string()));
        };

        let latitude = param.latitude.unwrap_or(station.latitude);
        let longitude = param.longitude.unwrap_or(station.longitude);
        if !validate::is_within_jamaica(latitude, longitude) {
            return Err(AppError::BadRequest(
                "Coordinates fall outside Jamaica".to_string(),
            ));
        }

        let updated = station_repo
            .update(
                param.station_id,
                param.name,
                param.address,
                param.latitude,
                param.longitude,
            )
            .await?;

        Ok(PollingStation::from_entity(updated))
    }

    /// Enables or disables monitoring for a station.
    pub async fn set_monitoring(&self, station_id: i32, active: bool) -> Result<(), AppError> {
        let station_repo = StationRepository::new(self.db);

        if station_repo.find_by_id(station_id).await?.is_none() {
            return Err(AppError::NotFound("Polling station not found".to_string()));
        }

        station_repo.set_active(station_id, active).await?;

        Ok(())
    }

    /// Deletes a station after unassigning any observers posted to it.
    pub async fn delete(&self, station_id: i32) -> Result<(), AppError> {
        let station_repo = StationRepository::new(self.db);
        let observer_repo = ObserverRepository::new(self.db);

        if station_repo.find_by_id(station_id).await?.is_none() {
            return Err(AppError::NotFound("Polling station not found".to_string()));
        }

        observer_repo.unassign_all_from_station(station_id).await?;
        station_repo.delete(station_id).await?;

        Ok(())
    }
}
