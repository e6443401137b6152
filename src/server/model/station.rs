//! Polling station domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::station::{PaginatedStationsDto, PollingStationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct PollingStation {
    pub id: i32,
    pub station_code: String,
    pub name: String,
    pub parish: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl PollingStation {
    pub fn from_entity(entity: entity::polling_station::Model) -> Self {
        Self {
            id: entity.id,
            station_code: entity.station_code,
            name: entity.name,
            parish: entity.parish,
            address: entity.address,
            latitude: entity.latitude,
            longitude: entity.longitude,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PollingStationDto {
        PollingStationDto {
            id: self.id,
            station_code: self.station_code,
            name: self.name,
            parish: self.parish,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStationParam {
    pub station_code: String,
    pub name: String,
    pub parish: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct UpdateStationParam {
    pub station_id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct GetStationsParam {
    pub parish: Option<String>,
    pub active: Option<bool>,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedStations {
    pub stations: Vec<PollingStation>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedStations {
    pub fn into_dto(self) -> PaginatedStationsDto {
        PaginatedStationsDto {
            stations: self.stations.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
