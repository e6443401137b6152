use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct PollingStationDto {
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

#[derive(Serialize, Deserialize)]
pub struct CreateStationDto {
    pub station_code: String,
    pub name: String,
    pub parish: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateStationDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct SetMonitoringDto {
    pub active: bool,
}

#[derive(Serialize, Deserialize)]
pub struct PaginatedStationsDto {
    pub stations: Vec<PollingStationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
