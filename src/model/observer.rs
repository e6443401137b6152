use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct ObserverDto {
    pub id: i32,
    pub badge_number: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub parish: String,
    pub status: String,
    pub verified: bool,
    pub station_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterObserverDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub parish: String,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateObserverDto {
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct AssignStationDto {
    pub station_id: i32,
}

#[derive(Serialize, Deserialize)]
pub struct PaginatedObserversDto {
    pub observers: Vec<ObserverDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
