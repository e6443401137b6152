use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct TrafficConditionsDto {
    pub station_id: i32,
    pub severity: String,
    pub jam_factor: f64,
    pub speed_kmh: f64,
    pub delay_minutes: i32,
    pub source: String,
    pub observed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct WeatherConditionsDto {
    pub station_id: i32,
    pub condition: String,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub wind_kmh: f64,
    pub source: String,
    pub observed_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct StationConditionsDto {
    pub station_id: i32,
    pub traffic: TrafficConditionsDto,
    pub weather: WeatherConditionsDto,
}

#[derive(Serialize, Deserialize)]
pub struct ConditionsSnapshotDto {
    pub stations: Vec<StationConditionsDto>,
    /// Station ids whose provider calls failed and were dropped from the batch.
    pub failed_station_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize)]
pub struct ConditionsHistoryDto {
    pub station_id: i32,
    pub window_hours: i64,
    pub traffic: Vec<TrafficConditionsDto>,
    pub weather: Vec<WeatherConditionsDto>,
}

#[derive(Serialize, Deserialize)]
pub struct ConditionsSummaryDto {
    pub station_id: i32,
    pub window_hours: i64,
    pub report_count: usize,
    pub avg_delay_minutes: f64,
    pub max_delay_minutes: i32,
    pub avg_speed_kmh: f64,
    pub dominant_severity: String,
}
