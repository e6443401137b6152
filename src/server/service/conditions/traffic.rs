//! Traffic provider client.
//!
//! One GET per station with its coordinates, shape validation on the
//! response, and a static baseline observation substituted on any failure.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::server::{
    data::setting::SettingRepository,
    error::integration::IntegrationError,
    model::conditions::{ReportSource, TrafficObservation, TrafficSeverity},
};

pub const TRAFFIC_ENDPOINT_KEY: &str = "traffic.endpoint";
pub const TRAFFIC_API_KEY_KEY: &str = "traffic.api_key";

pub const DEFAULT_TRAFFIC_ENDPOINT: &str = "https://traffic-api.caffe.org.jm/v1/flow";

const PROVIDER: &str = "traffic";

/// Baseline values substituted when the provider is unreachable.
const FALLBACK_JAM_FACTOR: f64 = 3.5;
const FALLBACK_SPEED_KMH: f64 = 32.0;

#[derive(Debug, Deserialize)]
struct TrafficProviderResponse {
    flow: TrafficFlow,
}

#[derive(Debug, Deserialize)]
struct TrafficFlow {
    #[serde(rename = "jamFactor")]
    jam_factor: f64,
    #[serde(rename = "speedKmh")]
    speed_kmh: f64,
}

pub struct TrafficService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
}

impl<'a> TrafficService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Fetches current traffic for a station, substituting the baseline
    /// observation when the provider call fails in any way.
    pub async fn fetch_current(
        &self,
        station: &entity::polling_station::Model,
    ) -> TrafficObservation {
        match self.fetch_live(station).await {
            Ok(observation) => observation,
            Err(e) => {
                tracing::warn!(
                    "Traffic fetch for station {} failed, using baseline: {}",
                    station.id,
                    e
                );
                fallback_observation(station.id)
            }
        }
    }

    /// Fetches current traffic from the provider without a fallback.
    ///
    /// # Returns
    /// - `Ok(TrafficObservation)` - Validated live observation
    /// - `Err(IntegrationError)` - Missing API key, request failure,
    ///   non-success status, or malformed response body
    pub async fn fetch_live(
        &self,
        station: &entity::polling_station::Model,
    ) -> Result<TrafficObservation, IntegrationError> {
        let setting_repo = SettingRepository::new(self.db);

        let endpoint = setting_repo
            .get(TRAFFIC_ENDPOINT_KEY)
            .await
            .ok()
            .flatten()
            .map(|s| s.value)
            .unwrap_or_else(|| DEFAULT_TRAFFIC_ENDPOINT.to_string());

        let api_key = setting_repo
            .get(TRAFFIC_API_KEY_KEY)
            .await
            .ok()
            .flatten()
            .map(|s| s.value)
            .ok_or_else(|| IntegrationError::MissingSetting(TRAFFIC_API_KEY_KEY.to_string()))?;

        let response = self
            .http_client
            .get(&endpoint)
            .query(&[
                ("lat", station.latitude.to_string()),
                ("lon", station.longitude.to_string()),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(|source| IntegrationError::RequestFailed {
                provider: PROVIDER,
                source,
            })?;

        if !response.status().is_success() {
            return Err(IntegrationError::UnexpectedStatus {
                provider: PROVIDER,
                status: response.status().as_u16(),
            });
        }

        let body: TrafficProviderResponse =
            response
                .json()
                .await
                .map_err(|e| IntegrationError::MalformedResponse {
                    provider: PROVIDER,
                    detail: e.to_string(),
                })?;

        observation_from_flow(station.id, body.flow)
    }
}

fn observation_from_flow(
    station_id: i32,
    flow: TrafficFlow,
) -> Result<TrafficObservation, IntegrationError> {
    if !(0.0..=10.0).contains(&flow.jam_factor) {
        return Err(IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: format!("jamFactor {} outside 0-10", flow.jam_factor),
        });
    }
    if flow.speed_kmh < 0.0 {
        return Err(IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: format!("negative speedKmh {}", flow.speed_kmh),
        });
    }

    Ok(TrafficObservation {
        station_id,
        severity: TrafficSeverity::from_jam_factor(flow.jam_factor),
        jam_factor: flow.jam_factor,
        speed_kmh: flow.speed_kmh,
        delay_minutes: delay_minutes_from_jam_factor(flow.jam_factor),
        source: ReportSource::Live,
        observed_at: Utc::now(),
    })
}

/// Rough minutes-of-delay heuristic the console displays alongside the
/// jam factor.
fn delay_minutes_from_jam_factor(jam_factor: f64) -> i32 {
    (jam_factor * 3.0).round() as i32
}

/// Static baseline observation used when the provider cannot be reached.
pub fn fallback_observation(station_id: i32) -> TrafficObservation {
    TrafficObservation {
        station_id,
        severity: TrafficSeverity::from_jam_factor(FALLBACK_JAM_FACTOR),
        jam_factor: FALLBACK_JAM_FACTOR,
        speed_kmh: FALLBACK_SPEED_KMH,
        delay_minutes: delay_minutes_from_jam_factor(FALLBACK_JAM_FACTOR),
        source: ReportSource::Fallback,
        observed_at: Utc::now(),
    }
}
