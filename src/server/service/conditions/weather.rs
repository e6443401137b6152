//! Weather provider client.
//!
//! Mirrors the traffic client: one GET per station, plausibility checks on
//! the response, and a static baseline substituted on failure.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::server::{
    data::setting::SettingRepository,
    error::integration::IntegrationError,
    model::conditions::{ReportSource, WeatherObservation},
};

pub const WEATHER_ENDPOINT_KEY: &str = "weather.endpoint";
pub const WEATHER_API_KEY_KEY: &str = "weather.api_key";

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://weather-api.caffe.org.jm/v1/current";

const PROVIDER: &str = "weather";

// Plausibility bounds for Jamaica
const TEMP_MIN_C: f64 = -10.0;
const TEMP_MAX_C: f64 = 50.0;

#[derive(Debug, Deserialize)]
struct WeatherProviderResponse {
    current: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    condition: String,
    #[serde(rename = "temperatureC")]
    temperature_c: f64,
    #[serde(rename = "rainfallMm")]
    rainfall_mm: f64,
    #[serde(rename = "windKmh")]
    wind_kmh: f64,
}

pub struct WeatherService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
}

impl<'a> WeatherService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Fetches current weather for a station, substituting the baseline
    /// observation when the provider call fails in any way.
    pub async fn fetch_current(
        &self,
        station: &entity::polling_station::Model,
    ) -> WeatherObservation {
        match self.fetch_live(station).await {
            Ok(observation) => observation,
            Err(e) => {
                tracing::warn!(
                    "Weather fetch for station {} failed, using baseline: {}",
                    station.id,
                    e
                );
                fallback_observation(station.id)
            }
        }
    }

    /// Fetches current weather from the provider without a fallback.
    pub async fn fetch_live(
        &self,
        station: &entity::polling_station::Model,
    ) -> Result<WeatherObservation, IntegrationError> {
        let setting_repo = SettingRepository::new(self.db);

        let endpoint = setting_repo
            .get(WEATHER_ENDPOINT_KEY)
            .await
            .ok()
            .flatten()
            .map(|s| s.value)
            .unwrap_or_else(|| DEFAULT_WEATHER_ENDPOINT.to_string());

        let api_key = setting_repo
            .get(WEATHER_API_KEY_KEY)
            .await
            .ok()
            .flatten()
            .map(|s| s.value)
            .ok_or_else(|| IntegrationError::MissingSetting(WEATHER_API_KEY_KEY.to_string()))?;

        let response = self
            .http_client
            .get(&endpoint)
            .query(&[
                ("lat", station.latitude.to_string()),
                ("lon", station.longitude.to_string()),
                ("key", api_key),
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

        let body: WeatherProviderResponse =
            response
                .json()
                .await
                .map_err(|e| IntegrationError::MalformedResponse {
                    provider: PROVIDER,
                    detail: e.to_string(),
                })?;

        observation_from_current(station.id, body.current)
    }
}

fn observation_from_current(
    station_id: i32,
    current: CurrentWeather,
) -> Result<WeatherObservation, IntegrationError> {
    if current.condition.trim().is_empty() {
        return Err(IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: "empty condition".to_string(),
        });
    }
    if !(TEMP_MIN_C..=TEMP_MAX_C).contains(&current.temperature_c) {
        return Err(IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: format!("implausible temperatureC {}", current.temperature_c),
        });
    }
    if current.rainfall_mm < 0.0 || current.wind_kmh < 0.0 {
        return Err(IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: "negative rainfall or wind".to_string(),
        });
    }

    Ok(WeatherObservation {
        station_id,
        condition: current.condition,
        temperature_c: current.temperature_c,
        rainfall_mm: current.rainfall_mm,
        wind_kmh: current.wind_kmh,
        source: ReportSource::Live,
        observed_at: Utc::now(),
    })
}

/// Static baseline observation used when the provider cannot be reached.
pub fn fallback_observation(station_id: i32) -> WeatherObservation {
    WeatherObservation {
        station_id,
        condition: "partly_cloudy".to_string(),
        temperature_c: 30.0,
        rainfall_mm: 0.0,
        wind_kmh: 12.0,
        source: ReportSource::Fallback,
        observed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(condition: &str, temperature_c: f64, rainfall_mm: f64) -> CurrentWeather {
        CurrentWeather {
            condition: condition.to_string(),
            temperature_c,
            rainfall_mm,
            wind_kmh: 10.0,
        }
    }

    #[test]
    fn converts_valid_weather_to_observation() {
        let observation = observation_from_current(4, current("rain", 28.5, 6.0)).unwrap();

        assert_eq!(observation.station_id, 4);
        assert_eq!(observation.condition, "rain");
        assert_eq!(observation.source, ReportSource::Live);
    }

    #[test]
    fn rejects_implausible_temperature() {
        assert!(observation_from_current(1, current("sunny", 72.0, 0.0)).is_err());
        assert!(observation_from_current(1, current("sunny", -20.0, 0.0)).is_err());
    }

    #[test]
    fn rejects_empty_condition() {
        assert!(observation_from_current(1, current("  ", 28.0, 0.0)).is_err());
    }

    #[test]
    fn rejects_negative_rainfall() {
        assert!(observation_from_current(1, current("rain", 28.0, -1.0)).is_err());
    }

    #[test]
    fn fallback_is_marked() {
        let observation = fallback_observation(2);
        assert_eq!(observation.source, ReportSource::Fallback);
        assert_eq!(observation.condition, "partly_cloudy");
    }
}
