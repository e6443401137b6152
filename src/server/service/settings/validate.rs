//! Per-provider configuration probes.
//!
//! Each validator performs one authenticated request against the configured
//! endpoint and checks the status code. Nothing is parsed or stored; the
//! point is only to confirm the endpoint and key work before election day.

use serde_json::json;

use crate::server::{
    data::setting::SettingRepository,
    error::integration::IntegrationError,
    service::{
        conditions::{
            traffic::{DEFAULT_TRAFFIC_ENDPOINT, TRAFFIC_API_KEY_KEY, TRAFFIC_ENDPOINT_KEY},
            weather::{DEFAULT_WEATHER_ENDPOINT, WEATHER_API_KEY_KEY, WEATHER_ENDPOINT_KEY},
        },
        prediction::{
            AI_API_KEY_KEY, AI_ENDPOINT_KEY, AI_MODEL_KEY, DEFAULT_AI_ENDPOINT, DEFAULT_AI_MODEL,
        },
    },
};

use super::SettingsService;

// Probe coordinates: downtown Kingston
const PROBE_LAT: f64 = 17.9714;
const PROBE_LON: f64 = -76.7932;

impl<'a> SettingsService<'a> {
    pub(crate) async fn check_traffic_provider(&self) -> Result<(), IntegrationError> {
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
                ("lat", PROBE_LAT.to_string()),
                ("lon", PROBE_LON.to_string()),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(|source| IntegrationError::RequestFailed {
                provider: "traffic",
                source,
            })?;

        if !response.status().is_success() {
            return Err(IntegrationError::UnexpectedStatus {
                provider: "traffic",
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    pub(crate) async fn check_weather_provider(&self) -> Result<(), IntegrationError> {
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
                ("lat", PROBE_LAT.to_string()),
                ("lon", PROBE_LON.to_string()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|source| IntegrationError::RequestFailed {
                provider: "weather",
                source,
            })?;

        if !response.status().is_success() {
            return Err(IntegrationError::UnexpectedStatus {
                provider: "weather",
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    pub(crate) async fn check_ai_provider(&self) -> Result<(), IntegrationError> {
        let setting_repo = SettingRepository::new(self.db);

        let endpoint = setting_repo
            .get(AI_ENDPOINT_KEY)
            .await
            .ok()
            .flatten()
            .map(|s| s.value)
            .unwrap_or_else(|| DEFAULT_AI_ENDPOINT.to_string());

        let model = setting_repo
            .get(AI_MODEL_KEY)
            .await
            .ok()
            .flatten()
            .map(|s| s.value)
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string());

        let api_key = setting_repo
            .get(AI_API_KEY_KEY)
            .await
            .ok()
            .flatten()
            .map(|s| s.value)
            .ok_or_else(|| IntegrationError::MissingSetting(AI_API_KEY_KEY.to_string()))?;

        let payload = json!({
            "model": model,
            "messages": [{ "role": "user", "content": "Reply with OK." }],
        });

        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|source| IntegrationError::RequestFailed {
                provider: "ai",
                source,
            })?;

        if !response.status().is_success() {
            return Err(IntegrationError::UnexpectedStatus {
                provider: "ai",
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
