//! AI traffic prediction.
//!
//! The prediction flow is prompt templating plus field validation: format a
//! text prompt from a station's recent traffic aggregates, POST a chat
//! payload to the configured AI endpoint, pull the first `{...}` JSON object
//! out of the free-text reply, and validate four scalar fields against their
//! allowed values. Any failure along the way substitutes a hand-written
//! baseline prediction keyed by Jamaica's local time of day.

use chrono::{Timelike, Utc};
use regex::Regex;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;
use std::sync::OnceLock;

use crate::server::{
    data::{setting::SettingRepository, station::StationRepository, traffic::TrafficReportRepository},
    error::{integration::IntegrationError, AppError},
    model::{
        conditions::{ConditionsSummary, TrafficObservation, TrafficSeverity},
        prediction::{PredictionSource, TrafficPrediction, Trend},
    },
    service::conditions::summarize_traffic,
};

pub const AI_ENDPOINT_KEY: &str = "ai.endpoint";
pub const AI_API_KEY_KEY: &str = "ai.api_key";
pub const AI_MODEL_KEY: &str = "ai.model";

pub const DEFAULT_AI_ENDPOINT: &str = "https://ai-gateway.caffe.org.jm/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "traffic-analyst-1";

const PROVIDER: &str = "ai";

/// Hours of recent reports fed into the prompt.
const LOOKBACK_HOURS: i64 = 6;

/// Jamaica is UTC-5 year round.
const JAMAICA_UTC_OFFSET_HOURS: i32 = -5;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// The unvalidated object extracted from the model's reply.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    severity: String,
    confidence: f64,
    trend: String,
    advisory: String,
}

pub struct PredictionService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
}

impl<'a> PredictionService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Produces a traffic outlook for a station over the given horizon.
    ///
    /// # Returns
    /// - `Ok(TrafficPrediction)` - A model prediction, or the time-of-day
    ///   baseline when the provider call or validation failed
    /// - `Err(AppError::NotFound)` - No station with that id
    /// - `Err(AppError::BadRequest)` - Horizon outside 15 minutes - 24 hours
    pub async fn predict(
        &self,
        station_id: i32,
        horizon_minutes: i64,
    ) -> Result<TrafficPrediction, AppError> {
        if !(15..=1440).contains(&horizon_minutes) {
            return Err(AppError::BadRequest(
                "Horizon must be between 15 and 1440 minutes".to_string(),
            ));
        }

        let station_repo = StationRepository::new(self.db);
        let Some(station) = station_repo.find_by_id(station_id).await? else {
            return Err(AppError::NotFound("Polling station not found".to_string()));
        };

        let since = Utc::now() - chrono::Duration::hours(LOOKBACK_HOURS);
        let observations = TrafficReportRepository::new(self.db)
            .get_since(station_id, since)
            .await?
            .into_iter()
            .map(TrafficObservation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let summary = summarize_traffic(station_id, LOOKBACK_HOURS, &observations);
        let prompt = build_prompt(&station, &summary, horizon_minutes);

        let raw = match self.request_prediction(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    "AI prediction for station {} failed, using baseline: {}",
                    station_id,
                    e
                );
                return Ok(fallback_prediction(
                    station_id,
                    horizon_minutes,
                    jamaica_local_hour(),
                ));
            }
        };

        match validate_prediction(&raw) {
            Ok((severity, confidence, trend, advisory)) => Ok(TrafficPrediction {
                station_id,
                horizon_minutes,
                severity,
                confidence,
                trend,
                advisory,
                source: PredictionSource::Model,
            }),
            Err(e) => {
                tracing::warn!(
                    "AI prediction for station {} failed validation, using baseline: {}",
                    station_id,
                    e
                );
                Ok(fallback_prediction(
                    station_id,
                    horizon_minutes,
                    jamaica_local_hour(),
                ))
            }
        }
    }

    /// One POST to the chat endpoint; returns the extracted raw object.
    async fn request_prediction(&self, prompt: &str) -> Result<RawPrediction, IntegrationError> {
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
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(&payload)
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

        let body: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| IntegrationError::MalformedResponse {
                    provider: PROVIDER,
                    detail: e.to_string(),
                })?;

        let content = body
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| IntegrationError::MalformedResponse {
                provider: PROVIDER,
                detail: "response carried no choices".to_string(),
            })?;

        let object = extract_json_object(content).ok_or_else(|| {
            IntegrationError::MalformedResponse {
                provider: PROVIDER,
                detail: "no JSON object found in reply text".to_string(),
            }
        })?;

        serde_json::from_str(object).map_err(|e| IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: e.to_string(),
        })
    }
}

/// Formats the prompt from the station and its recent aggregates.
fn build_prompt(
    station: &entity::polling_station::Model,
    summary: &ConditionsSummary,
    horizon_minutes: i64,
) -> String {
    format!(
        "You are a traffic analyst for Jamaican election logistics. \
         Polling station {} ({}) in {} parish has had {} traffic reports in the last {} hours: \
         average delay {:.1} minutes, maximum delay {} minutes, average speed {:.1} km/h, \
         dominant severity {}. \
         Predict conditions around the station over the next {} minutes. \
         Reply with a JSON object with exactly these fields: \
         \"severity\" (light|moderate|heavy|severe), \"confidence\" (0.0-1.0), \
         \"trend\" (improving|stable|worsening), \"advisory\" (one sentence for observers).",
        station.station_code,
        station.name,
        station.parish,
        summary.report_count,
        summary.window_hours,
        summary.avg_delay_minutes,
        summary.max_delay_minutes,
        summary.avg_speed_kmh,
        summary.dominant_severity.as_str(),
        horizon_minutes,
    )
}

/// Pulls the first `{...}` span out of free text. Greedy so nested objects
/// stay intact; replies wrapping JSON in prose or code fences still parse.
fn extract_json_object(text: &str) -> Option<&str> {
    static OBJECT_RE: OnceLock<Regex> = OnceLock::new();
    let re = OBJECT_RE.get_or_init(|| Regex::new(r"\{[\s\S]*\}").unwrap());

    re.find(text).map(|m| m.as_str())
}

/// Validates the four scalar fields against their allowed values.
fn validate_prediction(
    raw: &RawPrediction,
) -> Result<(TrafficSeverity, f64, Trend, String), IntegrationError> {
    let severity = TrafficSeverity::from_str(&raw.severity).ok_or_else(|| {
        IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: format!("unknown severity '{}'", raw.severity),
        }
    })?;

    if !(0.0..=1.0).contains(&raw.confidence) {
        return Err(IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: format!("confidence {} outside 0-1", raw.confidence),
        });
    }

    let trend = Trend::from_str(&raw.trend).ok_or_else(|| IntegrationError::MalformedResponse {
        provider: PROVIDER,
        detail: format!("unknown trend '{}'", raw.trend),
    })?;

    let advisory = raw.advisory.trim();
    if advisory.is_empty() {
        return Err(IntegrationError::MalformedResponse {
            provider: PROVIDER,
            detail: "empty advisory".to_string(),
        });
    }

    Ok((severity, raw.confidence, trend, advisory.to_string()))
}

fn jamaica_local_hour() -> u32 {
    (Utc::now().hour() as i32 + JAMAICA_UTC_OFFSET_HOURS).rem_euclid(24) as u32
}

/// Hand-written baseline predictions selected by local time of day.
fn fallback_prediction(station_id: i32, horizon_minutes: i64, local_hour: u32) -> TrafficPrediction {
    let (severity, confidence, trend, advisory) = match local_hour {
        6..=9 => (
            TrafficSeverity::Heavy,
            0.4,
            Trend::Worsening,
            "Morning peak congestion expected around the station; observers should allow extra travel time.",
        ),
        16..=19 => (
            TrafficSeverity::Heavy,
            0.4,
            Trend::Improving,
            "Evening peak congestion easing after rush hour; expect residual delays near the station.",
        ),
        _ => (
            TrafficSeverity::Light,
            0.5,
            Trend::Stable,
            "Off-peak conditions expected; normal travel times to the station.",
        ),
    };

    TrafficPrediction {
        station_id,
        horizon_minutes,
        severity,
        confidence,
        trend,
        advisory: advisory.to_string(),
        source: PredictionSource::Fallback,
    }
}
