use serde::{Deserialize, Serialize};

/// Traffic outlook for a station over a prediction horizon.
///
/// `source` is `model` when the AI provider answered with a valid object and
/// `fallback` when a hand-written baseline was substituted.
#[derive(Serialize, Deserialize, Clone)]
pub struct TrafficPredictionDto {
    pub station_id: i32,
    pub horizon_minutes: i64,
    pub severity: String,
    pub confidence: f64,
    pub trend: String,
    pub advisory: String,
    pub source: String,
}
