//! AI traffic prediction domain models.

use crate::{model::prediction::TrafficPredictionDto, server::model::conditions::TrafficSeverity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Worsening => "worsening",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "improving" => Some(Self::Improving),
            "stable" => Some(Self::Stable),
            "worsening" => Some(Self::Worsening),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    Model,
    Fallback,
}

impl PredictionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}

/// A validated prediction, whether the AI produced it or a baseline did.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficPrediction {
    pub station_id: i32,
    pub horizon_minutes: i64,
    pub severity: TrafficSeverity,
    pub confidence: f64,
    pub trend: Trend,
    pub advisory: String,
    pub source: PredictionSource,
}

impl TrafficPrediction {
    pub fn into_dto(self) -> TrafficPredictionDto {
        TrafficPredictionDto {
            station_id: self.station_id,
            horizon_minutes: self.horizon_minutes,
            severity: self.severity.as_str().to_string(),
            confidence: self.confidence,
            trend: self.trend.as_str().to_string(),
            advisory: self.advisory,
            source: self.source.as_str().to_string(),
        }
    }
}
