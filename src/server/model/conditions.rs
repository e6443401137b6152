//! Traffic and weather observation domain models.
//!
//! Observations come either from the live providers or from the static
//! fallback baselines; `ReportSource` records which. Traffic severity is
//! derived from the provider's jam factor on a 0-10 scale.

use chrono::{DateTime, Utc};

use crate::{
    model::conditions::{
        ConditionsSummaryDto, StationConditionsDto, TrafficConditionsDto, WeatherConditionsDto,
    },
    server::error::internal::InternalError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TrafficSeverity {
    Light,
    Moderate,
    Heavy,
    Severe,
}

impl TrafficSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::Severe => "severe",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "moderate" => Some(Self::Moderate),
            "heavy" => Some(Self::Heavy),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }

    /// Maps a provider jam factor (0-10) onto the severity bands used
    /// throughout the platform.
    pub fn from_jam_factor(jam_factor: f64) -> Self {
        if jam_factor < 3.0 {
            Self::Light
        } else if jam_factor < 6.0 {
            Self::Moderate
        } else if jam_factor < 8.5 {
            Self::Heavy
        } else {
            Self::Severe
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    Live,
    Fallback,
}

impl ReportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "live" => Some(Self::Live),
            "fallback" => Some(Self::Fallback),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrafficObservation {
    pub station_id: i32,
    pub severity: TrafficSeverity,
    pub jam_factor: f64,
    pub speed_kmh: f64,
    pub delay_minutes: i32,
    pub source: ReportSource,
    pub observed_at: DateTime<Utc>,
}

impl TrafficObservation {
    pub fn from_entity(entity: entity::traffic_report::Model) -> Result<Self, InternalError> {
        let severity = TrafficSeverity::from_str(&entity.severity).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                field: "traffic_report.severity",
                value: entity.severity.clone(),
            }
        })?;
        let source = ReportSource::from_str(&entity.source).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                field: "traffic_report.source",
                value: entity.source.clone(),
            }
        })?;

        Ok(Self {
            station_id: entity.station_id,
            severity,
            jam_factor: entity.jam_factor,
            speed_kmh: entity.speed_kmh,
            delay_minutes: entity.delay_minutes,
            source,
            observed_at: entity.observed_at,
        })
    }

    pub fn into_dto(self) -> TrafficConditionsDto {
        TrafficConditionsDto {
            station_id: self.station_id,
            severity: self.severity.as_str().to_string(),
            jam_factor: self.jam_factor,
            speed_kmh: self.speed_kmh,
            delay_minutes: self.delay_minutes,
            source: self.source.as_str().to_string(),
            observed_at: self.observed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub station_id: i32,
    pub condition: String,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub wind_kmh: f64,
    pub source: ReportSource,
    pub observed_at: DateTime<Utc>,
}

impl WeatherObservation {
    pub fn from_entity(entity: entity::weather_report::Model) -> Result<Self, InternalError> {
        let source = ReportSource::from_str(&entity.source).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                field: "weather_report.source",
                value: entity.source.clone(),
            }
        })?;

        Ok(Self {
            station_id: entity.station_id,
            condition: entity.condition,
            temperature_c: entity.temperature_c,
            rainfall_mm: entity.rainfall_mm,
            wind_kmh: entity.wind_kmh,
            source,
            observed_at: entity.observed_at,
        })
    }

    pub fn into_dto(self) -> WeatherConditionsDto {
        WeatherConditionsDto {
            station_id: self.station_id,
            condition: self.condition,
            temperature_c: self.temperature_c,
            rainfall_mm: self.rainfall_mm,
            wind_kmh: self.wind_kmh,
            source: self.source.as_str().to_string(),
            observed_at: self.observed_at,
        }
    }
}

/// Combined live conditions for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationConditions {
    pub station_id: i32,
    pub traffic: TrafficObservation,
    pub weather: WeatherObservation,
}

impl StationConditions {
    pub fn into_dto(self) -> StationConditionsDto {
        StationConditionsDto {
            station_id: self.station_id,
            traffic: self.traffic.into_dto(),
            weather: self.weather.into_dto(),
        }
    }
}

/// Live conditions for every monitored station, with the ids of stations
/// whose provider calls fell back to baselines.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionsSnapshot {
    pub stations: Vec<StationConditions>,
    pub failed_station_ids: Vec<i32>,
}

impl ConditionsSnapshot {
    pub fn into_dto(self) -> crate::model::conditions::ConditionsSnapshotDto {
        crate::model::conditions::ConditionsSnapshotDto {
            stations: self.stations.into_iter().map(|s| s.into_dto()).collect(),
            failed_station_ids: self.failed_station_ids,
        }
    }
}

/// Stored observations for one station over a lookback window.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionsHistory {
    pub station_id: i32,
    pub window_hours: i64,
    pub traffic: Vec<TrafficObservation>,
    pub weather: Vec<WeatherObservation>,
}

impl ConditionsHistory {
    pub fn into_dto(self) -> crate::model::conditions::ConditionsHistoryDto {
        crate::model::conditions::ConditionsHistoryDto {
            station_id: self.station_id,
            window_hours: self.window_hours,
            traffic: self.traffic.into_iter().map(|t| t.into_dto()).collect(),
            weather: self.weather.into_iter().map(|w| w.into_dto()).collect(),
        }
    }
}

/// Aggregates computed in memory over a window of stored traffic reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionsSummary {
    pub station_id: i32,
    pub window_hours: i64,
    pub report_count: usize,
    pub avg_delay_minutes: f64,
    pub max_delay_minutes: i32,
    pub avg_speed_kmh: f64,
    pub dominant_severity: TrafficSeverity,
}

impl ConditionsSummary {
    pub fn into_dto(self) -> ConditionsSummaryDto {
        ConditionsSummaryDto {
            station_id: self.station_id,
            window_hours: self.window_hours,
            report_count: self.report_count,
            avg_delay_minutes: self.avg_delay_minutes,
            max_delay_minutes: self.max_delay_minutes,
            avg_speed_kmh: self.avg_speed_kmh,
            dominant_severity: self.dominant_severity.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jam_factor_maps_to_severity_bands() {
        assert_eq!(TrafficSeverity::from_jam_factor(0.0), TrafficSeverity::Light);
        assert_eq!(TrafficSeverity::from_jam_factor(2.9), TrafficSeverity::Light);
        assert_eq!(
            TrafficSeverity::from_jam_factor(3.0),
            TrafficSeverity::Moderate
        );
        assert_eq!(
            TrafficSeverity::from_jam_factor(5.9),
            TrafficSeverity::Moderate
        );
        assert_eq!(TrafficSeverity::from_jam_factor(6.0), TrafficSeverity::Heavy);
        assert_eq!(TrafficSeverity::from_jam_factor(8.4), TrafficSeverity::Heavy);
        assert_eq!(
            TrafficSeverity::from_jam_factor(8.5),
            TrafficSeverity::Severe
        );
        assert_eq!(
            TrafficSeverity::from_jam_factor(10.0),
            TrafficSeverity::Severe
        );
    }

    #[test]
    fn severity_round_trips_through_str() {
        for severity in [
            TrafficSeverity::Light,
            TrafficSeverity::Moderate,
            TrafficSeverity::Heavy,
            TrafficSeverity::Severe,
        ] {
            assert_eq!(TrafficSeverity::from_str(severity.as_str()), Some(severity));
        }
    }
}
