//! Traffic and weather conditions for polling stations.
//!
//! Each provider call is one HTTP GET with the station's coordinates,
//! validated for shape and substituted with a static baseline on any
//! failure. Fan-out across stations runs the per-station calls concurrently
//! and drops failures from the stored batch.

pub mod traffic;
pub mod weather;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio::task::JoinSet;

use crate::server::{
    data::{
        station::StationRepository, traffic::TrafficReportRepository,
        weather::WeatherReportRepository,
    },
    error::AppError,
    model::conditions::{
        ConditionsHistory, ConditionsSnapshot, ConditionsSummary, ReportSource, StationConditions,
        TrafficObservation, TrafficSeverity, WeatherObservation,
    },
};

use traffic::TrafficService;
use weather::WeatherService;

/// Outcome of one scheduled collection run.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOutcome {
    pub stored: usize,
    pub failed_station_ids: Vec<i32>,
}

pub struct ConditionsService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
}

impl<'a> ConditionsService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Fetches live conditions for one station, falling back per provider.
    pub async fn station_conditions(&self, station_id: i32) -> Result<StationConditions, AppError> {
        let station_repo = StationRepository::new(self.db);

        let Some(station) = station_repo.find_by_id(station_id).await? else {
            return Err(AppError::NotFound("Polling station not found".to_string()));
        };

        let traffic = TrafficService::new(self.db, self.http_client)
            .fetch_current(&station)
            .await;
        let weather = WeatherService::new(self.db, self.http_client)
            .fetch_current(&station)
            .await;

        Ok(StationConditions {
            station_id: station.id,
            traffic,
            weather,
        })
    }

    /// Fetches live conditions for every monitored station concurrently.
    ///
    /// Stations whose providers fell back to baselines are listed in
    /// `failed_station_ids` but still included in the snapshot.
    pub async fn snapshot(&self) -> Result<ConditionsSnapshot, AppError> {
        let stations = StationRepository::new(self.db).get_all_active().await?;

        let mut join_set = JoinSet::new();
        for station in stations {
            let db = self.db.clone();
            let http_client = self.http_client.clone();

            join_set.spawn(async move {
                let traffic = TrafficService::new(&db, &http_client)
                    .fetch_current(&station)
                    .await;
                let weather = WeatherService::new(&db, &http_client)
                    .fetch_current(&station)
                    .await;

                StationConditions {
                    station_id: station.id,
                    traffic,
                    weather,
                }
            });
        }

        let mut conditions = Vec::new();
        let mut failed_station_ids = Vec::new();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(station_conditions) => {
                    if station_conditions.traffic.source == ReportSource::Fallback
                        || station_conditions.weather.source == ReportSource::Fallback
                    {
                        failed_station_ids.push(station_conditions.station_id);
                    }
                    conditions.push(station_conditions);
                }
                Err(e) => tracing::error!("Snapshot task panicked: {}", e),
            }
        }

        conditions.sort_by_key(|c| c.station_id);
        failed_station_ids.sort_unstable();

        Ok(ConditionsSnapshot {
            stations: conditions,
            failed_station_ids,
        })
    }

    /// Collects live conditions for every monitored station and stores one
    /// report row per provider per success.
    ///
    /// Only live provider responses are persisted; a station whose fetch
    /// failed is logged, added to the failed list, and dropped from the
    /// batch.
    pub async fn collect_and_store(&self) -> Result<CollectionOutcome, AppError> {
        let stations = StationRepository::new(self.db).get_all_active().await?;

        let mut join_set = JoinSet::new();
        for station in stations {
            let db = self.db.clone();
            let http_client = self.http_client.clone();

            join_set.spawn(async move {
                let station_id = station.id;
                let traffic = TrafficService::new(&db, &http_client)
                    .fetch_live(&station)
                    .await;
                let weather = WeatherService::new(&db, &http_client)
                    .fetch_live(&station)
                    .await;

                (station_id, traffic.and_then(|t| weather.map(|w| (t, w))))
            });
        }

        let traffic_repo = TrafficReportRepository::new(self.db);
        let weather_repo = WeatherReportRepository::new(self.db);

        let mut stored = 0;
        let mut failed_station_ids = Vec::new();

        while let Some(joined) = join_set.join_next().await {
            let (station_id, result) = match joined {
                Ok(pair) => pair,
                Err(e) => {
                    tracing::error!("Collection task panicked: {}", e);
                    continue;
                }
            };

            match result {
                Ok((traffic, weather)) => {
                    traffic_repo
                        .create(
                            station_id,
                            traffic.severity.as_str(),
                            traffic.jam_factor,
                            traffic.speed_kmh,
                            traffic.delay_minutes,
                            traffic.source.as_str(),
                            traffic.observed_at,
                        )
                        .await?;
                    weather_repo
                        .create(
                            station_id,
                            &weather.condition,
                            weather.temperature_c,
                            weather.rainfall_mm,
                            weather.wind_kmh,
                            weather.source.as_str(),
                            weather.observed_at,
                        )
                        .await?;
                    stored += 1;
                }
                Err(e) => {
                    tracing::warn!("Dropping station {} from collection batch: {}", station_id, e);
                    failed_station_ids.push(station_id);
                }
            }
        }

        failed_station_ids.sort_unstable();

        Ok(CollectionOutcome {
            stored,
            failed_station_ids,
        })
    }

    /// Returns stored observations for a station over a lookback window.
    pub async fn history(
        &self,
        station_id: i32,
        window_hours: i64,
    ) -> Result<ConditionsHistory, AppError> {
        let station_repo = StationRepository::new(self.db);

        if station_repo.find_by_id(station_id).await?.is_none() {
            return Err(AppError::NotFound("Polling station not found".to_string()));
        }

        let since = Utc::now() - Duration::hours(window_hours);

        let traffic = TrafficReportRepository::new(self.db)
            .get_since(station_id, since)
            .await?
            .into_iter()
            .map(TrafficObservation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let weather = WeatherReportRepository::new(self.db)
            .get_since(station_id, since)
            .await?
            .into_iter()
            .map(WeatherObservation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConditionsHistory {
            station_id,
            window_hours,
            traffic,
            weather,
        })
    }

    /// Computes in-memory aggregates over the station's stored traffic
    /// reports for the window.
    pub async fn summary(
        &self,
        station_id: i32,
        window_hours: i64,
    ) -> Result<ConditionsSummary, AppError> {
        let station_repo = StationRepository::new(self.db);

        if station_repo.find_by_id(station_id).await?.is_none() {
            return Err(AppError::NotFound("Polling station not found".to_string()));
        }

        let since = Utc::now() - Duration::hours(window_hours);

        let observations = TrafficReportRepository::new(self.db)
            .get_since(station_id, since)
            .await?
            .into_iter()
            .map(TrafficObservation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(summarize_traffic(station_id, window_hours, &observations))
    }
}

/// Aggregates a window of traffic observations: average and maximum delay,
/// average speed, and the most frequent severity (ties go to the more
/// severe band). An empty window yields zeroed aggregates.
pub fn summarize_traffic(
    station_id: i32,
    window_hours: i64,
    observations: &[TrafficObservation],
) -> ConditionsSummary {
    if observations.is_empty() {
        return ConditionsSummary {
            station_id,
            window_hours,
            report_count: 0,
            avg_delay_minutes: 0.0,
            max_delay_minutes: 0,
            avg_speed_kmh: 0.0,
            dominant_severity: TrafficSeverity::Light,
        };
    }

    let count = observations.len();
    let delay_sum: i64 = observations.iter().map(|o| o.delay_minutes as i64).sum();
    let speed_sum: f64 = observations.iter().map(|o| o.speed_kmh).sum();
    let max_delay = observations
        .iter()
        .map(|o| o.delay_minutes)
        .max()
        .unwrap_or(0);

    let mut severity_counts = [0usize; 4];
    for observation in observations {
        let idx = match observation.severity {
            TrafficSeverity::Light => 0,
            TrafficSeverity::Moderate => 1,
            TrafficSeverity::Heavy => 2,
            TrafficSeverity::Severe => 3,
        };
        severity_counts[idx] += 1;
    }

    // max_by_key keeps the last maximal element, so scanning light to severe
    // resolves ties to the worse band
    let dominant_severity = [
        TrafficSeverity::Light,
        TrafficSeverity::Moderate,
        TrafficSeverity::Heavy,
        TrafficSeverity::Severe,
    ]
    .into_iter()
    .max_by_key(|severity| {
        severity_counts[match severity {
            TrafficSeverity::Light => 0,
            TrafficSeverity::Moderate => 1,
            TrafficSeverity::Heavy => 2,
            TrafficSeverity::Severe => 3,
        }]
    })
    .unwrap_or(TrafficSeverity::Light);

    ConditionsSummary {
        station_id,
        window_hours,
        report_count: count,
        avg_delay_minutes: delay_sum as f64 / count as f64,
        max_delay_minutes: max_delay,
        avg_speed_kmh: speed_sum / count as f64,
        dominant_severity,
    }
}
