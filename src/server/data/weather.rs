//! Weather report data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct WeatherReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeatherReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        station_id: i32,
        condition: &str,
        temperature_c: f64,
        rainfall_mm: f64,
        wind_kmh: f64,
        source: &str,
        observed_at: DateTime<Utc>,
    ) -> Result<entity::weather_report::Model, DbErr> {
        entity::weather_report::ActiveModel {
            station_id: ActiveValue::Set(station_id),
            condition: ActiveValue::Set(condition.to_string()),
            temperature_c: ActiveValue::Set(temperature_c),
            rainfall_mm: ActiveValue::Set(rainfall_mm),
            wind_kmh: ActiveValue::Set(wind_kmh),
            source: ActiveValue::Set(source.to_string()),
            observed_at: ActiveValue::Set(observed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets reports for a station observed at or after `since`, newest first.
    pub async fn get_since(
        &self,
        station_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<entity::weather_report::Model>, DbErr> {
        entity::prelude::WeatherReport::find()
            .filter(entity::weather_report::Column::StationId.eq(station_id))
            .filter(entity::weather_report::Column::ObservedAt.gte(since))
            .order_by_desc(entity::weather_report::Column::ObservedAt)
            .all(self.db)
            .await
    }
}
