//! Traffic report data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct TrafficReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrafficReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        station_id: i32,
        severity: &str,
        jam_factor: f64,
        speed_kmh: f64,
        delay_minutes: i32,
        source: &str,
        observed_at: DateTime<Utc>,
    ) -> Result<entity::traffic_report::Model, DbErr> {
        entity::traffic_report::ActiveModel {
            station_id: ActiveValue::Set(station_id),
            severity: ActiveValue::Set(severity.to_string()),
            jam_factor: ActiveValue::Set(jam_factor),
            speed_kmh: ActiveValue::Set(speed_kmh),
            delay_minutes: ActiveValue::Set(delay_minutes),
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
    ) -> Result<Vec<entity::traffic_report::Model>, DbErr> {
        entity::prelude::TrafficReport::find()
            .filter(entity::traffic_report::Column::StationId.eq(station_id))
            .filter(entity::traffic_report::Column::ObservedAt.gte(since))
            .order_by_desc(entity::traffic_report::Column::ObservedAt)
            .all(self.db)
            .await
    }
}
