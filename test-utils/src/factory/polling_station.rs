//! Polling station factory for tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test polling stations with customizable fields.
///
/// Defaults place the station in Kingston with monitoring enabled.
pub struct PollingStationFactory<'a> {
    db: &'a DatabaseConnection,
    station_code: String,
    name: String,
    parish: String,
    address: String,
    latitude: f64,
    longitude: f64,
    active: bool,
}

impl<'a> PollingStationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            station_code: format!("KGN-{:04}", id),
            name: format!("Polling Station {}", id),
            parish: "Kingston".to_string(),
            address: format!("{} Duke Street, Kingston", id),
            latitude: 17.9714,
            longitude: -76.7932,
            active: true,
        }
    }

    pub fn station_code(mut self, station_code: impl Into<String>) -> Self {
        self.station_code = station_code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn parish(mut self, parish: impl Into<String>) -> Self {
        self.parish = parish.into();
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the station entity into the database.
    pub async fn build(self) -> Result<entity::polling_station::Model, DbErr> {
        entity::polling_station::ActiveModel {
            station_code: ActiveValue::Set(self.station_code),
            name: ActiveValue::Set(self.name),
            parish: ActiveValue::Set(self.parish),
            address: ActiveValue::Set(self.address),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a polling station with default values.
pub async fn create_station(
    db: &DatabaseConnection,
) -> Result<entity::polling_station::Model, DbErr> {
    PollingStationFactory::new(db).build().await
}
