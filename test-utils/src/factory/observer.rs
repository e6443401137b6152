//! Observer factory for tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test observers with customizable fields.
///
/// Defaults mirror a fresh registration: `pending` status, unverified,
/// no station assignment.
pub struct ObserverFactory<'a> {
    db: &'a DatabaseConnection,
    badge_number: String,
    name: String,
    email: String,
    phone: Option<String>,
    parish: String,
    status: String,
    verified: bool,
    station_id: Option<i32>,
}

impl<'a> ObserverFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            badge_number: format!("OBS-{:06}", id),
            name: format!("Observer {}", id),
            email: format!("observer{}@caffe.org.jm", id),
            phone: None,
            parish: "Kingston".to_string(),
            status: "pending".to_string(),
            verified: false,
            station_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn parish(mut self, parish: impl Into<String>) -> Self {
        self.parish = parish.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn station_id(mut self, station_id: i32) -> Self {
        self.station_id = Some(station_id);
        self
    }

    /// Builds and inserts the observer entity into the database.
    pub async fn build(self) -> Result<entity::observer::Model, DbErr> {
        entity::observer::ActiveModel {
            badge_number: ActiveValue::Set(self.badge_number),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            parish: ActiveValue::Set(self.parish),
            status: ActiveValue::Set(self.status),
            verified: ActiveValue::Set(self.verified),
            station_id: ActiveValue::Set(self.station_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an observer with default values.
pub async fn create_observer(db: &DatabaseConnection) -> Result<entity::observer::Model, DbErr> {
    ObserverFactory::new(db).build().await
}

/// Creates a verified, active observer.
pub async fn create_active_observer(
    db: &DatabaseConnection,
) -> Result<entity::observer::Model, DbErr> {
    ObserverFactory::new(db)
        .status("active")
        .verified(true)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::{Observer, PollingStation};

    #[tokio::test]
    async fn creates_observer_with_registration_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(PollingStation)
            .with_table(Observer)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let observer = create_observer(db).await?;

        assert_eq!(observer.status, "pending");
        assert!(!observer.verified);
        assert!(observer.station_id.is_none());
        assert!(observer.badge_number.starts_with("OBS-"));

        Ok(())
    }
}
