pub use sea_orm_migration::prelude::*;

mod m20260612_000001_create_user_table;
mod m20260612_000002_create_polling_station_table;
mod m20260612_000003_create_observer_table;
mod m20260613_000004_create_training_course_table;
mod m20260613_000005_create_enrollment_table;
mod m20260613_000006_create_certificate_table;
mod m20260614_000007_create_alert_table;
mod m20260614_000008_create_alert_delivery_table;
mod m20260614_000009_create_app_setting_table;
mod m20260615_000010_create_traffic_report_table;
mod m20260615_000011_create_weather_report_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260612_000001_create_user_table::Migration),
            Box::new(m20260612_000002_create_polling_station_table::Migration),
            Box::new(m20260612_000003_create_observer_table::Migration),
            Box::new(m20260613_000004_create_training_course_table::Migration),
            Box::new(m20260613_000005_create_enrollment_table::Migration),
            Box::new(m20260613_000006_create_certificate_table::Migration),
            Box::new(m20260614_000007_create_alert_table::Migration),
            Box::new(m20260614_000008_create_alert_delivery_table::Migration),
            Box::new(m20260614_000009_create_app_setting_table::Migration),
            Box::new(m20260615_000010_create_traffic_report_table::Migration),
            Box::new(m20260615_000011_create_weather_report_table::Migration),
        ]
    }
}
