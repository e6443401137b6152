pub mod prelude;

pub mod alert;
pub mod alert_delivery;
pub mod app_setting;
pub mod certificate;
pub mod enrollment;
pub mod observer;
pub mod polling_station;
pub mod traffic_report;
pub mod training_course;
pub mod user;
pub mod weather_report;
