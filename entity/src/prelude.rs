pub use super::alert::Entity as Alert;
pub use super::alert_delivery::Entity as AlertDelivery;
pub use super::app_setting::Entity as AppSetting;
pub use super::certificate::Entity as Certificate;
pub use super::enrollment::Entity as Enrollment;
pub use super::observer::Entity as Observer;
pub use super::polling_station::Entity as PollingStation;
pub use super::traffic_report::Entity as TrafficReport;
pub use super::training_course::Entity as TrainingCourse;
pub use super::user::Entity as User;
pub use super::weather_report::Entity as WeatherReport;
