use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct AlertDto {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub parish: Option<String>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize)]
pub struct CreateAlertDto {
    pub title: String,
    pub message: String,
    pub severity: String,
    pub parish: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct AlertDeliveryDto {
    pub channel: String,
    pub success: bool,
    pub delivered_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct AlertWithDeliveriesDto {
    #[serde(flatten)]
    pub alert: AlertDto,
    pub deliveries: Vec<AlertDeliveryDto>,
}

#[derive(Serialize, Deserialize)]
pub struct PaginatedAlertsDto {
    pub alerts: Vec<AlertDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
