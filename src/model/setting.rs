use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct SettingDto {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct UpsertSettingDto {
    pub key: String,
    pub value: String,
}

#[derive(Serialize, Deserialize)]
pub struct ProviderValidationDto {
    pub provider: String,
    pub valid: bool,
    pub message: String,
}
