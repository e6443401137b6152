//! Settings domain model.

use chrono::{DateTime, Utc};

use crate::model::setting::SettingDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl Setting {
    pub fn from_entity(entity: entity::app_setting::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SettingDto {
        SettingDto {
            key: self.key,
            value: self.value,
            updated_at: self.updated_at,
        }
    }
}

/// Result of probing one external provider's configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderValidation {
    pub provider: String,
    pub valid: bool,
    pub message: String,
}

impl ProviderValidation {
    pub fn into_dto(self) -> crate::model::setting::ProviderValidationDto {
        crate::model::setting::ProviderValidationDto {
            provider: self.provider,
            valid: self.valid,
            message: self.message,
        }
    }
}
