//! Admin settings business logic.
//!
//! A flat key/value store with dotted-namespace keys. API keys are masked
//! before leaving the service; provider validation performs one live request
//! per provider and reports whether the configuration works.

pub mod validate;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::setting::SettingRepository,
    error::AppError,
    model::setting::{ProviderValidation, Setting},
    service::alert::dispatch::WEBHOOK_KEY_PREFIX,
};

/// Keys with this suffix hold secrets and are masked in responses.
pub const SECRET_KEY_SUFFIX: &str = ".api_key";

pub struct SettingsService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Gets all settings with secret values masked.
    pub async fn get_all(&self) -> Result<Vec<Setting>, AppError> {
        let setting_repo = SettingRepository::new(self.db);

        let settings = setting_repo
            .get_all()
            .await?
            .into_iter()
            .map(Setting::from_entity)
            .map(mask_if_secret)
            .collect();

        Ok(settings)
    }

    /// Gets one setting with its value masked if it is a secret.
    pub async fn get(&self, key: &str) -> Result<Option<Setting>, AppError> {
        let setting_repo = SettingRepository::new(self.db);

        let setting = setting_repo.get(key).await?;

        Ok(setting.map(Setting::from_entity).map(mask_if_secret))
    }

    /// Creates or replaces a setting.
    ///
    /// # Returns
    /// - `Ok(Setting)` - The stored setting (masked if secret)
    /// - `Err(AppError::BadRequest)` - Malformed key, or webhook value that
    ///   is not an http(s) URL
    pub async fn upsert(&self, key: String, value: String) -> Result<Setting, AppError> {
        let key = key.trim().to_string();

        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(AppError::BadRequest(
                "Setting key must be non-empty and contain no whitespace".to_string(),
            ));
        }

        if key.starts_with(WEBHOOK_KEY_PREFIX) {
            let is_http_url = url::Url::parse(&value)
                .map(|u| matches!(u.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !is_http_url {
                return Err(AppError::BadRequest(
                    "Webhook channels must be http(s) URLs".to_string(),
                ));
            }
        }

        let setting_repo = SettingRepository::new(self.db);
        let stored = setting_repo.upsert(key, value).await?;

        Ok(mask_if_secret(Setting::from_entity(stored)))
    }

    /// Deletes a setting. Returns whether a row was removed.
    pub async fn delete(&self, key: &str) -> Result<bool, AppError> {
        let setting_repo = SettingRepository::new(self.db);
        Ok(setting_repo.delete(key).await?)
    }

    /// Probes one provider's configuration with a single live request.
    ///
    /// # Returns
    /// - `Ok(ProviderValidation)` - Whether the provider answered successfully
    /// - `Err(AppError::BadRequest)` - Unknown provider name
    pub async fn validate_provider(&self, provider: &str) -> Result<ProviderValidation, AppError> {
        let outcome = match provider {
            "traffic" => self.check_traffic_provider().await,
            "weather" => self.check_weather_provider().await,
            "ai" => self.check_ai_provider().await,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Unknown provider '{}'",
                    provider
                )))
            }
        };

        Ok(match outcome {
            Ok(()) => ProviderValidation {
                provider: provider.to_string(),
                valid: true,
                message: "Provider responded successfully".to_string(),
            },
            Err(e) => ProviderValidation {
                provider: provider.to_string(),
                valid: false,
                message: e.to_string(),
            },
        })
    }
}

/// Masks secret values, keeping the last four characters as a hint.
fn mask_if_secret(setting: Setting) -> Setting {
    if !setting.key.ends_with(SECRET_KEY_SUFFIX) {
        return setting;
    }

    let masked = if setting.value.chars().count() <= 4 {
        "••••".to_string()
    } else {
        let tail: String = setting
            .value
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("••••{}", tail)
    };

    Setting {
        value: masked,
        ..setting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn setting(key: &str, value: &str) -> Setting {
        Setting {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn masks_api_keys_keeping_tail() {
        let masked = mask_if_secret(setting("traffic.api_key", "sk-live-abcdef123456"));
        assert_eq!(masked.value, "••••3456");
    }

    #[test]
    fn masks_short_secrets_entirely() {
        let masked = mask_if_secret(setting("ai.api_key", "abcd"));
        assert_eq!(masked.value, "••••");
    }

    #[test]
    fn leaves_non_secret_values_untouched() {
        let setting = mask_if_secret(setting("traffic.endpoint", "https://example.org"));
        assert_eq!(setting.value, "https://example.org");
    }
}
