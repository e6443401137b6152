//! Alert webhook dispatch.
//!
//! Broadcast channels are webhook URLs stored in settings under the
//! `alerts.webhook.` prefix. Each configured channel receives one POST with
//! the alert payload; the outcome of every attempt is recorded so the
//! console can show delivery state per channel.

use serde_json::json;

use crate::server::{
    data::{alert::AlertRepository, setting::SettingRepository},
    error::AppError,
    model::alert::{Alert, AlertDelivery},
};

use super::AlertService;

/// Settings key prefix enumerating webhook channels.
pub const WEBHOOK_KEY_PREFIX: &str = "alerts.webhook.";

impl<'a> AlertService<'a> {
    /// Posts the alert to every configured webhook channel.
    ///
    /// Channels whose stored value is not a valid http(s) URL are skipped
    /// with a log entry. A failed post is recorded as an unsuccessful
    /// delivery and the loop continues with the remaining channels.
    ///
    /// # Returns
    /// - `Ok(deliveries)` - One delivery record per attempted channel
    /// - `Err(AppError::DbErr)` - Database error reading channels or recording deliveries
    pub(crate) async fn broadcast(&self, alert: &Alert) -> Result<Vec<AlertDelivery>, AppError> {
        let setting_repo = SettingRepository::new(self.db);
        let alert_repo = AlertRepository::new(self.db);

        let channels = setting_repo.get_prefixed(WEBHOOK_KEY_PREFIX).await?;

        if channels.is_empty() {
            tracing::warn!("No alert webhook channels configured; alert {} stored only", alert.id);
            return Ok(Vec::new());
        }

        let payload = build_alert_payload(alert);
        let mut deliveries = Vec::with_capacity(channels.len());

        for channel in channels {
            let channel_url = channel.value;

            if !is_valid_webhook_url(&channel_url) {
                tracing::error!(
                    "Skipping alert channel {}: '{}' is not a valid http(s) URL",
                    channel.key,
                    channel_url
                );
                continue;
            }

            let success = match self.http_client.post(&channel_url).json(&payload).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::info!("Delivered alert {} to {}", alert.id, channel_url);
                    true
                }
                Ok(response) => {
                    tracing::error!(
                        "Alert {} delivery to {} returned status {}",
                        alert.id,
                        channel_url,
                        response.status()
                    );
                    false
                }
                Err(e) => {
                    tracing::error!("Failed to deliver alert {} to {}: {}", alert.id, channel_url, e);
                    false
                }
            };

            let record = alert_repo
                .record_delivery(alert.id, channel_url, success)
                .await?;
            deliveries.push(AlertDelivery::from_entity(record));
        }

        Ok(deliveries)
    }
}

/// Builds the JSON payload posted to webhook channels.
pub(crate) fn build_alert_payload(alert: &Alert) -> serde_json::Value {
    json!({
        "alert_id": alert.id,
        "title": alert.title,
        "message": alert.message,
        "severity": alert.severity.as_str(),
        "parish": alert.parish,
        "issued_at": alert.created_at.to_rfc3339(),
    })
}

fn is_valid_webhook_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::alert::AlertSeverity;
    use chrono::Utc;

    fn sample_alert() -> Alert {
        Alert {
            id: 42,
            title: "Road blocked".to_string(),
            message: "Flooding on Spanish Town Road".to_string(),
            severity: AlertSeverity::Critical,
            parish: Some("St. Catherine".to_string()),
            created_by: 1,
            created_at: Utc::now(),
            resolved_at: None,
        }
    }

    #[test]
    fn payload_carries_alert_fields() {
        let payload = build_alert_payload(&sample_alert());

        assert_eq!(payload["alert_id"], 42);
        assert_eq!(payload["severity"], "critical");
        assert_eq!(payload["parish"], "St. Catherine");
        assert_eq!(payload["title"], "Road blocked");
    }

    #[test]
    fn island_wide_alert_has_null_parish() {
        let mut alert = sample_alert();
        alert.parish = None;

        let payload = build_alert_payload(&alert);
        assert!(payload["parish"].is_null());
    }

    #[test]
    fn rejects_non_http_webhook_urls() {
        assert!(is_valid_webhook_url("https://hooks.example.org/caffe"));
        assert!(is_valid_webhook_url("http://10.0.0.5:8080/notify"));
        assert!(!is_valid_webhook_url("ftp://hooks.example.org/caffe"));
        assert!(!is_valid_webhook_url("not a url"));
        assert!(!is_valid_webhook_url(""));
    }
}
