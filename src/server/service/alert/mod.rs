//! Emergency alert business logic.
//!
//! Creating an alert immediately broadcasts it to every configured webhook
//! channel; each attempt is recorded as a delivery row. Critical alerts can
//! be re-broadcast on demand while they remain unresolved.

pub mod dispatch;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::alert::AlertRepository,
    error::AppError,
    model::alert::{
        Alert, AlertDelivery, AlertSeverity, CreateAlertParam, GetAlertsParam, PaginatedAlerts,
    },
    util::validate,
};

pub struct AlertService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
}

impl<'a> AlertService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Creates an alert and broadcasts it to all configured channels.
    ///
    /// Per-channel delivery failures are recorded and logged but never abort
    /// the remaining channels or fail the request.
    ///
    /// # Arguments
    /// - `param` - Alert content, severity, optional parish scope, and author
    ///
    /// # Returns
    /// - `Ok((alert, deliveries))` - The stored alert and its delivery records
    /// - `Err(AppError::BadRequest)` - Empty title/message or unknown parish
    pub async fn create_and_broadcast(
        &self,
        param: CreateAlertParam,
    ) -> Result<(Alert, Vec<AlertDelivery>), AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        if param.message.trim().is_empty() {
            return Err(AppError::BadRequest("Message is required".to_string()));
        }

        let parish = match &param.parish {
            Some(parish) => {
                let Some(canonical) = validate::canonical_parish(parish) else {
                    return Err(AppError::BadRequest(format!("Unknown parish '{}'", parish)));
                };
                Some(canonical.to_string())
            }
            None => None,
        };

        let alert_repo = AlertRepository::new(self.db);

        let entity = alert_repo
            .create(
                param.title.trim().to_string(),
                param.message.trim().to_string(),
                param.severity.as_str(),
                parish,
                param.created_by,
            )
            .await?;

        let alert = Alert::from_entity(entity)?;

        tracing::info!("Broadcasting {} alert {}", alert.severity.as_str(), alert.id);
        let deliveries = self.broadcast(&alert).await?;

        Ok((alert, deliveries))
    }

    pub async fn get_alerts(&self, param: GetAlertsParam) -> Result<PaginatedAlerts, AppError> {
        let alert_repo = AlertRepository::new(self.db);

        let (entities, total) = alert_repo
            .get_paginated(param.unresolved_only, param.page, param.per_page)
            .await?;

        let alerts = entities
            .into_iter()
            .map(Alert::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let total_pages = (total as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedAlerts {
            alerts,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    pub async fn get_alert_with_deliveries(
        &self,
        alert_id: i32,
    ) -> Result<Option<(Alert, Vec<AlertDelivery>)>, AppError> {
        let alert_repo = AlertRepository::new(self.db);

        let Some(entity) = alert_repo.find_by_id(alert_id).await? else {
            return Ok(None);
        };

        let alert = Alert::from_entity(entity)?;
        let deliveries = alert_repo
            .get_deliveries(alert_id)
            .await?
            .into_iter()
            .map(AlertDelivery::from_entity)
            .collect();

        Ok(Some((alert, deliveries)))
    }

    pub async fn resolve(&self, alert_id: i32) -> Result<(), AppError> {
        let alert_repo = AlertRepository::new(self.db);

        let Some(alert) = alert_repo.find_by_id(alert_id).await? else {
            return Err(AppError::NotFound("Alert not found".to_string()));
        };

        if alert.resolved_at.is_some() {
            return Err(AppError::BadRequest("Alert is already resolved".to_string()));
        }

        alert_repo.resolve(alert_id).await?;

        Ok(())
    }

    /// Re-broadcasts an unresolved critical alert to all channels.
    ///
    /// # Returns
    /// - `Ok(deliveries)` - Delivery records for the new broadcast round
    /// - `Err(AppError::NotFound)` - No alert with that id
    /// - `Err(AppError::BadRequest)` - Alert is not critical or already resolved
    pub async fn rebroadcast(&self, alert_id: i32) -> Result<Vec<AlertDelivery>, AppError> {
        let alert_repo = AlertRepository::new(self.db);

        let Some(entity) = alert_repo.find_by_id(alert_id).await? else {
            return Err(AppError::NotFound("Alert not found".to_string()));
        };

        let alert = Alert::from_entity(entity)?;

        if alert.severity != AlertSeverity::Critical {
            return Err(AppError::BadRequest(
                "Only critical alerts can be re-broadcast".to_string(),
            ));
        }
        if alert.resolved_at.is_some() {
            return Err(AppError::BadRequest(
                "Cannot re-broadcast a resolved alert".to_string(),
            ));
        }

        self.broadcast(&alert).await
    }
}
