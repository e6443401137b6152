//! Emergency alert domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::alert::{AlertDeliveryDto, AlertDto, PaginatedAlertsDto},
    server::error::internal::InternalError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub parish: Option<String>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Alert {
    pub fn from_entity(entity: entity::alert::Model) -> Result<Self, InternalError> {
        let severity = AlertSeverity::from_str(&entity.severity).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                field: "alert.severity",
                value: entity.severity.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            severity,
            parish: entity.parish,
            created_by: entity.created_by,
            created_at: entity.created_at,
            resolved_at: entity.resolved_at,
        })
    }

    pub fn into_dto(self) -> AlertDto {
        AlertDto {
            id: self.id,
            title: self.title,
            message: self.message,
            severity: self.severity.as_str().to_string(),
            parish: self.parish,
            created_by: self.created_by,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertDelivery {
    pub channel: String,
    pub success: bool,
    pub delivered_at: DateTime<Utc>,
}

impl AlertDelivery {
    pub fn from_entity(entity: entity::alert_delivery::Model) -> Self {
        Self {
            channel: entity.channel,
            success: entity.success,
            delivered_at: entity.delivered_at,
        }
    }

    pub fn into_dto(self) -> AlertDeliveryDto {
        AlertDeliveryDto {
            channel: self.channel,
            success: self.success,
            delivered_at: self.delivered_at,
        }
    }
}

/// Parameters for raising and broadcasting an alert.
#[derive(Debug, Clone)]
pub struct CreateAlertParam {
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub parish: Option<String>,
    pub created_by: i32,
}

#[derive(Debug, Clone)]
pub struct GetAlertsParam {
    pub unresolved_only: bool,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAlerts {
    pub alerts: Vec<Alert>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAlerts {
    pub fn into_dto(self) -> PaginatedAlertsDto {
        PaginatedAlertsDto {
            alerts: self.alerts.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
