//! Observer domain models and parameters.
//!
//! Observers move through a small status lifecycle: they register as
//! `pending`, an admin verifies their identity and activates them, and
//! misconduct or expiry suspends them. The status string stored in the
//! database is parsed into `ObserverStatus` at this boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::observer::{ObserverDto, PaginatedObserversDto},
    server::error::internal::InternalError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverStatus {
    Pending,
    Active,
    Suspended,
}

impl ObserverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }

    /// Parses a status string. Returns `None` for unknown values; callers
    /// decide whether that is a bad request (client input) or an internal
    /// error (stored data).
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "suspended" => Some(Self::Suspended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    pub id: i32,
    pub badge_number: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub parish: String,
    pub status: ObserverStatus,
    pub verified: bool,
    pub station_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Observer {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Observer)` - The converted observer
    /// - `Err(InternalError::UnknownEnumValue)` - The stored status string is
    ///   outside the known set
    pub fn from_entity(entity: entity::observer::Model) -> Result<Self, InternalError> {
        let status = ObserverStatus::from_str(&entity.status).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                field: "observer.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            badge_number: entity.badge_number,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            parish: entity.parish,
            status,
            verified: entity.verified,
            station_id: entity.station_id,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ObserverDto {
        ObserverDto {
            id: self.id,
            badge_number: self.badge_number,
            name: self.name,
            email: self.email,
            phone: self.phone,
            parish: self.parish,
            status: self.status.as_str().to_string(),
            verified: self.verified,
            station_id: self.station_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a new observer from the public form.
#[derive(Debug, Clone)]
pub struct RegisterObserverParam {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub parish: String,
}

/// Parameters for updating an observer's contact details.
#[derive(Debug, Clone)]
pub struct UpdateObserverParam {
    pub observer_id: i32,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Parameters for filtered, paginated observer listings.
#[derive(Debug, Clone)]
pub struct GetObserversParam {
    pub parish: Option<String>,
    pub status: Option<ObserverStatus>,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedObservers {
    pub observers: Vec<Observer>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedObservers {
    pub fn into_dto(self) -> PaginatedObserversDto {
        PaginatedObserversDto {
            observers: self.observers.into_iter().map(|o| o.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
