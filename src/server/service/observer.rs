//! Observer service for business logic.
//!
//! Orchestrates observer registration, the pending → active → suspended
//! status lifecycle, identity verification, and polling station assignment.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        certificate::CertificateRepository, observer::ObserverRepository,
        station::StationRepository,
    },
    error::AppError,
    model::observer::{
        GetObserversParam, Observer, ObserverStatus, PaginatedObservers, RegisterObserverParam,
        UpdateObserverParam,
    },
    util::validate,
};

/// How many badge number collisions are tolerated before giving up.
const BADGE_GENERATION_ATTEMPTS: u32 = 5;

pub struct ObserverService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ObserverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new observer from the public sign-up form.
    ///
    /// Validates the contact details and parish, generates a unique badge
    /// number, and creates the observer in `pending` status awaiting identity
    /// verification by an admin.
    ///
    /// # Arguments
    /// - `param` - Registration details from the form
    ///
    /// # Returns
    /// - `Ok(Observer)` - The registered observer
    /// - `Err(AppError::BadRequest)` - Validation failure or duplicate email
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterObserverParam) -> Result<Observer, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if !validate::is_valid_email(&param.email) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        let Some(parish) = validate::canonical_parish(&param.parish) else {
            return Err(AppError::BadRequest(format!(
                "Unknown parish '{}'",
                param.parish
            )));
        };

        let observer_repo = ObserverRepository::new(self.db);

        if observer_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "An observer with this email is already registered".to_string(),
            ));
        }

        let badge_number = self.generate_badge_number(&observer_repo).await?;

        let observer = observer_repo
            .create(
                badge_number,
                param.name.trim().to_string(),
                param.email,
                param.phone,
                parish.to_string(),
            )
            .await?;

        Ok(Observer::from_entity(observer)?)
    }

    pub async fn get_observer(&self, observer_id: i32) -> Result<Option<Observer>, AppError> {
        let observer_repo = ObserverRepository::new(self.db);

        let Some(observer) = observer_repo.find_by_id(observer_id).await? else {
            return Ok(None);
        };

        Ok(Some(Observer::from_entity(observer)?))
    }

    /// Retrieves observers with pagination and optional parish/status filters.
    pub async fn get_observers(
        &self,
        param: GetObserversParam,
    ) -> Result<PaginatedObservers, AppError> {
        let observer_repo = ObserverRepository::new(self.db);

        let (entities, total) = observer_repo
            .get_paginated(
                param.parish.as_deref(),
                param.status.map(|s| s.as_str()),
                param.page,
                param.per_page,
            )
            .await?;

        let observers = entities
            .into_iter()
            .map(Observer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let total_pages = (total as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedObservers {
            observers,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Updates an observer's contact details.
    pub async fn update(&self, param: UpdateObserverParam) -> Result<Observer, AppError> {
        let observer_repo = ObserverRepository::new(self.db);

        if observer_repo.find_by_id(param.observer_id).await?.is_none() {
            return Err(AppError::NotFound("Observer not found".to_string()));
        }

        if let Some(name) = &param.name {
            if name.trim().is_empty() {
                return Err(AppError::BadRequest("Name cannot be empty".to_string()));
            }
        }

        let observer = observer_repo
            .update_contact(
                param.observer_id,
                param.name.map(|n| n.trim().to_string()),
                param.phone.map(Some),
            )
            .await?;

        Ok(Observer::from_entity(observer)?)
    }

    /// Activates a pending or suspended observer.
    ///
    /// Only verified observers can be activated; identity verification is a
    /// precondition for field deployment.
    ///
    /// # Returns
    /// - `Ok(())` - Observer is now active
    /// - `Err(AppError::NotFound)` - No observer with that id
    /// - `Err(AppError::BadRequest)` - Observer has not been verified
    pub async fn activate(&self, observer_id: i32) -> Result<(), AppError> {
        let observer_repo = ObserverRepository::new(self.db);

        let Some(observer) = observer_repo.find_by_id(observer_id).await? else {
            return Err(AppError::NotFound("Observer not found".to_string()));
        };

        if !observer.verified {
            return Err(AppError::BadRequest(
                "Observer must be verified before activation".to_string(),
            ));
        }

        observer_repo
            .set_status(observer_id, ObserverStatus::Active.as_str())
            .await?;

        Ok(())
    }

    pub async fn suspend(&self, observer_id: i32) -> Result<(), AppError> {
        let observer_repo = ObserverRepository::new(self.db);

        if observer_repo.find_by_id(observer_id).await?.is_none() {
            return Err(AppError::NotFound("Observer not found".to_string()));
        }

        observer_repo
            .set_status(observer_id, ObserverStatus::Suspended.as_str())
            .await?;

        Ok(())
    }

    /// Marks an observer's identity as verified.
    pub async fn mark_verified(&self, observer_id: i32) -> Result<(), AppError> {
        let observer_repo = ObserverRepository::new(self.db);

        if observer_repo.find_by_id(observer_id).await?.is_none() {
            return Err(AppError::NotFound("Observer not found".to_string()));
        }

        observer_repo.set_verified(observer_id, true).await?;

        Ok(())
    }

    /// Assigns an observer to a polling station.
    ///
    /// # Returns
    /// - `Ok(())` - Assignment stored
    /// - `Err(AppError::NotFound)` - Observer or station missing
    /// - `Err(AppError::BadRequest)` - Station has monitoring disabled
    pub async fn assign_station(&self, observer_id: i32, station_id: i32) -> Result<(), AppError> {
        let observer_repo = ObserverRepository::new(self.db);
        let station_repo = StationRepository::new(self.db);

        if observer_repo.find_by_id(observer_id).await?.is_none() {
            return Err(AppError::NotFound("Observer not found".to_string()));
        }

        let Some(station) = station_repo.find_by_id(station_id).await? else {
            return Err(AppError::NotFound("Polling station not found".to_string()));
        };

        if !station.active {
            return Err(AppError::BadRequest(
                "Cannot assign observers to a station with monitoring disabled".to_string(),
            ));
        }

        observer_repo
            .set_station(observer_id, Some(station_id))
            .await?;

        Ok(())
    }

    pub async fn unassign_station(&self, observer_id: i32) -> Result<(), AppError> {
        let observer_repo = ObserverRepository::new(self.db);

        if observer_repo.find_by_id(observer_id).await?.is_none() {
            return Err(AppError::NotFound("Observer not found".to_string()));
        }

        observer_repo.set_station(observer_id, None).await?;

        Ok(())
    }

    /// Deletes an observer, revoking their outstanding certificates first.
    pub async fn delete(&self, observer_id: i32) -> Result<(), AppError> {
        let observer_repo = ObserverRepository::new(self.db);
        let certificate_repo = CertificateRepository::new(self.db);

        if observer_repo.find_by_id(observer_id).await?.is_none() {
            return Err(AppError::NotFound("Observer not found".to_string()));
        }

        certificate_repo
            .revoke_all_for_observer(observer_id)
            .await?;
        observer_repo.delete(observer_id).await?;

        Ok(())
    }

    /// Generates a unique badge number of the form `OBS-` + 6 digits.
    async fn generate_badge_number(
        &self,
        observer_repo: &ObserverRepository<'_>,
    ) -> Result<String, AppError> {
        for _ in 0..BADGE_GENERATION_ATTEMPTS {
            let candidate = {
                let mut rng = rand::rng();
                format!("OBS-{:06}", rng.random_range(0..1_000_000))
            };

            if observer_repo
                .find_by_badge_number(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        Err(AppError::InternalError(
            "Exhausted badge number generation attempts".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::{
            observer::{create_observer, ObserverFactory},
            polling_station::PollingStationFactory,
        },
    };

    fn registration(email: &str, parish: &str) -> RegisterObserverParam {
        RegisterObserverParam {
            name: "Test Observer".to_string(),
            email: email.to_string(),
            phone: None,
            parish: parish.to_string(),
        }
    }

    /// Tests a successful registration.
    ///
    /// Expected: pending observer with a generated badge number and
    /// canonicalized parish spelling
    #[tokio::test]
    async fn registers_pending_observer() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ObserverService::new(db);
        let observer = service
            .register(registration("new@caffe.org.jm", "st. andrew"))
            .await
            .unwrap();

        assert_eq!(observer.status, ObserverStatus::Pending);
        assert!(!observer.verified);
        assert!(observer.badge_number.starts_with("OBS-"));
        assert_eq!(observer.parish, "St. Andrew");
    }

    /// Tests registration input validation.
    ///
    /// Expected: BadRequest for bad email and unknown parish
    #[tokio::test]
    async fn rejects_invalid_registration() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ObserverService::new(db);

        let bad_email = service
            .register(registration("not-an-email", "Kingston"))
            .await;
        assert!(matches!(bad_email, Err(AppError::BadRequest(_))));

        let bad_parish = service
            .register(registration("fine@caffe.org.jm", "Atlantis"))
            .await;
        assert!(matches!(bad_parish, Err(AppError::BadRequest(_))));
    }

    /// Tests duplicate email rejection at the service layer.
    ///
    /// Expected: BadRequest on re-registration
    #[tokio::test]
    async fn rejects_duplicate_registration() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ObserverService::new(db);
        service
            .register(registration("dup@caffe.org.jm", "Kingston"))
            .await
            .unwrap();

        let duplicate = service
            .register(registration("dup@caffe.org.jm", "Kingston"))
            .await;

        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));
    }

    /// Tests that activation requires identity verification.
    ///
    /// Expected: BadRequest while unverified, Ok after verification
    #[tokio::test]
    async fn activation_requires_verification() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let observer = create_observer(db).await.unwrap();

        let service = ObserverService::new(db);

        let unverified = service.activate(observer.id).await;
        assert!(matches!(unverified, Err(AppError::BadRequest(_))));

        service.mark_verified(observer.id).await.unwrap();
        service.activate(observer.id).await.unwrap();

        let activated = service.get_observer(observer.id).await.unwrap().unwrap();
        assert_eq!(activated.status, ObserverStatus::Active);
    }

    /// Tests that assignment requires an actively monitored station.
    ///
    /// Expected: BadRequest for a disabled station, Ok for an active one
    #[tokio::test]
    async fn assignment_requires_active_station() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let observer = create_observer(db).await.unwrap();
        let disabled = PollingStationFactory::new(db)
            .active(false)
            .build()
            .await
            .unwrap();
        let active = PollingStationFactory::new(db).build().await.unwrap();

        let service = ObserverService::new(db);

        let rejected = service.assign_station(observer.id, disabled.id).await;
        assert!(matches!(rejected, Err(AppError::BadRequest(_))));

        service.assign_station(observer.id, active.id).await.unwrap();

        let assigned = service.get_observer(observer.id).await.unwrap().unwrap();
        assert_eq!(assigned.station_id, Some(active.id));
    }

    /// Tests that deleting an observer revokes their certificates.
    ///
    /// Expected: observer gone and certificate revoked
    #[tokio::test]
    async fn delete_revokes_certificates() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let observer = ObserverFactory::new(db)
            .status("active")
            .verified(true)
            .build()
            .await
            .unwrap();

        let certificate_repo = CertificateRepository::new(db);
        let now = chrono::Utc::now();
        let certificate = certificate_repo
            .create(
                "CAFFE-2026-DELETE01".to_string(),
                observer.id,
                None,
                now,
                now + chrono::Duration::days(730),
            )
            .await
            .unwrap();

        let service = ObserverService::new(db);
        service.delete(observer.id).await.unwrap();

        assert!(service.get_observer(observer.id).await.unwrap().is_none());

        // Row may be cascade-deleted or survive revoked depending on schema
        let stored = certificate_repo.find_by_id(certificate.id).await.unwrap();
        if let Some(stored) = stored {
            assert!(stored.revoked);
        }
    }
}
