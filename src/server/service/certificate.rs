//! Certificate service for business logic.
//!
//! Certificates carry a unique serial of the form `CAFFE-<year>-<8 chars>`,
//! expire two years after issue, and can be revoked. Verification by serial
//! is a public operation used by election-day credential checks.

use chrono::{Datelike, Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{certificate::CertificateRepository, observer::ObserverRepository},
    error::AppError,
    model::certificate::{Certificate, IssueCertificateParam, VerificationStatus},
};

/// Certificate validity period after issue.
const VALIDITY_DAYS: i64 = 730;

const SERIAL_SUFFIX_LENGTH: usize = 8;
const SERIAL_GENERATION_ATTEMPTS: u32 = 5;

pub struct CertificateService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CertificateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a certificate for an observer.
    ///
    /// # Arguments
    /// - `param` - Observer and optional course the certificate attests
    ///
    /// # Returns
    /// - `Ok(Certificate)` - The issued certificate
    /// - `Err(AppError::NotFound)` - No observer with that id
    /// - `Err(AppError::BadRequest)` - Observer is suspended
    pub async fn issue(&self, param: IssueCertificateParam) -> Result<Certificate, AppError> {
        let observer_repo = ObserverRepository::new(self.db);
        let certificate_repo = CertificateRepository::new(self.db);

        let Some(observer) = observer_repo.find_by_id(param.observer_id).await? else {
            return Err(AppError::NotFound("Observer not found".to_string()));
        };

        if observer.status == "suspended" {
            return Err(AppError::BadRequest(
                "Cannot issue certificates to a suspended observer".to_string(),
            ));
        }

        let serial = self.generate_serial(&certificate_repo).await?;
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::days(VALIDITY_DAYS);

        let certificate = certificate_repo
            .create(
                serial,
                param.observer_id,
                param.course_id,
                issued_at,
                expires_at,
            )
            .await?;

        Ok(Certificate::from_entity(certificate))
    }

    pub async fn get_for_observer(&self, observer_id: i32) -> Result<Vec<Certificate>, AppError> {
        let certificate_repo = CertificateRepository::new(self.db);

        let certificates = certificate_repo.get_by_observer(observer_id).await?;

        Ok(certificates
            .into_iter()
            .map(Certificate::from_entity)
            .collect())
    }

    /// Verifies a certificate serial. Public endpoint, no authentication.
    ///
    /// # Returns
    /// The verification status: `Valid`, `Revoked`, `Expired`, or `NotFound`.
    pub async fn verify(&self, serial: &str) -> Result<VerificationStatus, AppError> {
        let certificate_repo = CertificateRepository::new(self.db);

        let Some(certificate) = certificate_repo.find_by_serial(serial).await? else {
            return Ok(VerificationStatus::NotFound);
        };

        Ok(Certificate::from_entity(certificate).verification_status(Utc::now()))
    }

    pub async fn revoke(&self, certificate_id: i32) -> Result<(), AppError> {
        let certificate_repo = CertificateRepository::new(self.db);

        if certificate_repo.find_by_id(certificate_id).await?.is_none() {
            return Err(AppError::NotFound("Certificate not found".to_string()));
        }

        certificate_repo.set_revoked(certificate_id).await?;

        Ok(())
    }

    /// Generates a unique serial of the form `CAFFE-<year>-<8 uppercase alphanumerics>`.
    async fn generate_serial(
        &self,
        certificate_repo: &CertificateRepository<'_>,
    ) -> Result<String, AppError> {
        for _ in 0..SERIAL_GENERATION_ATTEMPTS {
            let candidate = Self::random_serial(Utc::now().year());

            if certificate_repo.find_by_serial(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(AppError::InternalError(
            "Exhausted certificate serial generation attempts".to_string(),
        ))
    }

    fn random_serial(year: i32) -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

        let mut rng = rand::rng();
        let suffix: String = (0..SERIAL_SUFFIX_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();

        format!("CAFFE-{}-{}", year, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{
        builder::TestBuilder,
        factory::observer::{create_active_observer, ObserverFactory},
    };

    /// Tests issuing and verifying a certificate.
    ///
    /// Expected: fresh certificate verifies as valid
    #[tokio::test]
    async fn issued_certificate_verifies_valid() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let observer = create_active_observer(db).await.unwrap();

        let service = CertificateService::new(db);
        let certificate = service
            .issue(IssueCertificateParam {
                observer_id: observer.id,
                course_id: None,
            })
            .await
            .unwrap();

        let status = service.verify(&certificate.serial).await.unwrap();
        assert_eq!(status, VerificationStatus::Valid);
    }

    /// Tests verification of an unknown serial.
    ///
    /// Expected: NotFound status
    #[tokio::test]
    async fn unknown_serial_is_not_found() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = CertificateService::new(db);
        let status = service.verify("CAFFE-2026-MISSING1").await.unwrap();

        assert_eq!(status, VerificationStatus::NotFound);
    }

    /// Tests that revocation is reflected in verification.
    ///
    /// Expected: Revoked status after revoke
    #[tokio::test]
    async fn revoked_certificate_fails_verification() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let observer = create_active_observer(db).await.unwrap();

        let service = CertificateService::new(db);
        let certificate = service
            .issue(IssueCertificateParam {
                observer_id: observer.id,
                course_id: None,
            })
            .await
            .unwrap();

        service.revoke(certificate.id).await.unwrap();

        let status = service.verify(&certificate.serial).await.unwrap();
        assert_eq!(status, VerificationStatus::Revoked);
    }

    /// Tests that suspended observers cannot receive certificates.
    ///
    /// Expected: BadRequest
    #[tokio::test]
    async fn suspended_observer_cannot_be_issued() {
        let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let observer = ObserverFactory::new(db)
            .status("suspended")
            .build()
            .await
            .unwrap();

        let service = CertificateService::new(db);
        let result = service
            .issue(IssueCertificateParam {
                observer_id: observer.id,
                course_id: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn serial_has_expected_shape() {
        let serial = CertificateService::random_serial(2026);

        let parts: Vec<&str> = serial.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "CAFFE");
        assert_eq!(parts[1], "2026");
        assert_eq!(parts[2].len(), SERIAL_SUFFIX_LENGTH);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
