//! Certificate domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::certificate::{CertificateDto, CertificateVerificationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    pub id: i32,
    pub serial: String,
    pub observer_id: i32,
    pub course_id: Option<i32>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

impl Certificate {
    pub fn from_entity(entity: entity::certificate::Model) -> Self {
        Self {
            id: entity.id,
            serial: entity.serial,
            observer_id: entity.observer_id,
            course_id: entity.course_id,
            issued_at: entity.issued_at,
            expires_at: entity.expires_at,
            revoked: entity.revoked,
        }
    }

    pub fn into_dto(self) -> CertificateDto {
        CertificateDto {
            id: self.id,
            serial: self.serial,
            observer_id: self.observer_id,
            course_id: self.course_id,
            issued_at: self.issued_at,
            expires_at: self.expires_at,
            revoked: self.revoked,
        }
    }

    /// Checks validity at a point in time: not revoked and not expired.
    pub fn verification_status(&self, now: DateTime<Utc>) -> VerificationStatus {
        if self.revoked {
            VerificationStatus::Revoked
        } else if now >= self.expires_at {
            VerificationStatus::Expired
        } else {
            VerificationStatus::Valid
        }
    }
}

/// Outcome of a public certificate serial lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Valid,
    Revoked,
    Expired,
    NotFound,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Revoked => "revoked",
            Self::Expired => "expired",
            Self::NotFound => "not_found",
        }
    }

    pub fn into_dto(self, serial: String) -> CertificateVerificationDto {
        CertificateVerificationDto {
            serial,
            valid: self == Self::Valid,
            status: self.as_str().to_string(),
        }
    }
}

/// Parameters for manually issuing a certificate.
#[derive(Debug, Clone)]
pub struct IssueCertificateParam {
    pub observer_id: i32,
    pub course_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn certificate(revoked: bool, expires_in_days: i64) -> Certificate {
        let now = Utc::now();
        Certificate {
            id: 1,
            serial: "CAFFE-2026-ABCD1234".to_string(),
            observer_id: 1,
            course_id: None,
            issued_at: now,
            expires_at: now + Duration::days(expires_in_days),
            revoked,
        }
    }

    #[test]
    fn unexpired_unrevoked_certificate_is_valid() {
        let cert = certificate(false, 30);
        assert_eq!(
            cert.verification_status(Utc::now()),
            VerificationStatus::Valid
        );
    }

    #[test]
    fn revoked_wins_over_expiry() {
        let cert = certificate(true, -1);
        assert_eq!(
            cert.verification_status(Utc::now()),
            VerificationStatus::Revoked
        );
    }

    #[test]
    fn past_expiry_is_expired() {
        let cert = certificate(false, -1);
        assert_eq!(
            cert.verification_status(Utc::now()),
            VerificationStatus::Expired
        );
    }
}
