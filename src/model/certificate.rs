use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct CertificateDto {
    pub id: i32,
    pub serial: String,
    pub observer_id: i32,
    pub course_id: Option<i32>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

#[derive(Serialize, Deserialize)]
pub struct IssueCertificateDto {
    pub observer_id: i32,
    pub course_id: Option<i32>,
}

/// Public verification result for a certificate serial.
///
/// `status` is one of `valid`, `revoked`, `expired`, or `not_found`.
#[derive(Serialize, Deserialize)]
pub struct CertificateVerificationDto {
    pub serial: String,
    pub valid: bool,
    pub status: String,
}
