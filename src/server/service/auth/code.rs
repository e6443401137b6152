//! Login code service for managing one-time verification codes.
//!
//! This module provides the `LoginCodeService` for generating and validating
//! one-time-use login codes. Admins issue codes for users (10 minute TTL); a
//! special bootstrap code (60 second TTL) is generated at startup when no
//! admin user exists so the first coordinator can create an admin account.
//! Codes are stored in-memory and are invalidated after successful use or
//! expiration.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for admin-issued login codes in seconds.
pub const ISSUED_CODE_TTL_SECONDS: u64 = 600;

/// Time-to-live for the startup bootstrap code in seconds.
const BOOTSTRAP_CODE_TTL_SECONDS: u64 = 60;

const CODE_LENGTH: usize = 32;

/// Stored login code with expiration timestamp.
#[derive(Clone)]
struct LoginCode {
    code: String,
    expires_at: Instant,
}

impl LoginCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing one-time login codes.
///
/// Codes are one-time-use: successful validation consumes the code. Expired
/// codes are invalidated when checked. A failed match leaves the stored code
/// intact so a typo does not lock the user out of a still-valid code.
#[derive(Clone)]
pub struct LoginCodeService {
    /// Issued codes keyed by user id.
    issued: Arc<RwLock<HashMap<i32, LoginCode>>>,
    /// The bootstrap admin code, if one is active.
    bootstrap: Arc<RwLock<Option<LoginCode>>>,
}

impl LoginCodeService {
    pub fn new() -> Self {
        Self {
            issued: Arc::new(RwLock::new(HashMap::new())),
            bootstrap: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new login code for a user, replacing any previous one.
    ///
    /// # Arguments
    /// - `user_id` - The user the code is issued for
    ///
    /// # Returns
    /// - `String` - The generated 32-character code
    pub async fn generate_for_user(&self, user_id: i32) -> String {
        self.generate_for_user_with_ttl(user_id, Duration::from_secs(ISSUED_CODE_TTL_SECONDS))
            .await
    }

    async fn generate_for_user_with_ttl(&self, user_id: i32, ttl: Duration) -> String {
        let code_string = Self::generate_random_code();
        self.issued
            .write()
            .await
            .insert(user_id, LoginCode::new(code_string.clone(), ttl));
        code_string
    }

    /// Validates a user's login code, consuming it on success.
    ///
    /// # Returns
    /// - `true` - Code matched and was valid; it has been consumed
    /// - `false` - Code doesn't match, is expired, or none was issued
    pub async fn validate_and_consume(&self, user_id: i32, input_code: &str) -> bool {
        let mut issued = self.issued.write().await;

        if let Some(stored_code) = issued.get(&user_id) {
            if stored_code.is_expired() {
                issued.remove(&user_id);
                return false;
            }

            if stored_code.matches(input_code) {
                issued.remove(&user_id);
                return true;
            }
        }

        false
    }

    /// Generates the bootstrap admin code, replacing any previous one.
    ///
    /// Called at startup when no admin user exists. The code is logged as a
    /// login link and expires after 60 seconds.
    pub async fn generate_bootstrap(&self) -> String {
        let code_string = Self::generate_random_code();
        *self.bootstrap.write().await = Some(LoginCode::new(
            code_string.clone(),
            Duration::from_secs(BOOTSTRAP_CODE_TTL_SECONDS),
        ));
        code_string
    }

    /// Validates the bootstrap code, consuming it on success.
    ///
    /// # Returns
    /// - `true` - Code matched and was valid; it has been consumed
    /// - `false` - Code doesn't match, is expired, or none exists
    pub async fn validate_and_consume_bootstrap(&self, input_code: &str) -> bool {
        let mut bootstrap = self.bootstrap.write().await;

        if let Some(stored_code) = bootstrap.as_ref() {
            if stored_code.is_expired() {
                *bootstrap = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *bootstrap = None;
                return true;
            }
        }

        false
    }

    /// Generates a cryptographically secure random alphanumeric code.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

impl Default for LoginCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests generating a login code for a user.
    ///
    /// Expected: Ok with 32-character code that validates once
    #[tokio::test]
    async fn test_generate_code_for_user() {
        let service = LoginCodeService::new();

        let code = service.generate_for_user(7).await;
        assert_eq!(code.len(), 32);
        assert!(service.validate_and_consume(7, &code).await);
    }

    /// Tests that validating a correct code consumes it.
    ///
    /// Expected: first validation succeeds, second fails
    #[tokio::test]
    async fn test_code_cannot_be_reused() {
        let service = LoginCodeService::new();
        let code = service.generate_for_user(7).await;

        assert!(service.validate_and_consume(7, &code).await);
        assert!(!service.validate_and_consume(7, &code).await);
    }

    /// Tests that an incorrect code fails validation but is preserved.
    ///
    /// Expected: wrong code fails, correct code still works afterwards
    #[tokio::test]
    async fn test_wrong_code_preserves_stored_code() {
        let service = LoginCodeService::new();
        let code = service.generate_for_user(7).await;

        assert!(!service.validate_and_consume(7, "wrong_code").await);
        assert!(service.validate_and_consume(7, &code).await);
    }

    /// Tests that codes are bound to the user they were issued for.
    ///
    /// Expected: validation with another user's id fails
    #[tokio::test]
    async fn test_code_is_user_bound() {
        let service = LoginCodeService::new();
        let code = service.generate_for_user(7).await;

        assert!(!service.validate_and_consume(8, &code).await);
        assert!(service.validate_and_consume(7, &code).await);
    }

    /// Tests validating when no code was issued.
    ///
    /// Expected: validation fails gracefully
    #[tokio::test]
    async fn test_validate_without_code() {
        let service = LoginCodeService::new();
        assert!(!service.validate_and_consume(7, "any_code").await);
    }

    /// Tests that issuing a new code replaces the previous one.
    ///
    /// Expected: old code fails, new code succeeds
    #[tokio::test]
    async fn test_new_code_replaces_old() {
        let service = LoginCodeService::new();
        let old_code = service.generate_for_user(7).await;
        let new_code = service.generate_for_user(7).await;

        assert!(!service.validate_and_consume(7, &old_code).await);
        assert!(service.validate_and_consume(7, &new_code).await);
    }

    /// Tests that expired codes fail validation and are cleaned up.
    ///
    /// Expected: a zero-TTL code is already expired and fails validation
    #[tokio::test]
    async fn test_expired_code_validation_fails() {
        let service = LoginCodeService::new();
        let code = service
            .generate_for_user_with_ttl(7, Duration::ZERO)
            .await;

        assert!(!service.validate_and_consume(7, &code).await);
        // The expired entry was removed, so even a matching retry fails
        assert!(!service.validate_and_consume(7, &code).await);
    }

    /// Tests the bootstrap code lifecycle.
    ///
    /// Expected: bootstrap code validates once, then is consumed
    #[tokio::test]
    async fn test_bootstrap_code_single_use() {
        let service = LoginCodeService::new();
        let code = service.generate_bootstrap().await;

        assert!(service.validate_and_consume_bootstrap(&code).await);
        assert!(!service.validate_and_consume_bootstrap(&code).await);
    }

    /// Tests that a wrong bootstrap code fails without consuming the stored one.
    ///
    /// Expected: wrong code fails, correct code still works
    #[tokio::test]
    async fn test_wrong_bootstrap_code_preserved() {
        let service = LoginCodeService::new();
        let code = service.generate_bootstrap().await;

        assert!(!service.validate_and_consume_bootstrap("nope").await);
        assert!(service.validate_and_consume_bootstrap(&code).await);
    }

    /// Tests validating a bootstrap code when none was generated.
    ///
    /// Expected: validation fails gracefully
    #[tokio::test]
    async fn test_bootstrap_without_code() {
        let service = LoginCodeService::new();
        assert!(!service.validate_and_consume_bootstrap("any").await);
    }
}
