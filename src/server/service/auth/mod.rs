//! Login-code authentication.
//!
//! Users log in by redeeming a one-time code against their email address.
//! Codes are issued by admins through the user management endpoints; on a
//! fresh deployment the startup check logs a bootstrap code that creates the
//! first admin account when redeemed.

pub mod code;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

use code::LoginCodeService;

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    /// Display name used only when the bootstrap code creates the first admin.
    pub name: Option<String>,
    pub code: String,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    codes: &'a LoginCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, codes: &'a LoginCodeService) -> Self {
        Self { db, codes }
    }

    /// Redeems a login code for a user account.
    ///
    /// The bootstrap path is checked first: a valid bootstrap code creates
    /// (or promotes) the account for the given email as an admin. Otherwise
    /// the code must match one issued for the account with that email.
    /// Failures are collapsed into `InvalidLoginCode` so responses do not
    /// reveal whether an email is registered.
    ///
    /// # Arguments
    /// - `param` - Login email, optional display name, and the code
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user; the caller establishes the session
    /// - `Err(AppError::AuthErr(InvalidLoginCode))` - Code invalid, expired, or consumed
    /// - `Err(AppError::DbErr)` - Database error during lookup or creation
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if self.codes.validate_and_consume_bootstrap(&param.code).await {
            let user = match user_repo.find_by_email(&param.email).await? {
                Some(user) if user.admin => user,
                Some(user) => {
                    user_repo.set_admin(user.id, true).await?;
                    entity::user::Model {
                        admin: true,
                        ..user
                    }
                }
                None => {
                    let name = param
                        .name
                        .unwrap_or_else(|| default_name_from_email(&param.email));
                    user_repo.create(name, param.email, true).await?
                }
            };

            user_repo.update_last_login(user.id).await?;
            tracing::info!("Bootstrap admin login for user {}", user.id);

            return Ok(User::from_entity(user));
        }

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidLoginCode.into());
        };

        if !self.codes.validate_and_consume(user.id, &param.code).await {
            return Err(AuthError::InvalidLoginCode.into());
        }

        user_repo.update_last_login(user.id).await?;

        Ok(User::from_entity(user))
    }

    /// Issues a new login code for an existing user.
    ///
    /// # Returns
    /// - `Ok((code, ttl_seconds))` - The code and how long it stays valid
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn issue_code(&self, user_id: i32) -> Result<(String, u64), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let code = self.codes.generate_for_user(user_id).await;

        Ok((code, code::ISSUED_CODE_TTL_SECONDS))
    }
}

fn default_name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or("Coordinator")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::user::create_user};

    fn login(email: &str, code: &str) -> LoginParam {
        LoginParam {
            email: email.to_string(),
            name: None,
            code: code.to_string(),
        }
    }

    #[test]
    fn derives_name_from_email_local_part() {
        assert_eq!(default_name_from_email("ann.marie@caffe.org.jm"), "ann.marie");
        assert_eq!(default_name_from_email("@caffe.org.jm"), "Coordinator");
    }

    /// Tests redeeming the bootstrap code on a fresh deployment.
    ///
    /// Expected: a new admin account created for the email
    #[tokio::test]
    async fn bootstrap_code_creates_first_admin() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let codes = LoginCodeService::new();
        let bootstrap = codes.generate_bootstrap().await;

        let service = AuthService::new(db, &codes);
        let user = service
            .login(login("founder@caffe.org.jm", &bootstrap))
            .await
            .unwrap();

        assert!(user.admin);
        assert_eq!(user.email, "founder@caffe.org.jm");
        assert_eq!(user.name, "founder");
    }

    /// Tests the issued-code login flow.
    ///
    /// Expected: login succeeds once, then the code is consumed
    #[tokio::test]
    async fn issued_code_logs_in_once() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = create_user(db).await.unwrap();

        let codes = LoginCodeService::new();
        let service = AuthService::new(db, &codes);

        let (code, ttl) = service.issue_code(existing.id).await.unwrap();
        assert_eq!(ttl, code::ISSUED_CODE_TTL_SECONDS);

        let user = service.login(login(&existing.email, &code)).await.unwrap();
        assert_eq!(user.id, existing.id);

        let replay = service.login(login(&existing.email, &code)).await;
        assert!(matches!(
            replay,
            Err(AppError::AuthErr(AuthError::InvalidLoginCode))
        ));
    }

    /// Tests that a wrong code or unknown email fails identically.
    ///
    /// Expected: InvalidLoginCode for both
    #[tokio::test]
    async fn wrong_code_and_unknown_email_fail_alike() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = create_user(db).await.unwrap();

        let codes = LoginCodeService::new();
        let service = AuthService::new(db, &codes);
        service.issue_code(existing.id).await.unwrap();

        let wrong_code = service.login(login(&existing.email, "wrong")).await;
        assert!(matches!(
            wrong_code,
            Err(AppError::AuthErr(AuthError::InvalidLoginCode))
        ));

        let unknown_email = service.login(login("ghost@caffe.org.jm", "whatever")).await;
        assert!(matches!(
            unknown_email,
            Err(AppError::AuthErr(AuthError::InvalidLoginCode))
        ));
    }

    /// Tests issuing a code for a missing user.
    ///
    /// Expected: NotFound
    #[tokio::test]
    async fn issue_code_requires_existing_user() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let codes = LoginCodeService::new();
        let service = AuthService::new(db, &codes);

        let result = service.issue_code(404).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
