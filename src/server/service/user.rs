//! User service for business logic.
//!
//! This module provides the `UserService` for managing console user accounts:
//! creation, paginated listings, and admin privilege management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, GetAllUsersParam, PaginatedUsers, SetAdminParam, User},
    util::validate,
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new console user account.
    ///
    /// # Arguments
    /// - `param` - Name, email, and initial admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Empty name, malformed email, or duplicate email
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if !validate::is_valid_email(&param.email) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "A user with this email already exists".to_string(),
            ));
        }

        let user = user_repo
            .create(param.name.trim().to_string(), param.email, param.admin)
            .await?;

        Ok(User::from_entity(user))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_id(user_id).await?;
        Ok(user.map(User::from_entity))
    }

    /// Retrieves all users with pagination, ordered alphabetically by name.
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = (total as f64 / param.per_page as f64).ceil() as u64;

        Ok(PaginatedUsers {
            users: users.into_iter().map(User::from_entity).collect(),
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Grants or revokes admin privileges.
    ///
    /// # Returns
    /// - `Ok(())` - Admin status updated
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_admin(&self, param: SetAdminParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(param.user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        user_repo.set_admin(param.user_id, param.is_admin).await?;

        Ok(())
    }
}
