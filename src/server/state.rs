//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::auth::code::LoginCodeService;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `LoginCodeService` uses `Arc` for shared state
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for traffic, weather, AI, and webhook requests.
    ///
    /// Configured with redirects disabled to prevent SSRF through
    /// admin-configured provider endpoints and webhook URLs.
    pub http_client: reqwest::Client,

    /// Service for issuing and validating one-time login codes.
    pub login_code_service: LoginCodeService,

    /// Application base URL for generating login links.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        login_code_service: LoginCodeService,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            login_code_service,
            app_url,
        }
    }
}
