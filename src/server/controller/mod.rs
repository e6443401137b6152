//! HTTP request handlers.
//!
//! Controllers resolve the session user through `AuthGuard`, convert DTOs to
//! parameter models, call the matching service, and convert domain models
//! back to DTOs for the response.

pub mod alert;
pub mod auth;
pub mod certificate;
pub mod conditions;
pub mod history;
pub mod observer;
pub mod prediction;
pub mod settings;
pub mod station;
pub mod training;
pub mod user;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}
