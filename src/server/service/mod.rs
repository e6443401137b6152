//! Business logic services.
//!
//! Services orchestrate repositories and external providers on behalf of the
//! controllers. They accept parameter models, enforce the platform's business
//! rules, and return domain models.

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
