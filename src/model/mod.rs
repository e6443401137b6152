//! Data transfer objects for the REST API surface.

pub mod alert;
pub mod api;
pub mod auth;
pub mod certificate;
pub mod conditions;
pub mod history;
pub mod observer;
pub mod prediction;
pub mod setting;
pub mod station;
pub mod training;
pub mod user;
