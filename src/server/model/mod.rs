//! Domain models and operation parameter types.
//!
//! Domain models sit between the entity layer and the DTO layer: repositories
//! return entities, services convert them here (parsing stored enum strings),
//! and controllers convert domain models to DTOs for responses.

pub mod alert;
pub mod certificate;
pub mod conditions;
pub mod history;
pub mod observer;
pub mod prediction;
pub mod setting;
pub mod station;
pub mod training;
pub mod user;
