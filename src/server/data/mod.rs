//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories work in terms of SeaORM entity models; conversion
//! to domain models happens in the service layer. All database queries, inserts, updates,
//! and deletes are performed through these repositories.

pub mod alert;
pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod observer;
pub mod setting;
pub mod station;
pub mod traffic;
pub mod user;
pub mod weather;

#[cfg(test)]
mod test;
