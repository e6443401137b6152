//! Entity factories for tests.
//!
//! Factories insert entities with sensible defaults so tests only spell out
//! the fields they care about. Each factory follows the same builder shape:
//! `XFactory::new(&db).field(value).build().await`.

pub mod helpers;
pub mod observer;
pub mod polling_station;
pub mod training_course;
pub mod user;
