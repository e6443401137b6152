use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Observer, PollingStation};
///
/// let test = TestBuilder::new()
///     .with_table(PollingStation)
///     .with_table(Observer)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for observer management tests.
    ///
    /// Adds, in dependency order: PollingStation, Observer, Certificate.
    pub fn with_observer_tables(self) -> Self {
        self.with_table(PollingStation)
            .with_table(Observer)
            .with_table(Certificate)
    }

    /// Adds the tables required for training tests.
    ///
    /// Adds, in dependency order: PollingStation, Observer, TrainingCourse,
    /// Enrollment, Certificate.
    pub fn with_training_tables(self) -> Self {
        self.with_table(PollingStation)
            .with_table(Observer)
            .with_table(TrainingCourse)
            .with_table(Enrollment)
            .with_table(Certificate)
    }

    /// Adds the tables required for alert tests.
    ///
    /// Adds, in dependency order: User, Alert, AlertDelivery, AppSetting.
    pub fn with_alert_tables(self) -> Self {
        self.with_table(User)
            .with_table(Alert)
            .with_table(AlertDelivery)
            .with_table(AppSetting)
    }

    /// Adds the tables required for condition report tests.
    ///
    /// Adds, in dependency order: PollingStation, TrafficReport, WeatherReport.
    pub fn with_conditions_tables(self) -> Self {
        self.with_table(PollingStation)
            .with_table(TrafficReport)
            .with_table(WeatherReport)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
