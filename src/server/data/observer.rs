//! Observer data repository for database operations.
//!
//! Manages field-observer records: registration inserts, paginated listings
//! with parish/status filters, status transitions, verification, and polling
//! station assignment.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ObserverRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ObserverRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a freshly registered observer.
    ///
    /// New observers always start in `pending` status and unverified;
    /// activation is a separate admin action.
    pub async fn create(
        &self,
        badge_number: String,
        name: String,
        email: String,
        phone: Option<String>,
        parish: String,
    ) -> Result<entity::observer::Model, DbErr> {
        entity::observer::ActiveModel {
            badge_number: ActiveValue::Set(badge_number),
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone),
            parish: ActiveValue::Set(parish),
            status: ActiveValue::Set("pending".to_string()),
            verified: ActiveValue::Set(false),
            station_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::observer::Model>, DbErr> {
        entity::prelude::Observer::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::observer::Model>, DbErr> {
        entity::prelude::Observer::find()
            .filter(entity::observer::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_badge_number(
        &self,
        badge_number: &str,
    ) -> Result<Option<entity::observer::Model>, DbErr> {
        entity::prelude::Observer::find()
            .filter(entity::observer::Column::BadgeNumber.eq(badge_number))
            .one(self.db)
            .await
    }

    /// Gets observers with pagination and optional parish/status filters,
    /// ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `parish` - Restrict to one parish when set
    /// - `status` - Restrict to one status string when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of observers per page
    ///
    /// # Returns
    /// - `Ok((observers, total))` - Observers for the page and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        parish: Option<&str>,
        status: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::observer::Model>, u64), DbErr> {
        let mut query = entity::prelude::Observer::find();

        if let Some(parish) = parish {
            query = query.filter(entity::observer::Column::Parish.eq(parish));
        }
        if let Some(status) = status {
            query = query.filter(entity::observer::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_asc(entity::observer::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let observers = paginator.fetch_page(page).await?;

        Ok((observers, total))
    }

    /// Updates an observer's contact details. Fields left as `None` keep
    /// their current values.
    pub async fn update_contact(
        &self,
        id: i32,
        name: Option<String>,
        phone: Option<Option<String>>,
    ) -> Result<entity::observer::Model, DbErr> {
        let observer = entity::prelude::Observer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Observer {} not found", id)))?;

        let mut active_model: entity::observer::ActiveModel = observer.into();

        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = phone {
            active_model.phone = ActiveValue::Set(phone);
        }

        active_model.update(self.db).await
    }

    pub async fn set_status(&self, id: i32, status: &str) -> Result<(), DbErr> {
        entity::prelude::Observer::update_many()
            .filter(entity::observer::Column::Id.eq(id))
            .col_expr(
                entity::observer::Column::Status,
                sea_orm::sea_query::Expr::value(status),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_verified(&self, id: i32, verified: bool) -> Result<(), DbErr> {
        entity::prelude::Observer::update_many()
            .filter(entity::observer::Column::Id.eq(id))
            .col_expr(
                entity::observer::Column::Verified,
                sea_orm::sea_query::Expr::value(verified),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Assigns the observer to a polling station, or clears the assignment
    /// when `station_id` is `None`.
    pub async fn set_station(&self, id: i32, station_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::Observer::update_many()
            .filter(entity::observer::Column::Id.eq(id))
            .col_expr(
                entity::observer::Column::StationId,
                sea_orm::sea_query::Expr::value(station_id),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Clears the station assignment for every observer posted to a station.
    /// Used before a station is deleted.
    pub async fn unassign_all_from_station(&self, station_id: i32) -> Result<(), DbErr> {
        entity::prelude::Observer::update_many()
            .filter(entity::observer::Column::StationId.eq(station_id))
            .col_expr(
                entity::observer::Column::StationId,
                sea_orm::sea_query::Expr::value(None::<i32>),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Observer::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
