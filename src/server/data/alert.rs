//! Alert data repository for database operations.
//!
//! Handles alert rows and their per-channel delivery records. Delivery rows
//! are written by the broadcast service as each webhook post settles.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct AlertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: String,
        message: String,
        severity: &str,
        parish: Option<String>,
        created_by: i32,
    ) -> Result<entity::alert::Model, DbErr> {
        entity::alert::ActiveModel {
            title: ActiveValue::Set(title),
            message: ActiveValue::Set(message),
            severity: ActiveValue::Set(severity.to_string()),
            parish: ActiveValue::Set(parish),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::alert::Model>, DbErr> {
        entity::prelude::Alert::find_by_id(id).one(self.db).await
    }

    /// Gets alerts newest-first with pagination, optionally only unresolved ones.
    pub async fn get_paginated(
        &self,
        unresolved_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::alert::Model>, u64), DbErr> {
        let mut query = entity::prelude::Alert::find();

        if unresolved_only {
            query = query.filter(entity::alert::Column::ResolvedAt.is_null());
        }

        let paginator = query
            .order_by_desc(entity::alert::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let alerts = paginator.fetch_page(page).await?;

        Ok((alerts, total))
    }

    /// Marks an alert resolved at the current time.
    pub async fn resolve(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Alert::update_many()
            .filter(entity::alert::Column::Id.eq(id))
            .col_expr(
                entity::alert::Column::ResolvedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Records one webhook delivery attempt for an alert.
    pub async fn record_delivery(
        &self,
        alert_id: i32,
        channel: String,
        success: bool,
    ) -> Result<entity::alert_delivery::Model, DbErr> {
        entity::alert_delivery::ActiveModel {
            alert_id: ActiveValue::Set(alert_id),
            channel: ActiveValue::Set(channel),
            success: ActiveValue::Set(success),
            delivered_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_deliveries(
        &self,
        alert_id: i32,
    ) -> Result<Vec<entity::alert_delivery::Model>, DbErr> {
        entity::prelude::AlertDelivery::find()
            .filter(entity::alert_delivery::Column::AlertId.eq(alert_id))
            .order_by_asc(entity::alert_delivery::Column::DeliveredAt)
            .all(self.db)
            .await
    }
}
