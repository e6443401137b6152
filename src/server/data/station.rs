//! Polling station data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct StationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        station_code: String,
        name: String,
        parish: String,
        address: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<entity::polling_station::Model, DbErr> {
        entity::polling_station::ActiveModel {
            station_code: ActiveValue::Set(station_code),
            name: ActiveValue::Set(name),
            parish: ActiveValue::Set(parish),
            address: ActiveValue::Set(address),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::polling_station::Model>, DbErr> {
        entity::prelude::PollingStation::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_code(
        &self,
        station_code: &str,
    ) -> Result<Option<entity::polling_station::Model>, DbErr> {
        entity::prelude::PollingStation::find()
            .filter(entity::polling_station::Column::StationCode.eq(station_code))
            .one(self.db)
            .await
    }

    /// Gets stations with pagination and optional parish/active filters,
    /// ordered by station code.
    pub async fn get_paginated(
        &self,
        parish: Option<&str>,
        active: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::polling_station::Model>, u64), DbErr> {
        let mut query = entity::prelude::PollingStation::find();

        if let Some(parish) = parish {
            query = query.filter(entity::polling_station::Column::Parish.eq(parish));
        }
        if let Some(active) = active {
            query = query.filter(entity::polling_station::Column::Active.eq(active));
        }

        let paginator = query
            .order_by_asc(entity::polling_station::Column::StationCode)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let stations = paginator.fetch_page(page).await?;

        Ok((stations, total))
    }

    /// Gets all stations with monitoring enabled. Used by the conditions
    /// collector and the snapshot endpoint.
    pub async fn get_all_active(&self) -> Result<Vec<entity::polling_station::Model>, DbErr> {
        entity::prelude::PollingStation::find()
            .filter(entity::polling_station::Column::Active.eq(true))
            .order_by_asc(entity::polling_station::Column::StationCode)
            .all(self.db)
            .await
    }

    /// Updates station fields. Fields left as `None` keep their current values.
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        address: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<entity::polling_station::Model, DbErr> {
        let station = entity::prelude::PollingStation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Station {} not found", id)))?;

        let mut active_model: entity::polling_station::ActiveModel = station.into();

        if let Some(name) = name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(address) = address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(latitude) = latitude {
            active_model.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = longitude {
            active_model.longitude = ActiveValue::Set(longitude);
        }

        active_model.update(self.db).await
    }

    /// Enables or disables monitoring for a station.
    pub async fn set_active(&self, id: i32, active: bool) -> Result<(), DbErr> {
        entity::prelude::PollingStation::update_many()
            .filter(entity::polling_station::Column::Id.eq(id))
            .col_expr(
                entity::polling_station::Column::Active,
                sea_orm::sea_query::Expr::value(active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::PollingStation::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
