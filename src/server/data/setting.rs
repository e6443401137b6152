//! Application settings data repository.
//!
//! Settings are a flat key/value table holding feature flags, provider
//! endpoints and API keys, and alert webhook channels. Keys use dotted
//! namespaces (`traffic.api_key`, `alerts.webhook.1`).

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a setting or replaces its value if the key already exists.
    pub async fn upsert(
        &self,
        key: String,
        value: String,
    ) -> Result<entity::app_setting::Model, DbErr> {
        let entity = entity::prelude::AppSetting::insert(entity::app_setting::ActiveModel {
            key: ActiveValue::Set(key),
            value: ActiveValue::Set(value),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::app_setting::Column::Key)
                .update_columns([
                    entity::app_setting::Column::Value,
                    entity::app_setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity)
    }

    pub async fn get(&self, key: &str) -> Result<Option<entity::app_setting::Model>, DbErr> {
        entity::prelude::AppSetting::find_by_id(key)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::app_setting::Model>, DbErr> {
        entity::prelude::AppSetting::find()
            .order_by_asc(entity::app_setting::Column::Key)
            .all(self.db)
            .await
    }

    /// Gets all settings whose key starts with the given prefix, ordered by
    /// key. Used to enumerate alert webhook channels.
    pub async fn get_prefixed(
        &self,
        prefix: &str,
    ) -> Result<Vec<entity::app_setting::Model>, DbErr> {
        entity::prelude::AppSetting::find()
            .filter(entity::app_setting::Column::Key.starts_with(prefix))
            .order_by_asc(entity::app_setting::Column::Key)
            .all(self.db)
            .await
    }

    /// Deletes a setting. Returns whether a row was removed.
    pub async fn delete(&self, key: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AppSetting::delete_by_id(key)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
