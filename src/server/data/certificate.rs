//! Certificate data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CertificateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CertificateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        serial: String,
        observer_id: i32,
        course_id: Option<i32>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::certificate::Model, DbErr> {
        entity::certificate::ActiveModel {
            serial: ActiveValue::Set(serial),
            observer_id: ActiveValue::Set(observer_id),
            course_id: ActiveValue::Set(course_id),
            issued_at: ActiveValue::Set(issued_at),
            expires_at: ActiveValue::Set(expires_at),
            revoked: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::certificate::Model>, DbErr> {
        entity::prelude::Certificate::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_serial(
        &self,
        serial: &str,
    ) -> Result<Option<entity::certificate::Model>, DbErr> {
        entity::prelude::Certificate::find()
            .filter(entity::certificate::Column::Serial.eq(serial))
            .one(self.db)
            .await
    }

    pub async fn get_by_observer(
        &self,
        observer_id: i32,
    ) -> Result<Vec<entity::certificate::Model>, DbErr> {
        entity::prelude::Certificate::find()
            .filter(entity::certificate::Column::ObserverId.eq(observer_id))
            .order_by_desc(entity::certificate::Column::IssuedAt)
            .all(self.db)
            .await
    }

    pub async fn set_revoked(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Certificate::update_many()
            .filter(entity::certificate::Column::Id.eq(id))
            .col_expr(
                entity::certificate::Column::Revoked,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Revokes every certificate still held by an observer. Called when an
    /// observer is deleted.
    pub async fn revoke_all_for_observer(&self, observer_id: i32) -> Result<(), DbErr> {
        entity::prelude::Certificate::update_many()
            .filter(entity::certificate::Column::ObserverId.eq(observer_id))
            .col_expr(
                entity::certificate::Column::Revoked,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
