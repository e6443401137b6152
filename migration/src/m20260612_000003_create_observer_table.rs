use sea_orm_migration::{prelude::*, schema::*};

use super::m20260612_000002_create_polling_station_table::PollingStation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Observer::Table)
                    .if_not_exists()
                    .col(pk_auto(Observer::Id))
                    .col(string_uniq(Observer::BadgeNumber))
                    .col(string(Observer::Name))
                    .col(string_uniq(Observer::Email))
                    .col(string_null(Observer::Phone))
                    .col(string(Observer::Parish))
                    .col(string(Observer::Status))
                    .col(boolean(Observer::Verified))
                    .col(integer_null(Observer::StationId))
                    .col(
                        timestamp(Observer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_observer_station_id")
                            .from(Observer::Table, Observer::StationId)
                            .to(PollingStation::Table, PollingStation::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Observer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Observer {
    Table,
    Id,
    BadgeNumber,
    Name,
    Email,
    Phone,
    Parish,
    Status,
    Verified,
    StationId,
    CreatedAt,
}
