use sea_orm_migration::{prelude::*, schema::*};

use super::m20260614_000007_create_alert_table::Alert;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlertDelivery::Table)
                    .if_not_exists()
                    .col(pk_auto(AlertDelivery::Id))
                    .col(integer(AlertDelivery::AlertId))
                    .col(string(AlertDelivery::Channel))
                    .col(boolean(AlertDelivery::Success))
                    .col(
                        timestamp(AlertDelivery::DeliveredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alert_delivery_alert_id")
                            .from(AlertDelivery::Table, AlertDelivery::AlertId)
                            .to(Alert::Table, Alert::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AlertDelivery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AlertDelivery {
    Table,
    Id,
    AlertId,
    Channel,
    Success,
    DeliveredAt,
}
