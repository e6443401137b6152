use sea_orm_migration::{prelude::*, schema::*};

use super::m20260612_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alert::Table)
                    .if_not_exists()
                    .col(pk_auto(Alert::Id))
                    .col(string(Alert::Title))
                    .col(text(Alert::Message))
                    .col(string(Alert::Severity))
                    .col(string_null(Alert::Parish))
                    .col(integer(Alert::CreatedBy))
                    .col(
                        timestamp(Alert::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Alert::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alert_created_by")
                            .from(Alert::Table, Alert::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alert {
    Table,
    Id,
    Title,
    Message,
    Severity,
    Parish,
    CreatedBy,
    CreatedAt,
    ResolvedAt,
}
