use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollingStation::Table)
                    .if_not_exists()
                    .col(pk_auto(PollingStation::Id))
                    .col(string_uniq(PollingStation::StationCode))
                    .col(string(PollingStation::Name))
                    .col(string(PollingStation::Parish))
                    .col(string(PollingStation::Address))
                    .col(double(PollingStation::Latitude))
                    .col(double(PollingStation::Longitude))
                    .col(boolean(PollingStation::Active))
                    .col(
                        timestamp(PollingStation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollingStation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollingStation {
    Table,
    Id,
    StationCode,
    Name,
    Parish,
    Address,
    Latitude,
    Longitude,
    Active,
    CreatedAt,
}
