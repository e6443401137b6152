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
                    .table(TrafficReport::Table)
                    .if_not_exists()
                    .col(pk_auto(TrafficReport::Id))
                    .col(integer(TrafficReport::StationId))
                    .col(string(TrafficReport::Severity))
                    .col(double(TrafficReport::JamFactor))
                    .col(double(TrafficReport::SpeedKmh))
                    .col(integer(TrafficReport::DelayMinutes))
                    .col(string(TrafficReport::Source))
                    .col(timestamp(TrafficReport::ObservedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_traffic_report_station_id")
                            .from(TrafficReport::Table, TrafficReport::StationId)
                            .to(PollingStation::Table, PollingStation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrafficReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrafficReport {
    Table,
    Id,
    StationId,
    Severity,
    JamFactor,
    SpeedKmh,
    DelayMinutes,
    Source,
    ObservedAt,
}
