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
                    .table(WeatherReport::Table)
                    .if_not_exists()
                    .col(pk_auto(WeatherReport::Id))
                    .col(integer(WeatherReport::StationId))
                    .col(string(WeatherReport::Condition))
                    .col(double(WeatherReport::TemperatureC))
                    .col(double(WeatherReport::RainfallMm))
                    .col(double(WeatherReport::WindKmh))
                    .col(string(WeatherReport::Source))
                    .col(timestamp(WeatherReport::ObservedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weather_report_station_id")
                            .from(WeatherReport::Table, WeatherReport::StationId)
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
            .drop_table(Table::drop().table(WeatherReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WeatherReport {
    Table,
    Id,
    StationId,
    Condition,
    TemperatureC,
    RainfallMm,
    WindKmh,
    Source,
    ObservedAt,
}
