use sea_orm::entity::prelude::*;

/// One weather observation for a polling station.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "weather_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub station_id: i32,
    pub condition: String,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub wind_kmh: f64,
    pub source: String,
    pub observed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::polling_station::Entity",
        from = "Column::StationId",
        to = "super::polling_station::Column::Id"
    )]
    PollingStation,
}

impl Related<super::polling_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PollingStation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
