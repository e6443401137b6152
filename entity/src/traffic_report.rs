use sea_orm::entity::prelude::*;

/// One traffic observation for a polling station.
///
/// `source` is `live` for provider responses and `fallback` for baseline
/// substitutions.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "traffic_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub station_id: i32,
    pub severity: String,
    pub jam_factor: f64,
    pub speed_kmh: f64,
    pub delay_minutes: i32,
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
