use sea_orm::entity::prelude::*;

/// Polling station configured as a monitoring target.
///
/// Only stations with `active` set participate in scheduled traffic and
/// weather collection.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "polling_station")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub station_code: String,
    pub name: String,
    pub parish: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::observer::Entity")]
    Observer,
    #[sea_orm(has_many = "super::traffic_report::Entity")]
    TrafficReport,
    #[sea_orm(has_many = "super::weather_report::Entity")]
    WeatherReport,
}

impl Related<super::observer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observer.def()
    }
}

impl Related<super::traffic_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrafficReport.def()
    }
}

impl Related<super::weather_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeatherReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
