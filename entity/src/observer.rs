use sea_orm::entity::prelude::*;

/// Field observer registered to monitor polling stations.
///
/// `status` holds one of `pending`, `active`, or `suspended`; the domain
/// layer owns the parsing. `station_id` is the observer's current polling
/// station assignment, if any.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "observer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub badge_number: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub parish: String,
    pub status: String,
    pub verified: bool,
    pub station_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::polling_station::Entity",
        from = "Column::StationId",
        to = "super::polling_station::Column::Id"
    )]
    PollingStation,
    #[sea_orm(has_many = "super::certificate::Entity")]
    Certificate,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::polling_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PollingStation.def()
    }
}

impl Related<super::certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificate.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
