use sea_orm::entity::prelude::*;

/// Emergency alert raised from the admin console.
///
/// `severity` holds one of `info`, `warning`, or `critical`. A null `parish`
/// means island-wide.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alert")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub parish: Option<String>,
    pub created_by: i32,
    pub created_at: DateTimeUtc,
    pub resolved_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::alert_delivery::Entity")]
    AlertDelivery,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::alert_delivery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlertDelivery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
