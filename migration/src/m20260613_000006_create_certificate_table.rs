use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260612_000003_create_observer_table::Observer,
    m20260613_000004_create_training_course_table::TrainingCourse,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(pk_auto(Certificate::Id))
                    .col(string_uniq(Certificate::Serial))
                    .col(integer(Certificate::ObserverId))
                    .col(integer_null(Certificate::CourseId))
                    .col(timestamp(Certificate::IssuedAt))
                    .col(timestamp(Certificate::ExpiresAt))
                    .col(boolean(Certificate::Revoked))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificate_observer_id")
                            .from(Certificate::Table, Certificate::ObserverId)
                            .to(Observer::Table, Observer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificate_course_id")
                            .from(Certificate::Table, Certificate::CourseId)
                            .to(TrainingCourse::Table, TrainingCourse::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certificate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Certificate {
    Table,
    Id,
    Serial,
    ObserverId,
    CourseId,
    IssuedAt,
    ExpiresAt,
    Revoked,
}
