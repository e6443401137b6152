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
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(integer(Enrollment::ObserverId))
                    .col(integer(Enrollment::CourseId))
                    .col(integer_null(Enrollment::Score))
                    .col(string(Enrollment::Status))
                    .col(
                        timestamp(Enrollment::EnrolledAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Enrollment::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_observer_id")
                            .from(Enrollment::Table, Enrollment::ObserverId)
                            .to(Observer::Table, Observer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course_id")
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(TrainingCourse::Table, TrainingCourse::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    ObserverId,
    CourseId,
    Score,
    Status,
    EnrolledAt,
    CompletedAt,
}
