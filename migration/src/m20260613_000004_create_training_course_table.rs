use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingCourse::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingCourse::Id))
                    .col(string(TrainingCourse::Title))
                    .col(text_null(TrainingCourse::Description))
                    .col(integer(TrainingCourse::PassingScore))
                    .col(boolean(TrainingCourse::Active))
                    .col(
                        timestamp(TrainingCourse::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingCourse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingCourse {
    Table,
    Id,
    Title,
    Description,
    PassingScore,
    Active,
    CreatedAt,
}
