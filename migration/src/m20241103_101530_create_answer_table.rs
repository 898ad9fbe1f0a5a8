use entity::{
    answer::{self, constraints::*},
    question,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(answer::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(answer::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(answer::Column::QuestionId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(answer::Column::Text).text().null())
                    .col(ColumnDef::new(answer::Column::Attachment).string().null())
                    .col(
                        ColumnDef::new(answer::Column::Points)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(answer::Column::IsCorrect).boolean().not_null())
                    .col(
                        ColumnDef::new(answer::Column::IsRequired)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(answer::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ANSWER_QUESTION_ID)
                            .from(answer::Entity, answer::Column::QuestionId)
                            .to(question::Entity, question::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(answer::Entity).to_owned())
            .await
    }
}
