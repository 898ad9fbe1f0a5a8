use entity::{
    question::{self, constraints::*},
    test,
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
                    .table(question::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(question::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(question::Column::TestId).integer().not_null())
                    .col(ColumnDef::new(question::Column::Title).string().null())
                    .col(ColumnDef::new(question::Column::Description).text().null())
                    .col(ColumnDef::new(question::Column::Attachment).string().null())
                    .col(
                        ColumnDef::new(question::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(question::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUESTION_TEST_ID)
                            .from(question::Entity, question::Column::TestId)
                            .to(test::Entity, test::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(question::Entity).to_owned())
            .await
    }
}
