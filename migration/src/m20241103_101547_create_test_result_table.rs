use entity::{
    test,
    test_result::{self, constraints::*},
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
                    .table(test_result::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(test_result::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(test_result::Column::TestId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(test_result::Column::Username)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(test_result::Column::UserEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(test_result::Column::Grade).double().not_null())
                    .col(
                        ColumnDef::new(test_result::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEST_RESULT_TEST_ID)
                            .from(test_result::Entity, test_result::Column::TestId)
                            .to(test::Entity, test::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(test_result::Entity).to_owned())
            .await
    }
}
