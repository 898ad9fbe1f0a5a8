use super::test;
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const FK_TEST_RESULT_TEST_ID: &str = "FK_test_result_test_id";
}

/// A recorded attempt. Rows are never updated once inserted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_result")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub test_id: i32,
    pub username: String,
    pub user_email: String,
    pub grade: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test::Entity",
        from = "Column::TestId",
        to = "super::test::Column::Id",
        on_delete = "Cascade"
    )]
    Test,
}

impl Related<test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Test.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
