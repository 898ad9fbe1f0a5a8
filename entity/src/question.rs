use super::{answer, test};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const FK_QUESTION_TEST_ID: &str = "FK_question_test_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub test_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Object storage key of the attached file.
    pub attachment: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::answer::Entity")]
    Answers,
}

impl Related<test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Test.def()
    }
}

impl Related<answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The attachment key, if one is set and non-empty.
    pub fn attachment_key(&self) -> Option<&str> {
        self.attachment.as_deref().filter(|key| !key.is_empty())
    }
}
