pub use sea_orm_migration::prelude::*;

mod m20241103_101500_create_test_table;
mod m20241103_101512_create_question_table;
mod m20241103_101530_create_answer_table;
mod m20241103_101547_create_test_result_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241103_101500_create_test_table::Migration),
            Box::new(m20241103_101512_create_question_table::Migration),
            Box::new(m20241103_101530_create_answer_table::Migration),
            Box::new(m20241103_101547_create_test_result_table::Migration),
        ]
    }
}
