use sea_orm::{DbErr, SqlErr};

pub trait DatabaseError {
    fn foreign_key_violation(&self) -> bool;
}

impl DatabaseError for DbErr {
    fn foreign_key_violation(&self) -> bool {
        matches!(
            self.sql_err(),
            Some(SqlErr::ForeignKeyConstraintViolation(_))
        )
    }
}
