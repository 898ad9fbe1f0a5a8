use chrono::{DateTime, Utc};
use entity::test_result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResultSchema {
    pub id: i32,
    pub test_id: i32,
    pub username: String,
    pub user_email: String,
    pub grade: f64,
    pub created_at: DateTime<Utc>,
}

impl From<test_result::Model> for TestResultSchema {
    fn from(model: test_result::Model) -> Self {
        Self {
            id: model.id,
            test_id: model.test_id,
            username: model.username,
            user_email: model.user_email,
            grade: model.grade,
            created_at: model.created_at,
        }
    }
}
