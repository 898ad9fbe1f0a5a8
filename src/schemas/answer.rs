use chrono::{DateTime, Utc};
use entity::answer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerSchema {
    pub id: i32,
    pub question_id: i32,
    pub text: Option<String>,
    pub attachment: Option<String>,
    pub points: f64,
    pub is_correct: bool,
    pub is_required: bool,
    pub created_at: DateTime<Utc>,
}

impl From<answer::Model> for AnswerSchema {
    fn from(model: answer::Model) -> Self {
        Self {
            id: model.id,
            question_id: model.question_id,
            text: model.text,
            attachment: model.attachment,
            points: model.points,
            is_correct: model.is_correct,
            is_required: model.is_required,
            created_at: model.created_at,
        }
    }
}
