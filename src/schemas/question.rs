use super::AnswerSchema;
use chrono::{DateTime, Utc};
use entity::question;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSchema {
    pub id: i32,
    pub test_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub attachment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub answers: Vec<AnswerSchema>,
}

impl QuestionSchema {
    pub fn new(model: question::Model, answers: Vec<AnswerSchema>) -> Self {
        Self {
            id: model.id,
            test_id: model.test_id,
            title: model.title,
            description: model.description,
            attachment: model.attachment,
            created_at: model.created_at,
            updated_at: model.updated_at,
            answers,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestionCreate {
    pub test_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Key of an already uploaded attachment.
    pub attachment: Option<String>,
}

/// Partial update of a question.
///
/// The outer `Option` of `title` and `description` tells whether the field was sent at all,
/// `Some(None)` clears it. `attachment` is the key of a freshly uploaded replacement.
#[derive(Debug, Clone, Default)]
pub struct QuestionUpdate {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub attachment: Option<String>,
}
