use super::{discard, form::QuestionForm};
use crate::{
    error::Result,
    extractors::{Json, Query},
    repositories::{QuestionRepository, Repository},
    schemas::{QuestionSchema, QuestionUpdate},
    StateTrait,
};
use axum::extract::State;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Params {
    question_id_to_update: i32,
}

pub async fn update_question<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
    form: QuestionForm,
) -> Result<Json<QuestionSchema>> {
    if form.test_id.is_some() {
        debug!("ignoring test_id of question update");
    }

    let attachment = match form.file {
        Some(file) => Some(file.store(state.storage()).await?),
        None => None,
    };

    let request = QuestionUpdate {
        title: form.title,
        description: form.description,
        attachment: attachment.clone(),
    };

    let result = QuestionRepository::new(state.storage())
        .update(state.db(), params.question_id_to_update, request)
        .await;

    if result.is_err() {
        discard(state.storage(), attachment.as_deref()).await;
    }

    Ok(Json(result?))
}
