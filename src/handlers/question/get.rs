use crate::{
    error::Result,
    extractors::{Json, Query},
    repositories::{QuestionRepository, Repository},
    schemas::QuestionSchema,
    StateTrait,
};
use axum::extract::State;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Params {
    question_id: i32,
}

pub async fn get_question<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<QuestionSchema>> {
    let question = QuestionRepository::new(state.storage())
        .get(state.db(), params.question_id)
        .await?;

    Ok(Json(question))
}
