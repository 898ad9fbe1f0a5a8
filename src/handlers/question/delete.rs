use crate::{
    error::Result,
    extractors::{Json, Query},
    handlers::Deleted,
    repositories::{QuestionRepository, Repository},
    StateTrait,
};
use axum::extract::State;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Params {
    question_id: i32,
}

pub async fn delete_question<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Deleted>> {
    let id = QuestionRepository::new(state.storage())
        .delete(state.db(), params.question_id)
        .await?;

    info!("deleted question {}", id);

    Ok(Json(Deleted::DeletedQuestionId(id)))
}
