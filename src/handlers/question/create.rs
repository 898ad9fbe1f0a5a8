use super::{discard, form::QuestionForm};
use crate::{
    error::{self, Result},
    extractors::Json,
    repositories::{QuestionRepository, Repository},
    schemas::{QuestionCreate, QuestionSchema},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};

pub async fn create_question<S: StateTrait>(
    State(state): State<S>,
    form: QuestionForm,
) -> Result<(StatusCode, Json<QuestionSchema>)> {
    let test_id = form.test_id.ok_or(error::MISSING_TEST_ID)?;

    let attachment = match form.file {
        Some(file) => Some(file.store(state.storage()).await?),
        None => None,
    };

    let request = QuestionCreate {
        test_id,
        title: form.title.flatten(),
        description: form.description.flatten(),
        attachment: attachment.clone(),
    };

    let result = QuestionRepository::new(state.storage())
        .create(state.db(), request)
        .await;

    if result.is_err() {
        discard(state.storage(), attachment.as_deref()).await;
    }

    let question = result?;

    info!("created question {} in test {}", question.id, question.test_id);

    Ok((StatusCode::CREATED, Json(question)))
}
