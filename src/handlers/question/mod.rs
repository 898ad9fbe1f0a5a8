mod create;
mod delete;
mod form;
mod get;
mod update;

use crate::{
    state::StateTrait,
    storage::{ObjectStore, MAX_ATTACHMENT_SIZE},
};
use axum::{extract::DefaultBodyLimit, routing::get, Router};

/// Routes for question management
///
/// GET    /question?question_id
/// POST   /question              (multipart)
/// PATCH  /question?question_id_to_update (multipart)
/// DELETE /question?question_id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get(get::get_question::<S>)
                .post(create::create_question::<S>)
                .patch(update::update_question::<S>)
                .delete(delete::delete_question::<S>),
        )
        .layer(DefaultBodyLimit::max(MAX_ATTACHMENT_SIZE + 1024 * 1024))
}

/// Removes an uploaded attachment that did not end up referenced by a question.
async fn discard<O: ObjectStore + ?Sized>(storage: &O, key: Option<&str>) {
    let Some(key) = key else {
        return;
    };

    match storage.delete(key).await {
        Ok(()) => debug!("discarded uploaded attachment {}", key),
        Err(error) => warn!("failed to discard uploaded attachment {}: {}", key, error),
    }
}
