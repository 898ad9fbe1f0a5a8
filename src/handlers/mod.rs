mod question;
mod test;

use crate::state::StateTrait;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use sea_orm::ConnectionTrait;
use serde::Serialize;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest("/test", test::routes::<S>())
        .nest("/question", question::routes::<S>())
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(error) = state.db().execute_unprepared("select 1").await {
        warn!("liveness check failed: {}", error);
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Deleted {
    DeletedTestId(i32),
    DeletedQuestionId(i32),
}
