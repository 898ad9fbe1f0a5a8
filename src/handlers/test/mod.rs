
use crate::state::StateTrait;
use axum::{routing::get, Router};

/// Routes for test management
///
/// GET    /test?test_id&skip&limit
/// POST   /test
/// PATCH  /test?test_id_to_update
/// DELETE /test?test_id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new().route(
        "/",
        get(list::list_tests::<S>)
            .post(create::create_test::<S>)
            .patch(update::update_test::<S>)
            .delete(delete::delete_test::<S>),
    )
}
