//! Route definitions for the `/cultors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cultor;
use crate::state::AppState;

/// Routes mounted at `/cultors`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cultor::list).post(cultor::create))
        .route(
            "/{id}",
            get(cultor::get_by_id)
                .put(cultor::update)
                .delete(cultor::delete),
        )
}
