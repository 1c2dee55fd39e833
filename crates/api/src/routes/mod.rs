pub mod cultor;
pub mod health;
pub mod lookup;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cultors                                list, create
/// /cultors/{id}                           get, update, delete
///
/// /municipalities                         list
/// /municipalities/{id}/parishes           parishes of one municipality
/// /parishes                               list
/// /art-categories                         list
/// /art-categories/{id}/disciplines        disciplines of one category
/// /art-disciplines                        list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cultors", cultor::router())
        .merge(lookup::router())
}
