//! Route definitions for the reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookup;
use crate::state::AppState;

/// Read-only lookup routes, merged at the `/api/v1` root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/municipalities", get(lookup::list_municipalities))
        .route(
            "/municipalities/{id}/parishes",
            get(lookup::list_parishes_by_municipality),
        )
        .route("/parishes", get(lookup::list_parishes))
        .route("/art-categories", get(lookup::list_art_categories))
        .route(
            "/art-categories/{id}/disciplines",
            get(lookup::list_disciplines_by_category),
        )
        .route("/art-disciplines", get(lookup::list_art_disciplines))
}
