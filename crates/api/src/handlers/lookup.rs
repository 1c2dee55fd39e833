//! Handlers for the read-only reference data: municipalities, parishes,
//! art categories and art disciplines. Lists are ordered by id.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use cultores_core::error::CoreError;
use cultores_core::types::DbId;
use cultores_db::repositories::LookupRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/municipalities
pub async fn list_municipalities(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let municipalities = LookupRepo::list_municipalities(&state.pool).await?;
    Ok(Json(DataResponse {
        data: municipalities,
    }))
}

/// GET /api/v1/municipalities/{id}/parishes
pub async fn list_parishes_by_municipality(
    State(state): State<AppState>,
    Path(municipality_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    LookupRepo::find_municipality(&state.pool, municipality_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Municipality",
            id: municipality_id,
        }))?;

    let parishes = LookupRepo::list_parishes_by_municipality(&state.pool, municipality_id).await?;
    Ok(Json(DataResponse { data: parishes }))
}

/// GET /api/v1/parishes
pub async fn list_parishes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let parishes = LookupRepo::list_parishes(&state.pool).await?;
    Ok(Json(DataResponse { data: parishes }))
}

/// GET /api/v1/art-categories
pub async fn list_art_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = LookupRepo::list_art_categories(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/art-categories/{id}/disciplines
pub async fn list_disciplines_by_category(
    State(state): State<AppState>,
    Path(art_category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    LookupRepo::find_art_category(&state.pool, art_category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ArtCategory",
            id: art_category_id,
        }))?;

    let disciplines =
        LookupRepo::list_art_disciplines_by_category(&state.pool, art_category_id).await?;
    Ok(Json(DataResponse { data: disciplines }))
}

/// GET /api/v1/art-disciplines
pub async fn list_art_disciplines(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let disciplines = LookupRepo::list_art_disciplines(&state.pool).await?;
    Ok(Json(DataResponse { data: disciplines }))
}
