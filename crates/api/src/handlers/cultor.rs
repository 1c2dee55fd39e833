//! Handlers for the `/cultors` resource.
//!
//! Writes go through [`CultorPipeline`] with a [`PgValidationContext`] as
//! both lookup registry and uniqueness guard; only the pipeline's normalized
//! output reaches the repository.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use cultores_core::cultor::{CultorInput, CultorPipeline};
use cultores_core::error::CoreError;
use cultores_core::filter::CultorFilter;
use cultores_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use cultores_core::types::DbId;
use cultores_db::models::cultor::Cultor;
use cultores_db::repositories::CultorRepo;
use cultores_db::PgValidationContext;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// One page of cultors plus the total matching the filter.
#[derive(Debug, Serialize)]
pub struct CultorPage {
    pub items: Vec<Cultor>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Cultor",
        id,
    })
}

/// POST /api/v1/cultors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CultorInput>,
) -> AppResult<impl IntoResponse> {
    let ctx = PgValidationContext::new(state.pool.clone());
    let pipeline = CultorPipeline::new(&ctx, &ctx, Utc::now().date_naive());

    let normalized = pipeline.create(&input).await?;
    let cultor = CultorRepo::create(&state.pool, &normalized).await?;

    tracing::info!(
        cultor_id = cultor.id,
        municipality_id = cultor.municipality_id,
        art_discipline_id = cultor.art_discipline_id,
        "Cultor registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: cultor })))
}

/// GET /api/v1/cultors
///
/// Filter parameters (`query`, `gender`, `municipality_id`, `parish_id`,
/// `art_category_id`, `art_discipline_id`, `has_disability`, `has_illness`)
/// and `limit` / `offset` share the query string.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CultorFilter>,
    Query(page): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(page.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(page.offset);

    let items = CultorRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = CultorRepo::count(&state.pool, &filter).await?;

    tracing::debug!(total, returned = items.len(), limit, offset, "Listed cultors");

    Ok(Json(DataResponse {
        data: CultorPage {
            items,
            total,
            limit,
            offset,
        },
    }))
}

/// GET /api/v1/cultors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cultor = CultorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: cultor }))
}

/// PUT /api/v1/cultors/{id}
///
/// Full replacement. `id_number` and `birth_date` must repeat the stored
/// values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CultorInput>,
) -> AppResult<impl IntoResponse> {
    let existing = CultorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let ctx = PgValidationContext::new(state.pool.clone());
    let pipeline = CultorPipeline::new(&ctx, &ctx, Utc::now().date_naive());

    let normalized = pipeline.update(&existing.identity(), &input).await?;
    let cultor = CultorRepo::update(&state.pool, id, &normalized)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(cultor_id = id, "Cultor updated");

    Ok(Json(DataResponse { data: cultor }))
}

/// DELETE /api/v1/cultors/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CultorRepo::delete(&state.pool, id).await? {
        tracing::info!(cultor_id = id, "Cultor deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
