//! PostgreSQL-backed collaborators for the cultor pipeline.

use async_trait::async_trait;
use cultores_core::error::CoreError;
use cultores_core::lookup::{ArtCategory, ArtDiscipline, LookupRegistry, Municipality, Parish};
use cultores_core::types::DbId;
use cultores_core::uniqueness::{UniqueField, UniquenessGuard};
use sqlx::PgPool;

use crate::repositories::{CultorRepo, LookupRepo};

/// Resolves reference ids and checks uniqueness against the live database.
///
/// Cheap to construct per request; it only holds a pool handle.
#[derive(Clone)]
pub struct PgValidationContext {
    pool: PgPool,
}

impl PgValidationContext {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn found<T>(row: Option<T>, entity: &'static str, id: DbId) -> Result<T, CoreError> {
    row.ok_or(CoreError::NotFound { entity, id })
}

#[async_trait]
impl LookupRegistry for PgValidationContext {
    async fn find_municipality(&self, id: DbId) -> Result<Municipality, CoreError> {
        let row = LookupRepo::find_municipality(&self.pool, id)
            .await
            .map_err(CoreError::store)?;
        found(row, "Municipality", id)
    }

    async fn find_parish(&self, id: DbId) -> Result<Parish, CoreError> {
        let row = LookupRepo::find_parish(&self.pool, id)
            .await
            .map_err(CoreError::store)?;
        found(row, "Parish", id)
    }

    async fn find_art_category(&self, id: DbId) -> Result<ArtCategory, CoreError> {
        let row = LookupRepo::find_art_category(&self.pool, id)
            .await
            .map_err(CoreError::store)?;
        found(row, "ArtCategory", id)
    }

    async fn find_art_discipline(&self, id: DbId) -> Result<ArtDiscipline, CoreError> {
        let row = LookupRepo::find_art_discipline(&self.pool, id)
            .await
            .map_err(CoreError::store)?;
        found(row, "ArtDiscipline", id)
    }
}

#[async_trait]
impl UniquenessGuard for PgValidationContext {
    async fn exists_by_field(&self, field: UniqueField, value: &str) -> Result<bool, CoreError> {
        CultorRepo::exists_by_field(&self.pool, field, value)
            .await
            .map_err(CoreError::store)
    }

    async fn exists_by_field_excluding(
        &self,
        field: UniqueField,
        value: &str,
        exclude_id: DbId,
    ) -> Result<bool, CoreError> {
        CultorRepo::exists_by_field_excluding(&self.pool, field, value, exclude_id)
            .await
            .map_err(CoreError::store)
    }
}
