//! Repository for the `cultors` table.

use cultores_core::cultor::NormalizedCultor;
use cultores_core::filter::{compile, CultorFilter};
use cultores_core::types::DbId;
use cultores_core::uniqueness::UniqueField;
use sqlx::PgPool;

use crate::filter_sql::{render, SqlValue};
use crate::models::cultor::Cultor;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, gender, id_number, birth_date, phone_number, \
     email, instagram_user, municipality_id, parish_id, home_address, art_category_id, \
     art_discipline_id, other_discipline, years_of_experience, group_name, disability, illness, \
     created_at, updated_at";

/// CRUD and search over cultors.
///
/// Writes take a [`NormalizedCultor`]; validation happens before the
/// repository is reached.
pub struct CultorRepo;

impl CultorRepo {
    /// Insert a new cultor, returning the created row.
    pub async fn create(pool: &PgPool, input: &NormalizedCultor) -> Result<Cultor, sqlx::Error> {
        let query = format!(
            "INSERT INTO cultors (first_name, last_name, gender, id_number, birth_date, \
                phone_number, email, instagram_user, municipality_id, parish_id, home_address, \
                art_category_id, art_discipline_id, other_discipline, years_of_experience, \
                group_name, disability, illness)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cultor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.gender)
            .bind(&input.id_number)
            .bind(input.birth_date)
            .bind(&input.phone_number)
            .bind(&input.email)
            .bind(&input.instagram_user)
            .bind(input.municipality_id)
            .bind(input.parish_id)
            .bind(&input.home_address)
            .bind(input.art_category_id)
            .bind(input.art_discipline_id)
            .bind(&input.other_discipline)
            .bind(input.years_of_experience)
            .bind(&input.group_name)
            .bind(&input.disability)
            .bind(&input.illness)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cultor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cultors WHERE id = $1");
        sqlx::query_as::<_, Cultor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable column of a cultor.
    ///
    /// `id_number` and `birth_date` are never written here; the pipeline has
    /// already checked they match. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NormalizedCultor,
    ) -> Result<Option<Cultor>, sqlx::Error> {
        let query = format!(
            "UPDATE cultors SET
                first_name = $2,
                last_name = $3,
                gender = $4,
                phone_number = $5,
                email = $6,
                instagram_user = $7,
                municipality_id = $8,
                parish_id = $9,
                home_address = $10,
                art_category_id = $11,
                art_discipline_id = $12,
                other_discipline = $13,
                years_of_experience = $14,
                group_name = $15,
                disability = $16,
                illness = $17,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cultor>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.gender)
            .bind(&input.phone_number)
            .bind(&input.email)
            .bind(&input.instagram_user)
            .bind(input.municipality_id)
            .bind(input.parish_id)
            .bind(&input.home_address)
            .bind(input.art_category_id)
            .bind(input.art_discipline_id)
            .bind(&input.other_discipline)
            .bind(input.years_of_experience)
            .bind(&input.group_name)
            .bind(&input.disability)
            .bind(&input.illness)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a cultor. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cultors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List cultors matching `filter`, ordered by id ascending.
    pub async fn list(
        pool: &PgPool,
        filter: &CultorFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Cultor>, sqlx::Error> {
        let clause = render(&compile(filter), 1);
        let limit_idx = clause.next_param(1);
        let offset_idx = limit_idx + 1;

        let query = format!(
            "SELECT {COLUMNS} FROM cultors WHERE {} \
             ORDER BY id ASC \
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            clause.sql
        );

        let mut q = sqlx::query_as::<_, Cultor>(&query);
        for value in &clause.binds {
            q = match value {
                SqlValue::Text(text) => q.bind(text),
                SqlValue::Id(id) => q.bind(*id),
            };
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count cultors matching `filter`, ignoring pagination.
    pub async fn count(pool: &PgPool, filter: &CultorFilter) -> Result<i64, sqlx::Error> {
        let clause = render(&compile(filter), 1);
        let query = format!("SELECT COUNT(*)::BIGINT FROM cultors WHERE {}", clause.sql);

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for value in &clause.binds {
            q = match value {
                SqlValue::Text(text) => q.bind(text),
                SqlValue::Id(id) => q.bind(*id),
            };
        }
        q.fetch_one(pool).await
    }

    /// Whether any cultor holds `value` in the unique column `field`.
    pub async fn exists_by_field(
        pool: &PgPool,
        field: UniqueField,
        value: &str,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM cultors WHERE {} = $1)",
            field.as_str()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(value)
            .fetch_one(pool)
            .await
    }

    /// Whether any cultor other than `exclude_id` holds `value` in `field`.
    pub async fn exists_by_field_excluding(
        pool: &PgPool,
        field: UniqueField,
        value: &str,
        exclude_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM cultors WHERE {} = $1 AND id <> $2)",
            field.as_str()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(value)
            .bind(exclude_id)
            .fetch_one(pool)
            .await
    }
}
