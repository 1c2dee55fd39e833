//! Repository for the reference tables: `municipalities`, `parishes`,
//! `art_categories` and `art_disciplines`.
//!
//! Rows map onto the plain structs in `cultores_core::lookup`, which carry no
//! sqlx derives, so queries fetch tuples.

use cultores_core::lookup::{ArtCategory, ArtDiscipline, Municipality, Parish};
use cultores_core::types::DbId;
use sqlx::PgPool;

type NamedRow = (DbId, String);
type ChildRow = (DbId, String, DbId);

fn municipality((id, name): NamedRow) -> Municipality {
    Municipality { id, name }
}

fn parish((id, name, municipality_id): ChildRow) -> Parish {
    Parish {
        id,
        name,
        municipality_id,
    }
}

fn art_category((id, name): NamedRow) -> ArtCategory {
    ArtCategory { id, name }
}

fn art_discipline((id, name, art_category_id): ChildRow) -> ArtDiscipline {
    ArtDiscipline {
        id,
        name,
        art_category_id,
    }
}

/// Read access to the reference data. Lists are ordered by id.
pub struct LookupRepo;

impl LookupRepo {
    pub async fn list_municipalities(pool: &PgPool) -> Result<Vec<Municipality>, sqlx::Error> {
        let rows = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM municipalities ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(municipality).collect())
    }

    pub async fn find_municipality(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Municipality>, sqlx::Error> {
        let row = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM municipalities WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(municipality))
    }

    pub async fn list_parishes(pool: &PgPool) -> Result<Vec<Parish>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ChildRow>(
            "SELECT id, name, municipality_id FROM parishes ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(parish).collect())
    }

    /// Parishes belonging to one municipality. Empty if the municipality is
    /// unknown; callers that need a 404 check the parent first.
    pub async fn list_parishes_by_municipality(
        pool: &PgPool,
        municipality_id: DbId,
    ) -> Result<Vec<Parish>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ChildRow>(
            "SELECT id, name, municipality_id FROM parishes
             WHERE municipality_id = $1
             ORDER BY id",
        )
        .bind(municipality_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(parish).collect())
    }

    pub async fn find_parish(pool: &PgPool, id: DbId) -> Result<Option<Parish>, sqlx::Error> {
        let row = sqlx::query_as::<_, ChildRow>(
            "SELECT id, name, municipality_id FROM parishes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(parish))
    }

    pub async fn list_art_categories(pool: &PgPool) -> Result<Vec<ArtCategory>, sqlx::Error> {
        let rows = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM art_categories ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(art_category).collect())
    }

    pub async fn find_art_category(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArtCategory>, sqlx::Error> {
        let row = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM art_categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(art_category))
    }

    pub async fn list_art_disciplines(pool: &PgPool) -> Result<Vec<ArtDiscipline>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ChildRow>(
            "SELECT id, name, art_category_id FROM art_disciplines ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(art_discipline).collect())
    }

    /// Disciplines belonging to one art category, including its sentinel.
    pub async fn list_art_disciplines_by_category(
        pool: &PgPool,
        art_category_id: DbId,
    ) -> Result<Vec<ArtDiscipline>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ChildRow>(
            "SELECT id, name, art_category_id FROM art_disciplines
             WHERE art_category_id = $1
             ORDER BY id",
        )
        .bind(art_category_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(art_discipline).collect())
    }

    pub async fn find_art_discipline(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArtDiscipline>, sqlx::Error> {
        let row = sqlx::query_as::<_, ChildRow>(
            "SELECT id, name, art_category_id FROM art_disciplines WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(art_discipline))
    }
}
