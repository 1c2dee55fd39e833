//! Startup seeding of the reference tables from the built-in dataset in
//! `cultores_core::lookup::seed`.

use cultores_core::lookup::seed;
use sqlx::PgPool;

/// Insert the reference dataset if the `municipalities` table is empty.
///
/// Returns `true` if rows were inserted. Runs in one transaction; existing ids
/// are left untouched so a partially seeded database converges.
pub async fn seed_reference_data(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM municipalities")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Reference data already present, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let municipalities = seed::municipalities();
    for m in &municipalities {
        sqlx::query("INSERT INTO municipalities (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(m.id)
            .bind(&m.name)
            .execute(&mut *tx)
            .await?;
    }

    let parishes = seed::parishes();
    for p in &parishes {
        sqlx::query(
            "INSERT INTO parishes (id, name, municipality_id) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(p.id)
        .bind(&p.name)
        .bind(p.municipality_id)
        .execute(&mut *tx)
        .await?;
    }

    let categories = seed::art_categories();
    for c in &categories {
        sqlx::query("INSERT INTO art_categories (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(c.id)
            .bind(&c.name)
            .execute(&mut *tx)
            .await?;
    }

    let disciplines = seed::art_disciplines();
    for d in &disciplines {
        sqlx::query(
            "INSERT INTO art_disciplines (id, name, art_category_id) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(d.id)
        .bind(&d.name)
        .bind(d.art_category_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        municipalities = municipalities.len(),
        parishes = parishes.len(),
        art_categories = categories.len(),
        art_disciplines = disciplines.len(),
        "Seeded reference data",
    );
    Ok(true)
}
