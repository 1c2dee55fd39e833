//! Reference data: municipalities, parishes, art categories and
//! disciplines.
//!
//! The registry is read-mostly and seeded once at startup (see [`seed`]).
//! Validation only needs single-id resolution plus the parent links.

pub mod seed;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Name of the per-category sentinel discipline that requires free-text
/// detail in `other_discipline`.
pub const OTHER_DISCIPLINE_NAME: &str = "Otra...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parish {
    pub id: DbId,
    pub name: String,
    pub municipality_id: DbId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtCategory {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtDiscipline {
    pub id: DbId,
    pub name: String,
    pub art_category_id: DbId,
}

impl ArtDiscipline {
    /// Whether this is its category's "Other" sentinel (exact name match).
    pub fn is_other(&self) -> bool {
        self.name == OTHER_DISCIPLINE_NAME
    }
}

/// Single-id resolution over the reference data.
///
/// Implementations return [`CoreError::NotFound`] for unknown ids and
/// [`CoreError::Store`] when the backing store fails.
#[async_trait]
pub trait LookupRegistry: Send + Sync {
    async fn find_municipality(&self, id: DbId) -> Result<Municipality, CoreError>;
    async fn find_parish(&self, id: DbId) -> Result<Parish, CoreError>;
    async fn find_art_category(&self, id: DbId) -> Result<ArtCategory, CoreError>;
    async fn find_art_discipline(&self, id: DbId) -> Result<ArtDiscipline, CoreError>;
}

/// In-memory registry, keyed by id.
///
/// Used for the built-in seed dataset and as a test double.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    municipalities: BTreeMap<DbId, Municipality>,
    parishes: BTreeMap<DbId, Parish>,
    art_categories: BTreeMap<DbId, ArtCategory>,
    art_disciplines: BTreeMap<DbId, ArtDiscipline>,
}

impl StaticRegistry {
    pub fn new(
        municipalities: Vec<Municipality>,
        parishes: Vec<Parish>,
        art_categories: Vec<ArtCategory>,
        art_disciplines: Vec<ArtDiscipline>,
    ) -> Self {
        Self {
            municipalities: municipalities.into_iter().map(|m| (m.id, m)).collect(),
            parishes: parishes.into_iter().map(|p| (p.id, p)).collect(),
            art_categories: art_categories.into_iter().map(|c| (c.id, c)).collect(),
            art_disciplines: art_disciplines.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// Registry holding the built-in seed dataset.
    pub fn seeded() -> Self {
        Self::new(
            seed::municipalities(),
            seed::parishes(),
            seed::art_categories(),
            seed::art_disciplines(),
        )
    }
}

fn lookup<T: Clone>(map: &BTreeMap<DbId, T>, entity: &'static str, id: DbId) -> Result<T, CoreError> {
    map.get(&id)
        .cloned()
        .ok_or(CoreError::NotFound { entity, id })
}

#[async_trait]
impl LookupRegistry for StaticRegistry {
    async fn find_municipality(&self, id: DbId) -> Result<Municipality, CoreError> {
        lookup(&self.municipalities, "Municipality", id)
    }

    async fn find_parish(&self, id: DbId) -> Result<Parish, CoreError> {
        lookup(&self.parishes, "Parish", id)
    }

    async fn find_art_category(&self, id: DbId) -> Result<ArtCategory, CoreError> {
        lookup(&self.art_categories, "ArtCategory", id)
    }

    async fn find_art_discipline(&self, id: DbId) -> Result<ArtDiscipline, CoreError> {
        lookup(&self.art_disciplines, "ArtDiscipline", id)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn sentinel_is_exact_name_match() {
        let other = ArtDiscipline {
            id: 1,
            name: "Otra...".to_string(),
            art_category_id: 1,
        };
        let lookalike = ArtDiscipline {
            id: 2,
            name: "Otra".to_string(),
            art_category_id: 1,
        };
        assert!(other.is_other());
        assert!(!lookalike.is_other());
    }

    #[tokio::test]
    async fn static_registry_resolves_known_ids() {
        let registry = StaticRegistry::seeded();
        let parish = registry.find_parish(1).await.unwrap();
        let municipality = registry
            .find_municipality(parish.municipality_id)
            .await
            .unwrap();
        assert_eq!(municipality.id, parish.municipality_id);
    }

    #[tokio::test]
    async fn static_registry_reports_unknown_ids() {
        let registry = StaticRegistry::seeded();
        let err = registry.find_art_discipline(99_999).await.unwrap_err();
        assert_matches!(
            err,
            CoreError::NotFound {
                entity: "ArtDiscipline",
                id: 99_999
            }
        );
    }
}
