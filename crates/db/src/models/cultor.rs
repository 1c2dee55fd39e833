//! Cultor entity model.

use chrono::NaiveDate;
use cultores_core::cultor::CultorIdentity;
use cultores_core::filter::{Column, FilterTarget};
use cultores_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A cultor row from the `cultors` table.
///
/// Rows are written only from a `NormalizedCultor` produced by the
/// validation pipeline.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Cultor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub id_number: String,
    pub birth_date: NaiveDate,
    pub phone_number: String,
    pub email: Option<String>,
    pub instagram_user: Option<String>,
    pub municipality_id: DbId,
    pub parish_id: DbId,
    pub home_address: String,
    pub art_category_id: DbId,
    pub art_discipline_id: DbId,
    pub other_discipline: Option<String>,
    pub years_of_experience: i32,
    pub group_name: Option<String>,
    pub disability: Option<String>,
    pub illness: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cultor {
    /// The fields an update may not change.
    pub fn identity(&self) -> CultorIdentity {
        CultorIdentity {
            id: self.id,
            id_number: self.id_number.clone(),
            birth_date: self.birth_date,
        }
    }
}

impl FilterTarget for Cultor {
    fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::FirstName => Some(&self.first_name),
            Column::LastName => Some(&self.last_name),
            Column::IdNumber => Some(&self.id_number),
            Column::PhoneNumber => Some(&self.phone_number),
            Column::Gender => Some(&self.gender),
            Column::Disability => self.disability.as_deref(),
            Column::Illness => self.illness.as_deref(),
            Column::MunicipalityId
            | Column::ParishId
            | Column::ArtCategoryId
            | Column::ArtDisciplineId => None,
        }
    }

    fn id(&self, column: Column) -> Option<DbId> {
        match column {
            Column::MunicipalityId => Some(self.municipality_id),
            Column::ParishId => Some(self.parish_id),
            Column::ArtCategoryId => Some(self.art_category_id),
            Column::ArtDisciplineId => Some(self.art_discipline_id),
            _ => None,
        }
    }
}
