//! Cultor submissions and their validated, normalized form.
//!
//! Records are never built directly from client input: every create or
//! update goes through [`pipeline::CultorPipeline`], which yields a
//! [`NormalizedCultor`] ready to persist.

pub mod pipeline;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

pub use pipeline::CultorPipeline;

/// Accepted values for `gender` after uppercasing.
pub const GENDERS: [&str; 2] = ["F", "M"];

/// Youngest accepted age, in whole years, at the reference date.
pub const MIN_AGE_YEARS: u32 = 18;

/// Oldest accepted age, in whole years, at the reference date.
pub const MAX_AGE_YEARS: u32 = 120;

/// Raw cultor submission, used for both create and update.
///
/// Updates carry the full payload; `id_number` and `birth_date` must repeat
/// the stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CultorInput {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub id_number: String,
    pub birth_date: NaiveDate,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub instagram_user: Option<String>,
    pub municipality_id: DbId,
    pub parish_id: DbId,
    pub home_address: String,
    pub art_category_id: DbId,
    pub art_discipline_id: DbId,
    #[serde(default)]
    pub other_discipline: Option<String>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub years_of_experience: i32,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub disability: Option<String>,
    #[serde(default)]
    pub illness: Option<String>,
}

/// Output of the pipeline: every field trimmed, case-normalized and checked
/// against the reference data and the uniqueness rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedCultor {
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
}

/// The immutable part of a stored cultor, needed to validate an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultorIdentity {
    pub id: DbId,
    pub id_number: String,
    pub birth_date: NaiveDate,
}

/// Whether someone born on `birth_date` is between [`MIN_AGE_YEARS`] and
/// [`MAX_AGE_YEARS`] old (both inclusive) on `reference`.
///
/// Calendar arithmetic clamps to month end, so a Feb 29 reference date
/// counts Feb 28 of a non-leap year as the anniversary.
pub fn is_within_age_window(birth_date: NaiveDate, reference: NaiveDate) -> bool {
    let latest = reference.checked_sub_months(Months::new(MIN_AGE_YEARS * 12));
    let earliest = reference.checked_sub_months(Months::new(MAX_AGE_YEARS * 12));
    match (earliest, latest) {
        (Some(earliest), Some(latest)) => earliest <= birth_date && birth_date <= latest,
        _ => false,
    }
}
