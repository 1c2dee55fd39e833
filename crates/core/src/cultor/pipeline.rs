//! Validation and normalization of cultor submissions.
//!
//! Both entry points share one routine. The order of checks is:
//!
//! 1. Immutability (update only): `id_number` and `birth_date` must match
//!    the stored record. Fail-fast with [`CoreError::ImmutableField`].
//! 2. Reference resolution: municipality, parish, category, discipline.
//!    Fail-fast with [`CoreError::NotFound`].
//! 3. Field and cross-field rules, collected into one
//!    [`CoreError::Validation`] so the caller sees every problem at once.
//! 4. Uniqueness (self-excluded on update). Fail-fast with
//!    [`CoreError::Duplicate`].
//!
//! The pipeline never writes; persisting the result is the caller's job.

use chrono::NaiveDate;
use validator::Validate;

use super::{is_within_age_window, CultorIdentity, CultorInput, NormalizedCultor, GENDERS};
use crate::error::{CoreError, FieldViolation};
use crate::formats;
use crate::lookup::LookupRegistry;
use crate::naming::{lower_or_none, non_blank, title_case};
use crate::uniqueness::{ensure_unique, UniqueField, UniquenessGuard};

pub struct CultorPipeline<'a, R: ?Sized, G: ?Sized> {
    registry: &'a R,
    guard: &'a G,
    reference_date: NaiveDate,
}

impl<'a, R, G> CultorPipeline<'a, R, G>
where
    R: LookupRegistry + ?Sized,
    G: UniquenessGuard + ?Sized,
{
    /// `reference_date` is "today" for the age window check.
    pub fn new(registry: &'a R, guard: &'a G, reference_date: NaiveDate) -> Self {
        Self {
            registry,
            guard,
            reference_date,
        }
    }

    /// Validate a new submission.
    pub async fn create(&self, input: &CultorInput) -> Result<NormalizedCultor, CoreError> {
        self.normalize(input, None).await
    }

    /// Validate a full replacement payload for `existing`.
    pub async fn update(
        &self,
        existing: &CultorIdentity,
        input: &CultorInput,
    ) -> Result<NormalizedCultor, CoreError> {
        self.normalize(input, Some(existing)).await
    }

    async fn normalize(
        &self,
        input: &CultorInput,
        existing: Option<&CultorIdentity>,
    ) -> Result<NormalizedCultor, CoreError> {
        let id_number = input.id_number.trim();

        if let Some(existing) = existing {
            if id_number != existing.id_number {
                return Err(CoreError::ImmutableField { field: "id_number" });
            }
            if input.birth_date != existing.birth_date {
                return Err(CoreError::ImmutableField {
                    field: "birth_date",
                });
            }
        }

        let municipality = self.registry.find_municipality(input.municipality_id).await?;
        let parish = self.registry.find_parish(input.parish_id).await?;
        let category = self.registry.find_art_category(input.art_category_id).await?;
        let discipline = self
            .registry
            .find_art_discipline(input.art_discipline_id)
            .await?;

        let mut violations = schema_violations(input);

        let first_name = personal_name("first_name", &input.first_name, &mut violations);
        let last_name = personal_name("last_name", &input.last_name, &mut violations);

        let gender = input.gender.trim().to_uppercase();
        if !GENDERS.contains(&gender.as_str()) {
            violations.push(FieldViolation::new("gender", "must be F or M"));
        }

        if !formats::is_valid_id_number(id_number) {
            violations.push(FieldViolation::new(
                "id_number",
                "must be V or E, a hyphen and 1 to 8 digits",
            ));
        }

        // Stored birth dates are not re-aged on update.
        if existing.is_none() && !is_within_age_window(input.birth_date, self.reference_date) {
            violations.push(FieldViolation::new(
                "birth_date",
                "age must be between 18 and 120 years",
            ));
        }

        let phone_number = input.phone_number.trim();
        if !formats::is_valid_phone_number(phone_number) {
            violations.push(FieldViolation::new(
                "phone_number",
                "must have the form 04XX-XXXXXXX with a valid carrier code",
            ));
        }

        let email = lower_or_none(input.email.as_deref());
        if email.as_deref().is_some_and(|e| !formats::is_valid_email(e)) {
            violations.push(FieldViolation::new("email", "is not a valid email address"));
        }

        let instagram_user = lower_or_none(input.instagram_user.as_deref());
        if instagram_user
            .as_deref()
            .is_some_and(|u| !formats::is_valid_instagram_user(u))
        {
            violations.push(FieldViolation::new(
                "instagram_user",
                "is not a valid Instagram username",
            ));
        }

        if parish.municipality_id != municipality.id {
            let reason = format!(
                "parish {} does not belong to municipality {}",
                parish.id, municipality.id
            );
            violations.push(FieldViolation::new("parish_id", reason.clone()));
            violations.push(FieldViolation::new("municipality_id", reason));
        }

        let home_address = input.home_address.trim();
        if home_address.is_empty() {
            violations.push(FieldViolation::new("home_address", "is required"));
        } else {
            check_free_text("home_address", home_address, &mut violations);
        }

        if discipline.art_category_id != category.id {
            violations.push(FieldViolation::new(
                "art_discipline_id",
                format!(
                    "discipline {} does not belong to art_category_id {}",
                    discipline.id, category.id
                ),
            ));
        }

        let other_discipline = optional_free_text(
            "other_discipline",
            input.other_discipline.as_deref(),
            &mut violations,
        );
        match (discipline.is_other(), other_discipline.is_some()) {
            (true, false) => violations.push(FieldViolation::new(
                "other_discipline",
                "is required when the discipline is \"Other\"",
            )),
            (false, true) => violations.push(FieldViolation::new(
                "other_discipline",
                "must be empty unless the discipline is \"Other\"",
            )),
            _ => {}
        }

        let group_name = optional_free_text("group_name", input.group_name.as_deref(), &mut violations);
        let disability = optional_free_text("disability", input.disability.as_deref(), &mut violations);
        let illness = optional_free_text("illness", input.illness.as_deref(), &mut violations);

        if !violations.is_empty() {
            return Err(CoreError::Validation(violations));
        }

        let exclude_id = existing.map(|e| e.id);
        if existing.is_none() {
            ensure_unique(self.guard, UniqueField::IdNumber, id_number, None).await?;
        }
        ensure_unique(self.guard, UniqueField::PhoneNumber, phone_number, exclude_id).await?;
        if let Some(email) = email.as_deref() {
            ensure_unique(self.guard, UniqueField::Email, email, exclude_id).await?;
        }
        if let Some(user) = instagram_user.as_deref() {
            ensure_unique(self.guard, UniqueField::InstagramUser, user, exclude_id).await?;
        }

        Ok(NormalizedCultor {
            first_name,
            last_name,
            gender,
            id_number: id_number.to_string(),
            birth_date: input.birth_date,
            phone_number: phone_number.to_string(),
            email,
            instagram_user,
            municipality_id: municipality.id,
            parish_id: parish.id,
            home_address: title_case(home_address),
            art_category_id: category.id,
            art_discipline_id: discipline.id,
            other_discipline: other_discipline.map(title_case),
            years_of_experience: input.years_of_experience,
            group_name: group_name.map(title_case),
            disability: disability.map(str::to_lowercase),
            illness: illness.map(str::to_lowercase),
        })
    }
}

/// Length and range rules declared on [`CultorInput`], sorted by field.
fn schema_violations(input: &CultorInput) -> Vec<FieldViolation> {
    let Err(errors) = input.validate() else {
        return Vec::new();
    };
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let reason = e
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| e.code.to_string());
                FieldViolation::new(field.to_string(), reason)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn personal_name(field: &str, raw: &str, violations: &mut Vec<FieldViolation>) -> String {
    let trimmed = raw.trim();
    if !formats::is_valid_personal_name(trimmed) {
        violations.push(FieldViolation::new(
            field,
            "must contain only letters, separated by single spaces, apostrophes or hyphens",
        ));
    }
    title_case(trimmed)
}

fn check_free_text(field: &str, value: &str, violations: &mut Vec<FieldViolation>) {
    if !formats::is_valid_free_text(value) {
        violations.push(FieldViolation::new(
            field,
            "may contain up to 100 letters, digits, spaces and - ' , . characters",
        ));
    }
}

/// Trimmed, format-checked optional text; blank becomes `None`.
fn optional_free_text<'s>(
    field: &str,
    raw: Option<&'s str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'s str> {
    let value = non_blank(raw)?;
    check_free_text(field, value, violations);
    Some(value)
}
