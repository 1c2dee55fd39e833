//! Cultor search criteria and their compilation into a predicate tree.
//!
//! [`compile`] turns an optional, partially filled [`CultorFilter`] into a
//! [`Predicate`]. The tree does not know about SQL: `cultores-db` renders it
//! into a parameterized `WHERE` clause, and [`Predicate::matches`] evaluates
//! it in memory against any [`FilterTarget`].

use serde::Deserialize;

use crate::naming::non_blank;
use crate::types::DbId;

/// Search criteria for listing cultors. Every field is optional; absent or
/// blank fields add no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CultorFilter {
    /// Free text matched against names, identity number and phone number.
    pub query: Option<String>,
    pub gender: Option<String>,
    pub municipality_id: Option<DbId>,
    pub parish_id: Option<DbId>,
    pub art_category_id: Option<DbId>,
    pub art_discipline_id: Option<DbId>,
    pub has_disability: Option<bool>,
    pub has_illness: Option<bool>,
}

/// Cultor columns a predicate can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FirstName,
    LastName,
    IdNumber,
    PhoneNumber,
    Gender,
    MunicipalityId,
    ParishId,
    ArtCategoryId,
    ArtDisciplineId,
    Disability,
    Illness,
}

impl Column {
    pub fn as_str(self) -> &'static str {
        match self {
            Column::FirstName => "first_name",
            Column::LastName => "last_name",
            Column::IdNumber => "id_number",
            Column::PhoneNumber => "phone_number",
            Column::Gender => "gender",
            Column::MunicipalityId => "municipality_id",
            Column::ParishId => "parish_id",
            Column::ArtCategoryId => "art_category_id",
            Column::ArtDisciplineId => "art_discipline_id",
            Column::Disability => "disability",
            Column::Illness => "illness",
        }
    }
}

/// Storage-independent filter expression.
///
/// `StartsWith` and `Contains` are case-insensitive literal substring tests;
/// their operand is always lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Conjunction. Empty means "match everything".
    All(Vec<Predicate>),
    /// Disjunction. Empty means "match nothing".
    Any(Vec<Predicate>),
    StartsWith(Column, String),
    Contains(Column, String),
    TextEq(Column, String),
    IdEq(Column, DbId),
    /// Non-null and non-empty.
    Filled(Column),
    /// Null or empty.
    Blank(Column),
}

impl Predicate {
    fn starts_with(column: Column, value: impl Into<String>) -> Self {
        Predicate::StartsWith(column, value.into())
    }

    /// Whether the predicate constrains nothing.
    pub fn is_trivial(&self) -> bool {
        matches!(self, Predicate::All(parts) if parts.iter().all(Predicate::is_trivial))
    }

    /// Evaluate against a single record.
    pub fn matches<T: FilterTarget + ?Sized>(&self, target: &T) -> bool {
        match self {
            Predicate::All(parts) => parts.iter().all(|p| p.matches(target)),
            Predicate::Any(parts) => parts.iter().any(|p| p.matches(target)),
            Predicate::StartsWith(column, value) => target
                .text(*column)
                .is_some_and(|t| t.to_lowercase().starts_with(value.as_str())),
            Predicate::Contains(column, value) => target
                .text(*column)
                .is_some_and(|t| t.to_lowercase().contains(value.as_str())),
            Predicate::TextEq(column, value) => target.text(*column) == Some(value.as_str()),
            Predicate::IdEq(column, id) => target.id(*column) == Some(*id),
            Predicate::Filled(column) => target.text(*column).is_some_and(|t| !t.is_empty()),
            Predicate::Blank(column) => target.text(*column).map_or(true, str::is_empty),
        }
    }
}

/// Column access for in-memory predicate evaluation.
pub trait FilterTarget {
    /// Text value of `column`, `None` for SQL NULL or non-text columns.
    fn text(&self, column: Column) -> Option<&str>;
    /// Identifier value of `column`, `None` for non-id columns.
    fn id(&self, column: Column) -> Option<DbId>;
}

/// Compile criteria into one conjunction of the present filters.
pub fn compile(filter: &CultorFilter) -> Predicate {
    let mut parts = Vec::new();

    if let Some(text) = filter.query.as_deref().and_then(text_query) {
        parts.push(text);
    }
    if let Some(gender) = non_blank(filter.gender.as_deref()) {
        parts.push(Predicate::TextEq(Column::Gender, gender.to_uppercase()));
    }

    let ids = [
        (Column::MunicipalityId, filter.municipality_id),
        (Column::ParishId, filter.parish_id),
        (Column::ArtCategoryId, filter.art_category_id),
        (Column::ArtDisciplineId, filter.art_discipline_id),
    ];
    for (column, id) in ids {
        if let Some(id) = id {
            parts.push(Predicate::IdEq(column, id));
        }
    }

    for (column, flag) in [
        (Column::Disability, filter.has_disability),
        (Column::Illness, filter.has_illness),
    ] {
        match flag {
            Some(true) => parts.push(Predicate::Filled(column)),
            Some(false) => parts.push(Predicate::Blank(column)),
            None => {}
        }
    }

    Predicate::All(parts)
}

/// Word-count driven match over names, identity number and phone number.
///
/// Returns `None` for zero or more than four words.
///
/// | words | match |
/// |-------|-------|
/// | `a` | first or last name starts with `a`, or id / phone contains `a` |
/// | `a b` | first or last name starts with `a b`, or first starts with `a` and last with `b` |
/// | `a b c` | (first `a b`, last `c`) or (first `a`, last `b c`) |
/// | `a b c d` | first `a b` and last `c d` |
pub fn text_query(query: &str) -> Option<Predicate> {
    use Column::{FirstName, IdNumber, LastName, PhoneNumber};

    let lowered = query.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let predicate = match words.as_slice() {
        [t] => Predicate::Any(vec![
            Predicate::starts_with(FirstName, *t),
            Predicate::starts_with(LastName, *t),
            Predicate::Contains(IdNumber, t.to_string()),
            Predicate::Contains(PhoneNumber, t.to_string()),
        ]),
        [t1, t2] => {
            let joined = format!("{t1} {t2}");
            Predicate::Any(vec![
                Predicate::starts_with(FirstName, joined.clone()),
                Predicate::starts_with(LastName, joined),
                Predicate::All(vec![
                    Predicate::starts_with(FirstName, *t1),
                    Predicate::starts_with(LastName, *t2),
                ]),
            ])
        }
        [t1, t2, t3] => Predicate::Any(vec![
            Predicate::All(vec![
                Predicate::starts_with(FirstName, format!("{t1} {t2}")),
                Predicate::starts_with(LastName, *t3),
            ]),
            Predicate::All(vec![
                Predicate::starts_with(FirstName, *t1),
                Predicate::starts_with(LastName, format!("{t2} {t3}")),
            ]),
        ]),
        [t1, t2, t3, t4] => Predicate::All(vec![
            Predicate::starts_with(FirstName, format!("{t1} {t2}")),
            Predicate::starts_with(LastName, format!("{t3} {t4}")),
        ]),
        _ => return None,
    };
    Some(predicate)
}
