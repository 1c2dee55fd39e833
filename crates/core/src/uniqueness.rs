//! Uniqueness checks over persisted cultors.
//!
//! The check runs before the write, so two concurrent submissions can both
//! pass it. The `uq_cultors_*` constraints in the database are the backstop;
//! the loser surfaces as a generic conflict, not [`CoreError::Duplicate`].

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Cultor fields that must be unique across all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UniqueField {
    IdNumber,
    PhoneNumber,
    Email,
    InstagramUser,
}

impl UniqueField {
    /// Field name as exposed to clients; doubles as the column name.
    pub fn as_str(self) -> &'static str {
        match self {
            UniqueField::IdNumber => "id_number",
            UniqueField::PhoneNumber => "phone_number",
            UniqueField::Email => "email",
            UniqueField::InstagramUser => "instagram_user",
        }
    }
}

#[async_trait]
pub trait UniquenessGuard: Send + Sync {
    /// Whether any persisted cultor holds `value` in `field`.
    async fn exists_by_field(&self, field: UniqueField, value: &str) -> Result<bool, CoreError>;

    /// Same as [`exists_by_field`](Self::exists_by_field), ignoring the
    /// cultor `exclude_id`.
    async fn exists_by_field_excluding(
        &self,
        field: UniqueField,
        value: &str,
        exclude_id: DbId,
    ) -> Result<bool, CoreError>;
}

/// Fail with [`CoreError::Duplicate`] if `value` is taken by any cultor other
/// than `exclude_id`.
pub async fn ensure_unique<G>(
    guard: &G,
    field: UniqueField,
    value: &str,
    exclude_id: Option<DbId>,
) -> Result<(), CoreError>
where
    G: UniquenessGuard + ?Sized,
{
    let taken = match exclude_id {
        Some(id) => guard.exists_by_field_excluding(field, value, id).await?,
        None => guard.exists_by_field(field, value).await?,
    };
    if taken {
        return Err(CoreError::Duplicate {
            field: field.as_str(),
        });
    }
    Ok(())
}
