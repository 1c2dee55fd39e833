use serde::Serialize;

use crate::types::DbId;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more field checks failed. Always non-empty.
    #[error("Validation failed: {}", describe_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Duplicate value for unique field: {field}")]
    Duplicate { field: &'static str },

    #[error("Field cannot be changed once set: {field}")]
    ImmutableField { field: &'static str },

    /// A collaborator (record store, registry backend) failed. The original
    /// error is kept as the source.
    #[error("Store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CoreError {
    /// Shorthand for a validation failure on a single field.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::Validation(vec![FieldViolation::new(field, reason)])
    }

    /// Wrap a collaborator failure.
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        CoreError::Store(Box::new(err))
    }
}

fn describe_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}
