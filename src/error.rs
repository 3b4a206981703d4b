//! Validation error types for the entity schema layer.
//!
//! One error kind: a document either constructs cleanly or fails with a
//! `ValidationError` listing every offending field. There is no partial
//! construction and no recovery beyond declared defaults.

use thiserror::Error;

/// Result type for entity construction.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    /// Field is declared required but absent from the document.
    #[error("missing required field")]
    Missing,
    /// Field is present but holds the wrong JSON shape.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// Field is restricted to a closed set and the value is outside it.
    #[error("value not in enumeration: '{value}' is not one of [{}]", .allowed.join(", "))]
    UnknownVariant {
        value: String,
        allowed: &'static [&'static str],
    },
}

/// A single field-path/reason pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}': {reason}")]
pub struct FieldError {
    /// Field path within the document (e.g. `prescription_list[1].medication_name`).
    pub field: String,
    /// What went wrong.
    pub reason: Reason,
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: Reason::Missing,
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self {
            field: field.into(),
            reason: Reason::TypeMismatch { expected, actual },
        }
    }

    pub fn unknown_variant(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            field: field.into(),
            reason: Reason::UnknownVariant {
                value: value.into(),
                allowed,
            },
        }
    }
}

/// Validation failure for one document.
///
/// Carries every field error found, not just the first; callers surface the
/// whole list to the client that submitted the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} validation failed: {}", .errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationError {
    /// Entity the document was validated against.
    pub entity: &'static str,
    /// All field errors, in document-declaration order.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(entity: &'static str, errors: Vec<FieldError>) -> Self {
        Self { entity, errors }
    }

    pub fn single(entity: &'static str, error: FieldError) -> Self {
        Self {
            entity,
            errors: vec![error],
        }
    }

    /// Whether any recorded error is rooted at the given field path.
    pub fn mentions(&self, field: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.field == field || e.field.starts_with(&format!("{field}[")))
    }
}
