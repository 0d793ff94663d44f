// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation and schema errors.

use cascade_core::CascadeError;
use thiserror::Error;

/// A raw glossary value rejected by its field schema.
///
/// Always scoped to a single field: one invalid field never affects the
/// rest of the glossary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The plugin type declares no field with this name.
    #[error("unknown field `{field}`")]
    UnknownField { field: String },

    /// The JSON type of the value does not fit the field kind.
    #[error("field `{field}` expects {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// A choice value outside the declared choice set.
    #[error("field `{field}`: `{value}` is not one of: {allowed}")]
    ChoiceNotAllowed {
        field: String,
        value: String,
        allowed: String,
    },

    /// A size without a number or with a unit that is not allowed.
    #[error("field `{field}`: `{value}` is not a size in {allowed}")]
    InvalidSize {
        field: String,
        value: String,
        allowed: String,
    },

    /// Not a `#rgb` or `#rrggbb` color.
    #[error("field `{field}`: `{value}` is not a hex color")]
    InvalidColor { field: String, value: String },

    /// A composite value with the wrong shape.
    #[error("field `{field}`: {detail}")]
    MalformedComposite { field: String, detail: String },
}

impl ValidationError {
    /// Name of the field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::UnknownField { field }
            | ValidationError::TypeMismatch { field, .. }
            | ValidationError::ChoiceNotAllowed { field, .. }
            | ValidationError::InvalidSize { field, .. }
            | ValidationError::InvalidColor { field, .. }
            | ValidationError::MalformedComposite { field, .. } => field,
        }
    }
}

impl From<ValidationError> for CascadeError {
    fn from(err: ValidationError) -> Self {
        CascadeError::Validation(err.to_string())
    }
}

/// Errors raised while assembling a schema set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two declarations share a field name.
    #[error("duplicate field `{name}`")]
    DuplicateField { name: String },

    /// A choice field declared without any choices.
    #[error("choice field `{field}` declares no choices")]
    EmptyChoices { field: String },

    /// A declared default does not pass the field's own validation.
    #[error("invalid default for field `{field}`: {source}")]
    InvalidDefault {
        field: String,
        #[source]
        source: ValidationError,
    },
}

impl From<SchemaError> for CascadeError {
    fn from(err: SchemaError) -> Self {
        CascadeError::Schema(err.to_string())
    }
}
