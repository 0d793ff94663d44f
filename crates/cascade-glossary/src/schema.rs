// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered, name-unique sets of field declarations.

use std::collections::HashMap;

use cascade_core::FieldKind;
use serde::Serialize;

use crate::error::SchemaError;
use crate::field::FieldSchema;

/// The field declarations of one plugin type.
///
/// Built once at registration time and shared read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<FieldSchema>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema set, rejecting duplicate names, choice fields without
    /// choices and defaults that fail their own validation.
    pub fn new(fields: impl IntoIterator<Item = FieldSchema>) -> Result<Self, SchemaError> {
        let fields: Vec<FieldSchema> = fields.into_iter().collect();
        let mut index = HashMap::with_capacity(fields.len());

        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.name.clone(), position).is_some() {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
            if field.kind == FieldKind::Choice && field.constraints.choices.is_empty() {
                return Err(SchemaError::EmptyChoices {
                    field: field.name.clone(),
                });
            }
            if let Some(default) = &field.default {
                field
                    .validate(default)
                    .map_err(|source| SchemaError::InvalidDefault {
                        field: field.name.clone(),
                        source,
                    })?;
            }
        }

        Ok(Self { fields, index })
    }

    /// A schema with no fields.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
