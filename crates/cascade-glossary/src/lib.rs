// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field schemas and per-instance glossaries.
//!
//! A plugin type declares its configurable fields as a [`Schema`] of
//! [`FieldSchema`] entries. Each placed instance owns a [`Glossary`] that
//! validates writes against that schema and falls back to field defaults
//! on read.

pub mod composite;
pub mod error;
pub mod field;
pub mod glossary;
pub mod schema;

pub use composite::{Border, ToggledColor};
pub use error::{SchemaError, ValidationError};
pub use field::{BORDER_STYLES, Choice, Constraints, DEFAULT_UNITS, FieldSchema};
pub use glossary::Glossary;
pub use schema::Schema;
