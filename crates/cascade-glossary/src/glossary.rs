// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-instance glossary store.

use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;
use crate::schema::Schema;

static NULL: Value = Value::Null;

/// The configuration blob owned by one plugin instance.
///
/// Writes are validated against the plugin type's [`Schema`]; reads fall
/// back to the field default. Serializes as the plain JSON object that the
/// host persists.
#[derive(Debug, Clone)]
pub struct Glossary {
    schema: Arc<Schema>,
    values: Map<String, Value>,
}

impl Glossary {
    /// An empty glossary: every field reads as its default.
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            values: Map::new(),
        }
    }

    /// Adopt an already-persisted blob as-is.
    ///
    /// No validation happens here. Persisted data may predate the current
    /// schema, so readers must tolerate malformed entries.
    pub fn restore(schema: Arc<Schema>, values: Map<String, Value>) -> Self {
        Self { schema, values }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Stored value, else the field default, else `fallback`.
    pub fn get<'a>(&'a self, name: &str, fallback: &'a Value) -> &'a Value {
        match self.lookup(name) {
            Some(value) => value,
            None => fallback,
        }
    }

    /// Stored value or field default; `Null` when neither exists.
    pub fn value(&self, name: &str) -> &Value {
        self.lookup(name).unwrap_or(&NULL)
    }

    /// String view of [`Glossary::value`]; non-strings read as `None`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.value(name).as_str()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.value(name).as_bool()
    }

    /// Whether the instance stores an explicit value for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        self.values
            .get(name)
            .filter(|v| !v.is_null())
            .or_else(|| self.schema.field(name).and_then(|f| f.default.as_ref()))
    }

    /// Validate and store one field.
    ///
    /// On error the glossary is unchanged. A value that normalizes to
    /// `Null` removes the stored entry so the default applies again.
    pub fn set(&mut self, name: &str, raw: &Value) -> Result<(), ValidationError> {
        let field = self
            .schema
            .field(name)
            .ok_or_else(|| ValidationError::UnknownField {
                field: name.to_string(),
            })?;
        let normalized = field.validate(raw)?;
        if normalized.is_null() {
            self.values.remove(name);
        } else {
            self.values.insert(name.to_string(), normalized);
        }
        Ok(())
    }

    /// Remove a stored value. Returns the previous value, if any.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Apply every valid field of `raw`, collecting every invalid one.
    pub fn populate(&mut self, raw: Map<String, Value>) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        for (name, value) in &raw {
            if let Err(err) = self.set(name, value) {
                debug!(field = %name, error = %err, "rejected glossary value");
                errors.push(err);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The explicitly stored values.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

impl Serialize for Glossary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Choice, FieldSchema};
    use cascade_core::FieldKind;
    use serde_json::json;

    fn schema() -> Arc<Schema> {
        Arc::new(
            Schema::new([
                FieldSchema::declare("font_size", FieldKind::Size)
                    .with_units(["px", "em"])
                    .with_default("1em"),
                FieldSchema::declare("color", FieldKind::Color).with_default("#000000"),
                FieldSchema::declare("content", FieldKind::Text),
                FieldSchema::declare("text_align", FieldKind::Choice)
                    .with_choices([Choice::new("", "None"), Choice::new("text-center", "Center")])
                    .with_default(""),
                FieldSchema::declare("text_enabled", FieldKind::Choice)
                    .with_choices([Choice::new("yes", "Yes")]),
            ])
            .unwrap(),
        )
    }

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn missing_key_reads_default() {
        let glossary = Glossary::new(schema());
        assert_eq!(glossary.get_str("font_size"), Some("1em"));
        assert_eq!(glossary.get_str("content"), None);

        let fallback = json!("fallback");
        assert_eq!(glossary.get("content", &fallback), &fallback);
        assert_eq!(glossary.get("font_size", &fallback), &json!("1em"));
        assert_eq!(glossary.get("unknown", &fallback), &fallback);
    }

    #[test]
    fn set_normalizes_and_stores() {
        let mut glossary = Glossary::new(schema());
        glossary.set("color", &json!("#ABCDEF")).unwrap();
        assert_eq!(glossary.get_str("color"), Some("#abcdef"));
        assert!(glossary.contains("color"));
    }

    #[test]
    fn failed_set_leaves_glossary_unchanged() {
        let mut glossary = Glossary::new(schema());
        glossary.set("font_size", &json!("2em")).unwrap();
        let before = glossary.as_map().clone();

        let err = glossary.set("font_size", &json!("2rem")).unwrap_err();
        assert_eq!(err.field(), "font_size");
        assert_eq!(glossary.as_map(), &before);
        assert_eq!(glossary.get_str("font_size"), Some("2em"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut glossary = Glossary::new(schema());
        let err = glossary.set("colour", &json!("#fff")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                field: "colour".into()
            }
        );
        assert!(glossary.as_map().is_empty());
    }

    #[test]
    fn clearing_restores_default() {
        let mut glossary = Glossary::new(schema());
        glossary.set("font_size", &json!("3em")).unwrap();
        glossary.set("font_size", &json!("")).unwrap();
        assert!(!glossary.contains("font_size"));
        assert_eq!(glossary.get_str("font_size"), Some("1em"));

        glossary.set("content", &json!("star")).unwrap();
        assert_eq!(glossary.unset("content"), Some(json!("star")));
        assert_eq!(glossary.get_str("content"), None);
    }

    #[test]
    fn populate_applies_valid_and_reports_all_invalid() {
        let mut glossary = Glossary::new(schema());
        let errors = glossary
            .populate(raw(json!({
                "font_size": "2em",
                "color": "blue",
                "content": "star",
                "text_align": "justify",
            })))
            .unwrap_err();

        let mut fields: Vec<&str> = errors.iter().map(ValidationError::field).collect();
        fields.sort_unstable();
        assert_eq!(fields, ["color", "text_align"]);

        assert_eq!(glossary.get_str("font_size"), Some("2em"));
        assert_eq!(glossary.get_str("content"), Some("star"));
        assert_eq!(glossary.get_str("color"), Some("#000000"));
        assert_eq!(glossary.get_str("text_align"), Some(""));
    }

    #[test]
    fn populate_all_valid() {
        let mut glossary = Glossary::new(schema());
        glossary
            .populate(raw(json!({"content": "x", "text_align": "text-center"})))
            .unwrap();
        assert_eq!(glossary.as_map().len(), 2);
    }

    #[test]
    fn restore_skips_validation() {
        let glossary = Glossary::restore(
            schema(),
            raw(json!({"font_size": 12, "legacy": true})),
        );
        assert_eq!(glossary.value("font_size"), &json!(12));
        assert_eq!(glossary.get_str("font_size"), None);
        assert_eq!(glossary.get_bool("legacy"), Some(true));
    }

    #[test]
    fn stored_null_reads_as_default() {
        let glossary = Glossary::restore(schema(), raw(json!({"color": null})));
        assert_eq!(glossary.get_str("color"), Some("#000000"));
    }

    #[test]
    fn serializes_stored_values_only() {
        let mut glossary = Glossary::new(schema());
        glossary.set("content", &json!("star")).unwrap();
        let json = serde_json::to_value(&glossary).unwrap();
        assert_eq!(json, json!({"content": "star"}));
    }
}
