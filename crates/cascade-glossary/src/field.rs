// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field schema declarations and value validation.
//!
//! A [`FieldSchema`] describes one configurable property of a plugin type.
//! [`FieldSchema::validate`] is a pure function from a raw JSON value to
//! its normalized stored form. A normalized `Value::Null` means "clear the
//! field" so that its default applies again.

use std::sync::LazyLock;

use cascade_core::{reference_id, FieldKind};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;

static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?([a-z]+|%)$").unwrap());

static COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static CLASS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").unwrap());

static PROPERTY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-{0,2}[a-zA-Z][a-zA-Z0-9-]*$").unwrap());

/// Units accepted by a size field that declares none.
pub const DEFAULT_UNITS: &[&str] = &["px", "em", "rem", "%"];

/// Units accepted for a border width unless the field narrows them.
pub const BORDER_WIDTH_UNITS: &[&str] = &["px"];

/// CSS border styles accepted by border fields.
pub const BORDER_STYLES: &[&str] = &[
    "none", "solid", "dashed", "dotted", "double", "groove", "ridge", "inset", "outset",
];

/// One entry of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Stored value.
    pub value: String,
    /// Human-readable label shown by editing UIs and identifiers.
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Kind-specific constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Constraints {
    /// Allowed values of a choice field, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    /// Allowed units of a size field (or of a border width).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_units: Vec<String>,
}

/// Declaration of one configurable glossary field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    /// Field name, unique within a plugin type.
    pub name: String,
    /// Label for editing UIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Semantic kind, selects the validator.
    pub kind: FieldKind,
    /// Value used when the glossary holds none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Kind-specific constraints.
    pub constraints: Constraints,
    /// Longer help text for editing UIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl FieldSchema {
    /// Declare a field with no default and no constraints.
    pub fn declare(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            default: None,
            constraints: Constraints::default(),
            help_text: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.constraints.choices = choices.into_iter().collect();
        self
    }

    pub fn with_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.allowed_units = units.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Look up the label of a declared choice value.
    pub fn choice_label(&self, value: &str) -> Option<&str> {
        self.constraints
            .choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label.as_str())
    }

    /// Validate and normalize a raw value.
    ///
    /// Pure: depends only on `raw` and the declaration.
    pub fn validate(&self, raw: &Value) -> Result<Value, ValidationError> {
        if raw.is_null() {
            return Ok(Value::Null);
        }
        match self.kind {
            FieldKind::Text => Ok(Value::String(self.expect_str(raw)?.to_string())),
            FieldKind::Choice => self.validate_choice(raw),
            FieldKind::Color => match self.expect_str(raw)? {
                "" => Ok(Value::Null),
                s => self.check_color(s).map(Value::String),
            },
            FieldKind::Size => match self.expect_str(raw)? {
                "" => Ok(Value::Null),
                s => self.check_size(s, &self.units(DEFAULT_UNITS)).map(Value::String),
            },
            FieldKind::Border => self.validate_border(raw),
            FieldKind::ToggledColor => self.validate_toggled_color(raw),
            FieldKind::Reference => self.validate_reference(raw),
            FieldKind::ClassList => self.validate_class_list(raw),
            FieldKind::StyleMap => self.validate_style_map(raw),
        }
    }

    fn units<'a>(&'a self, fallback: &'a [&'a str]) -> Vec<&'a str> {
        if self.constraints.allowed_units.is_empty() {
            fallback.to_vec()
        } else {
            self.constraints
                .allowed_units
                .iter()
                .map(String::as_str)
                .collect()
        }
    }

    fn expect_str<'v>(&self, raw: &'v Value) -> Result<&'v str, ValidationError> {
        raw.as_str().ok_or_else(|| self.mismatch("a string", raw))
    }

    fn mismatch(&self, expected: &'static str, found: &Value) -> ValidationError {
        ValidationError::TypeMismatch {
            field: self.name.clone(),
            expected,
            found: json_type(found).to_string(),
        }
    }

    fn malformed(&self, detail: impl Into<String>) -> ValidationError {
        ValidationError::MalformedComposite {
            field: self.name.clone(),
            detail: detail.into(),
        }
    }

    fn validate_choice(&self, raw: &Value) -> Result<Value, ValidationError> {
        let value = self.expect_str(raw)?;
        if self.choice_label(value).is_some() {
            return Ok(Value::String(value.to_string()));
        }
        let allowed = self
            .constraints
            .choices
            .iter()
            .map(|c| format!("`{}`", c.value))
            .collect::<Vec<_>>()
            .join(", ");
        Err(ValidationError::ChoiceNotAllowed {
            field: self.name.clone(),
            value: value.to_string(),
            allowed,
        })
    }

    fn check_color(&self, value: &str) -> Result<String, ValidationError> {
        if COLOR_PATTERN.is_match(value) {
            Ok(value.to_ascii_lowercase())
        } else {
            Err(ValidationError::InvalidColor {
                field: self.name.clone(),
                value: value.to_string(),
            })
        }
    }

    fn check_size(&self, value: &str, units: &[&str]) -> Result<String, ValidationError> {
        let unit_ok = SIZE_PATTERN
            .captures(value)
            .and_then(|caps| caps.get(1))
            .is_some_and(|unit| units.contains(&unit.as_str()));
        if unit_ok {
            Ok(value.to_string())
        } else {
            Err(ValidationError::InvalidSize {
                field: self.name.clone(),
                value: value.to_string(),
                allowed: units.join(", "),
            })
        }
    }

    fn validate_border(&self, raw: &Value) -> Result<Value, ValidationError> {
        let parts = raw
            .as_array()
            .ok_or_else(|| self.mismatch("[width, style, color]", raw))?;
        let [width, style, color] = parts.as_slice() else {
            return Err(self.malformed(format!(
                "expected [width, style, color], found {} elements",
                parts.len()
            )));
        };
        let (Some(width), Some(style), Some(color)) = (width.as_str(), style.as_str(), color.as_str())
        else {
            return Err(self.malformed("border components must be strings"));
        };

        let width = self.check_size(width, &self.units(BORDER_WIDTH_UNITS))?;
        if !BORDER_STYLES.contains(&style) {
            return Err(self.malformed(format!(
                "`{style}` is not a border style (expected one of {})",
                BORDER_STYLES.join(", ")
            )));
        }
        let color = self.check_color(color)?;

        Ok(Value::Array(vec![
            Value::String(width),
            Value::String(style.to_string()),
            Value::String(color),
        ]))
    }

    fn validate_toggled_color(&self, raw: &Value) -> Result<Value, ValidationError> {
        let parts = raw
            .as_array()
            .ok_or_else(|| self.mismatch("[disabled, color]", raw))?;
        let [disabled, color] = parts.as_slice() else {
            return Err(self.malformed(format!(
                "expected [disabled, color], found {} elements",
                parts.len()
            )));
        };
        let Some(disabled) = disabled.as_bool() else {
            return Err(self.malformed("the first element must be a boolean flag"));
        };
        let Some(color) = color.as_str() else {
            return Err(self.malformed("the second element must be a color string"));
        };
        let color = self.check_color(color)?;

        Ok(Value::Array(vec![Value::Bool(disabled), Value::String(color)]))
    }

    fn validate_reference(&self, raw: &Value) -> Result<Value, ValidationError> {
        if raw.as_str() == Some("") {
            return Ok(Value::Null);
        }
        reference_id(raw)
            .map(Value::from)
            .ok_or_else(|| self.mismatch("a non-negative integer id", raw))
    }

    fn validate_class_list(&self, raw: &Value) -> Result<Value, ValidationError> {
        let tokens: Vec<&str> = match raw {
            Value::String(s) => s.split_whitespace().collect(),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::trim)
                        .ok_or_else(|| self.malformed("class names must be strings"))
                })
                .collect::<Result<_, _>>()?,
            other => return Err(self.mismatch("a class list", other)),
        };

        let mut classes = Vec::with_capacity(tokens.len());
        for token in tokens.into_iter().filter(|t| !t.is_empty()) {
            if !CLASS_PATTERN.is_match(token) {
                return Err(self.malformed(format!("`{token}` is not a valid CSS class name")));
            }
            classes.push(Value::String(token.to_string()));
        }

        if classes.is_empty() {
            Ok(Value::Null)
        } else {
            Ok(Value::Array(classes))
        }
    }

    fn validate_style_map(&self, raw: &Value) -> Result<Value, ValidationError> {
        let entries = raw
            .as_object()
            .ok_or_else(|| self.mismatch("a property map", raw))?;

        let mut styles = Map::new();
        for (property, value) in entries {
            let property = property.trim();
            if !PROPERTY_PATTERN.is_match(property) {
                return Err(self.malformed(format!("`{property}` is not a CSS property name")));
            }
            let value = match value {
                Value::String(s) => s.trim().to_string(),
                Value::Number(n) => n.to_string(),
                Value::Null => continue,
                _ => {
                    return Err(self.malformed(format!(
                        "value of `{property}` must be a string or a number"
                    )));
                }
            };
            if !value.is_empty() {
                styles.insert(property.to_string(), Value::String(value));
            }
        }

        if styles.is_empty() {
            Ok(Value::Null)
        } else {
            Ok(Value::Object(styles))
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn align() -> FieldSchema {
        FieldSchema::declare("text_align", FieldKind::Choice).with_choices([
            Choice::new("", "Do not align"),
            Choice::new("text-left", "Left"),
            Choice::new("text-center", "Center"),
        ])
    }

    #[test]
    fn null_always_clears() {
        for kind in [FieldKind::Text, FieldKind::Size, FieldKind::Border] {
            let field = FieldSchema::declare("f", kind);
            assert_eq!(field.validate(&Value::Null), Ok(Value::Null));
        }
    }

    #[test]
    fn text_rejects_non_strings() {
        let field = FieldSchema::declare("content", FieldKind::Text);
        assert_eq!(field.validate(&json!("Hello")), Ok(json!("Hello")));
        let err = field.validate(&json!(3)).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
        assert_eq!(err.field(), "content");
    }

    #[test]
    fn choice_must_be_declared() {
        let field = align();
        assert_eq!(field.validate(&json!("text-center")), Ok(json!("text-center")));
        assert_eq!(field.validate(&json!("")), Ok(json!("")));

        let err = field.validate(&json!("text-justify")).unwrap_err();
        match err {
            ValidationError::ChoiceNotAllowed { value, allowed, .. } => {
                assert_eq!(value, "text-justify");
                assert!(allowed.contains("`text-left`"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn choice_label_lookup() {
        let field = align();
        assert_eq!(field.choice_label("text-left"), Some("Left"));
        assert_eq!(field.choice_label("nope"), None);
    }

    #[test]
    fn size_respects_allowed_units() {
        let field = FieldSchema::declare("font_size", FieldKind::Size).with_units(["px", "em"]);
        assert_eq!(field.validate(&json!("2em")), Ok(json!("2em")));
        assert_eq!(field.validate(&json!("1.5px")), Ok(json!("1.5px")));
        assert_eq!(field.validate(&json!("")), Ok(Value::Null));

        for bad in ["2rem", "em", "12", "2 em", "50%"] {
            let err = field.validate(&json!(bad)).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidSize { .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn size_defaults_to_common_units() {
        let field = FieldSchema::declare("width", FieldKind::Size);
        assert!(field.validate(&json!("50%")).is_ok());
        assert!(field.validate(&json!("3rem")).is_ok());
        assert!(field.validate(&json!("3vh")).is_err());
    }

    #[test]
    fn color_is_lowercased() {
        let field = FieldSchema::declare("color", FieldKind::Color);
        assert_eq!(field.validate(&json!("#FF8800")), Ok(json!("#ff8800")));
        assert_eq!(field.validate(&json!("#abc")), Ok(json!("#abc")));
        assert!(matches!(
            field.validate(&json!("red")),
            Err(ValidationError::InvalidColor { .. })
        ));
    }

    #[test]
    fn border_accepts_width_style_color() {
        let field = FieldSchema::declare("border", FieldKind::Border);
        assert_eq!(
            field.validate(&json!(["2px", "solid", "#FF0000"])),
            Ok(json!(["2px", "solid", "#ff0000"]))
        );
        assert!(field.validate(&json!(["0px", "none", "#000000"])).is_ok());
    }

    #[test]
    fn border_rejects_malformed_tuples() {
        let field = FieldSchema::declare("border", FieldKind::Border);
        let cases = [
            json!(["2px", "solid"]),
            json!(["2px", "solid", "#000", "extra"]),
            json!(["2px", "wavy", "#000000"]),
            json!([2, "solid", "#000000"]),
        ];
        for case in cases {
            let err = field.validate(&case).unwrap_err();
            assert!(
                matches!(err, ValidationError::MalformedComposite { .. }),
                "{case} should be malformed, got {err:?}"
            );
        }
        assert!(matches!(
            field.validate(&json!(["2em", "solid", "#000000"])),
            Err(ValidationError::InvalidSize { .. })
        ));
        assert!(matches!(
            field.validate(&json!("2px solid #000")),
            Err(ValidationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn toggled_color_needs_flag_and_color() {
        let field = FieldSchema::declare("background_color", FieldKind::ToggledColor);
        assert_eq!(
            field.validate(&json!([false, "#EEEEEE"])),
            Ok(json!([false, "#eeeeee"]))
        );
        assert!(field.validate(&json!(["false", "#eeeeee"])).is_err());
        assert!(field.validate(&json!([true])).is_err());
        assert!(field.validate(&json!([true, "blue"])).is_err());
    }

    #[test]
    fn reference_normalizes_to_integer() {
        let field = FieldSchema::declare("icon_font", FieldKind::Reference);
        assert_eq!(field.validate(&json!("3")), Ok(json!(3)));
        assert_eq!(field.validate(&json!(3)), Ok(json!(3)));
        assert_eq!(field.validate(&json!("")), Ok(Value::Null));
        assert!(field.validate(&json!("three")).is_err());
        assert!(field.validate(&json!(-1)).is_err());
    }

    #[test]
    fn class_list_accepts_string_or_array() {
        let field = FieldSchema::declare("extra_css_classes", FieldKind::ClassList);
        assert_eq!(
            field.validate(&json!("lead  shadow-sm")),
            Ok(json!(["lead", "shadow-sm"]))
        );
        assert_eq!(field.validate(&json!(["a", " b "])), Ok(json!(["a", "b"])));
        assert_eq!(field.validate(&json!("   ")), Ok(Value::Null));
        assert!(field.validate(&json!("9lives")).is_err());
        assert!(field.validate(&json!([1])).is_err());
    }

    #[test]
    fn style_map_keeps_declaration_order() {
        let field = FieldSchema::declare("extra_inline_styles", FieldKind::StyleMap);
        let normalized = field
            .validate(&json!({"margin-top": " 10px ", "color": "", "z-index": 3}))
            .unwrap();
        let keys: Vec<&String> = normalized.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["margin-top", "z-index"]);
        assert_eq!(normalized["margin-top"], json!("10px"));
        assert_eq!(normalized["z-index"], json!("3"));

        assert!(field.validate(&json!({"not a prop": "x"})).is_err());
        assert!(field.validate(&json!({"color": ["red"]})).is_err());
        assert_eq!(field.validate(&json!({})), Ok(Value::Null));
    }

    proptest::proptest! {
        #[test]
        fn sizes_keep_their_text_when_the_unit_is_allowed(
            magnitude in -10_000i32..10_000,
            fraction in proptest::option::of(0u8..100),
            unit in proptest::sample::select(vec!["px", "em"]),
        ) {
            let field = FieldSchema::declare("font_size", FieldKind::Size).with_units(["px", "em"]);
            let text = match fraction {
                Some(f) => format!("{magnitude}.{f}{unit}"),
                None => format!("{magnitude}{unit}"),
            };
            proptest::prop_assert_eq!(field.validate(&json!(text.clone())), Ok(json!(text)));
        }

        #[test]
        fn sizes_with_other_units_are_rejected(magnitude in 0u32..10_000, unit in "(rem|vh|pt)") {
            let field = FieldSchema::declare("font_size", FieldKind::Size).with_units(["px", "em"]);
            let is_invalid_size = matches!(
                field.validate(&json!(format!("{magnitude}{unit}"))),
                Err(ValidationError::InvalidSize { .. })
            );
            proptest::prop_assert!(is_invalid_size);
        }
    }
}
