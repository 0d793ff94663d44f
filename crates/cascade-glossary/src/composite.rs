// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoders for composite glossary values.
//!
//! Glossaries restored from persistence are not re-validated, so these
//! decoders return `None` for any value that does not have the expected
//! shape instead of failing.

use serde_json::Value;

/// A `[width, style, color]` border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub width: String,
    pub style: String,
    pub color: String,
}

impl Border {
    pub fn from_value(value: &Value) -> Option<Self> {
        let [width, style, color] = value.as_array()?.as_slice() else {
            return None;
        };
        Some(Self {
            width: width.as_str()?.to_string(),
            style: style.as_str()?.to_string(),
            color: color.as_str()?.to_string(),
        })
    }

    /// A border with style `none` draws nothing.
    pub fn is_enabled(&self) -> bool {
        self.style != "none"
    }

    /// The CSS shorthand, e.g. `2px solid #ff0000`.
    pub fn css(&self) -> String {
        format!("{} {} {}", self.width, self.style, self.color)
    }
}

/// A `[disabled, color]` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggledColor {
    pub disabled: bool,
    pub color: String,
}

impl ToggledColor {
    pub fn from_value(value: &Value) -> Option<Self> {
        let [disabled, color] = value.as_array()?.as_slice() else {
            return None;
        };
        Some(Self {
            disabled: disabled.as_bool()?,
            color: color.as_str()?.to_string(),
        })
    }

    /// The color, only when the disabled flag is explicitly `false`.
    pub fn enabled_color(value: &Value) -> Option<String> {
        Self::from_value(value)
            .filter(|toggled| !toggled.disabled)
            .map(|toggled| toggled.color)
    }
}
