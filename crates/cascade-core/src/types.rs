// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifier types shared across the Cascade crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use thiserror::Error;

/// Stable identity of one placed plugin instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an icon font in the external catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IconFontId(pub u64);

impl IconFontId {
    /// Read an icon font reference out of a stored glossary value.
    ///
    /// Accepts a non-negative integer or a string of ASCII digits. Anything
    /// else is a malformed reference and yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        reference_id(value).map(IconFontId)
    }
}

impl fmt::Display for IconFontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when a path or CLI argument is not a valid icon font id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid icon font id `{0}`")]
pub struct InvalidIconFontId(pub String);

impl FromStr for IconFontId {
    type Err = InvalidIconFontId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s)
            .map(IconFontId)
            .ok_or_else(|| InvalidIconFontId(s.to_string()))
    }
}

/// Parse an external-entity reference from a JSON value.
pub fn reference_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => parse_digits(s),
        _ => None,
    }
}

// Digits only: no sign, no whitespace.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Semantic kind of a glossary field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// One value out of a declared choice set.
    Choice,
    /// A hex color such as `#ff8800`.
    Color,
    /// A CSS length with a constrained unit, e.g. `2em`.
    Size,
    /// Composite `[width, style, color]`.
    Border,
    /// Composite `[disabled, color]`.
    ToggledColor,
    /// Id of an external catalogue entity.
    Reference,
    /// A list of CSS class tokens.
    ClassList,
    /// A mapping of CSS property to value.
    StyleMap,
}
