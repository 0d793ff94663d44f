// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use indexmap::IndexMap;
use serde::Serialize;

/// Inline style declarations in insertion order.
///
/// Setting a property that already exists replaces its value but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InlineStyles(IndexMap<String, String>);

impl InlineStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a `style` attribute value: `prop:value;` per entry.
    pub fn to_css(&self) -> String {
        self.iter().map(|(k, v)| format!("{k}:{v};")).collect()
    }
}
