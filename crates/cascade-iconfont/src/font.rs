// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The icon font record and its glyph families.

use cascade_core::IconFontId;
use serde::Serialize;
use serde_json::{Map, Value};

/// Class prefix used when the config omits `css_prefix_text`.
pub const DEFAULT_CSS_PREFIX: &str = "icon-";

/// Family name for glyphs without a `src`.
pub const DEFAULT_FAMILY: &str = "default";

/// One entry of the icon font catalogue.
///
/// `config_data` is the JSON configuration exported by the icon font
/// tool. Only `css_prefix_text` and `glyphs[].css` / `glyphs[].src` are
/// interpreted; every other key is passed through to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconFont {
    pub id: IconFontId,
    pub identifier: String,
    pub config_data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet_url: Option<String>,
}

/// Glyph names grouped by source family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconFamily {
    pub name: String,
    pub glyphs: Vec<String>,
}

impl IconFont {
    pub fn new(id: IconFontId, identifier: impl Into<String>, config_data: Map<String, Value>) -> Self {
        Self {
            id,
            identifier: identifier.into(),
            config_data,
            stylesheet_url: None,
        }
    }

    pub fn with_stylesheet_url(mut self, url: impl Into<String>) -> Self {
        self.stylesheet_url = Some(url.into());
        self
    }

    pub fn css_prefix(&self) -> &str {
        self.config_data
            .get("css_prefix_text")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CSS_PREFIX)
    }

    /// CSS class of one glyph, e.g. `icon-star`.
    pub fn glyph_class(&self, content: &str) -> String {
        format!("{}{}", self.css_prefix(), content)
    }

    /// Glyphs grouped by `src`, families in first-seen order.
    ///
    /// Glyph entries without a string `css` name are skipped.
    pub fn families(&self) -> Vec<IconFamily> {
        let mut families: Vec<IconFamily> = Vec::new();
        let glyphs = self
            .config_data
            .get("glyphs")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for glyph in glyphs {
            let Some(css) = glyph.get("css").and_then(Value::as_str) else {
                continue;
            };
            let src = glyph
                .get("src")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_FAMILY);
            match families.iter_mut().find(|f| f.name == src) {
                Some(family) => family.glyphs.push(css.to_string()),
                None => families.push(IconFamily {
                    name: src.to_string(),
                    glyphs: vec![css.to_string()],
                }),
            }
        }
        families
    }

    /// The payload served to editing UIs: the config without its raw
    /// `glyphs` array, plus `families` mapping each family to its glyph
    /// names in first-seen order.
    pub fn catalogue_payload(&self) -> Value {
        let mut payload: Map<String, Value> = self
            .config_data
            .iter()
            .filter(|(key, _)| key.as_str() != "glyphs")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let families: Map<String, Value> = self
            .families()
            .into_iter()
            .map(|family| (family.name, Value::from(family.glyphs)))
            .collect();
        payload.insert("families".to_string(), Value::Object(families));
        Value::Object(payload)
    }
}
