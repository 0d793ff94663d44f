// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The icon font capability shared by the icon and inline icon types.

use cascade_core::FieldKind;
use cascade_glossary::FieldSchema;

use crate::instance::PluginInstance;
use crate::layer::PluginLayer;
use crate::markup::{escape_html, join_parts};
use crate::scope::{ICON_FONT_FIELD, RenderScope};

/// Glossary field holding the glyph name.
pub const CONTENT_FIELD: &str = "content";

#[derive(Debug, Clone, Copy, Default)]
pub struct IconFontLayer;

impl IconFontLayer {
    /// Class of the selected glyph, when both the font and the glyph are
    /// known.
    pub fn icon_class(instance: &PluginInstance, scope: &RenderScope<'_>) -> Option<String> {
        let content = instance
            .glossary
            .get_str(CONTENT_FIELD)
            .filter(|c| !c.is_empty())?;
        let font = scope.icon_font(instance)?;
        Some(font.glyph_class(content))
    }
}

impl PluginLayer for IconFontLayer {
    fn name(&self) -> &str {
        "icon_font"
    }

    fn fields(&self) -> Vec<FieldSchema> {
        vec![
            FieldSchema::declare(ICON_FONT_FIELD, FieldKind::Reference).with_label("Font"),
            FieldSchema::declare(CONTENT_FIELD, FieldKind::Text).with_label("Select Icon"),
        ]
    }

    /// Appends `Font Awesome: <i class="fa-star"></i>`.
    fn identifier(
        &self,
        instance: &PluginInstance,
        scope: &RenderScope<'_>,
        inherited: String,
    ) -> String {
        let Some(font) = scope.icon_font(instance) else {
            return inherited;
        };
        let content = instance.glossary.get_str(CONTENT_FIELD).unwrap_or_default();
        let preview = format!(
            "{}: <i class=\"{}\"></i>",
            escape_html(&font.identifier),
            escape_html(&font.glyph_class(content)),
        );
        join_parts(&[inherited, preview])
    }

    fn css_classes(
        &self,
        instance: &PluginInstance,
        scope: &RenderScope<'_>,
        mut classes: Vec<String>,
    ) -> Vec<String> {
        if let Some(class) = Self::icon_class(instance, scope) {
            classes.push(class);
        }
        classes
    }

    fn uses_icon_font(&self) -> bool {
        true
    }
}
