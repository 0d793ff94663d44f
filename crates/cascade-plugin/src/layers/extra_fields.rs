// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use cascade_core::FieldKind;
use cascade_glossary::FieldSchema;
use serde_json::Value;

use crate::instance::PluginInstance;
use crate::layer::PluginLayer;
use crate::scope::RenderScope;
use crate::styles::InlineStyles;

pub const EXTRA_CSS_CLASSES: &str = "extra_css_classes";
pub const EXTRA_INLINE_STYLES: &str = "extra_inline_styles";

/// Free-form classes and inline styles, enabled per plugin type by
/// configuration. Sits directly above the base layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraFieldsLayer;

impl PluginLayer for ExtraFieldsLayer {
    fn name(&self) -> &str {
        "extra_fields"
    }

    fn fields(&self) -> Vec<FieldSchema> {
        vec![
            FieldSchema::declare(EXTRA_CSS_CLASSES, FieldKind::ClassList)
                .with_label("Extra CSS classes"),
            FieldSchema::declare(EXTRA_INLINE_STYLES, FieldKind::StyleMap)
                .with_label("Extra inline styles"),
        ]
    }

    fn css_classes(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        mut classes: Vec<String>,
    ) -> Vec<String> {
        // Restored glossaries may still hold the space-separated form.
        match instance.glossary.value(EXTRA_CSS_CLASSES) {
            Value::Array(items) => {
                classes.extend(items.iter().filter_map(Value::as_str).map(str::to_string));
            }
            Value::String(s) => classes.extend(s.split_whitespace().map(str::to_string)),
            _ => {}
        }
        classes
    }

    fn inline_styles(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        mut styles: InlineStyles,
    ) -> InlineStyles {
        if let Some(extra) = instance.glossary.value(EXTRA_INLINE_STYLES).as_object() {
            for (property, value) in extra {
                if let Some(value) = value.as_str().filter(|v| !v.is_empty()) {
                    styles.set(property.as_str(), value);
                }
            }
        }
        styles
    }
}
