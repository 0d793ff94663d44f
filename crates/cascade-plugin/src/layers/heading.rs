// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use cascade_core::FieldKind;
use cascade_glossary::{Choice, FieldSchema};

use crate::instance::PluginInstance;
use crate::layer::PluginLayer;
use crate::markup::{escape_html, join_parts};
use crate::scope::RenderScope;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingLayer;

impl PluginLayer for HeadingLayer {
    fn name(&self) -> &str {
        "heading"
    }

    fn fields(&self) -> Vec<FieldSchema> {
        let levels = (1..=6).map(|k| Choice::new(format!("h{k}"), format!("Heading {k}")));
        vec![
            FieldSchema::declare("tag_type", FieldKind::Choice)
                .with_choices(levels)
                .with_default("h1"),
            FieldSchema::declare("content", FieldKind::Text).with_label("Heading content"),
        ]
    }

    /// `<code>h2</code>: Title #3`
    fn identifier(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        inherited: String,
    ) -> String {
        let Some(tag) = instance.choice("tag_type") else {
            return inherited;
        };
        let content = instance.glossary.get_str("content").unwrap_or_default();
        join_parts(&[
            format!("<code>{}</code>:", escape_html(tag)),
            escape_html(content),
            inherited,
        ])
    }

    fn tag(&self, instance: &PluginInstance) -> Option<String> {
        instance.choice("tag_type").map(str::to_string)
    }
}
