// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use cascade_core::FieldKind;
use cascade_glossary::{Choice, FieldSchema};

use crate::instance::PluginInstance;
use crate::layer::PluginLayer;
use crate::markup::{escape_html, join_parts};
use crate::scope::RenderScope;
use crate::template::NAKED_TAG;

const WRAPPER_TAGS: &[&str] = &["div", "span", "section", "article"];

/// A transparent container around its children.
#[derive(Debug, Clone, Copy, Default)]
pub struct WrapperLayer;

impl WrapperLayer {
    fn tag_field() -> FieldSchema {
        let choices = WRAPPER_TAGS
            .iter()
            .map(|tag| Choice::new(*tag, format!("<{tag}> – Element")))
            .chain(std::iter::once(Choice::new(NAKED_TAG, "Naked Wrapper")));
        FieldSchema::declare("tag_type", FieldKind::Choice)
            .with_label("HTML element tag")
            .with_choices(choices)
            .with_default("div")
            .with_help_text("Choose a tag type for this HTML element.")
    }
}

impl PluginLayer for WrapperLayer {
    fn name(&self) -> &str {
        "wrapper"
    }

    fn fields(&self) -> Vec<FieldSchema> {
        vec![Self::tag_field()]
    }

    fn identifier(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        inherited: String,
    ) -> String {
        let label = instance
            .glossary
            .get_str("tag_type")
            .and_then(|tag| instance.plugin_type.schema.field("tag_type")?.choice_label(tag));
        match label {
            Some(label) => join_parts(&[escape_html(label), inherited]),
            None => inherited,
        }
    }

    fn tag(&self, instance: &PluginInstance) -> Option<String> {
        instance
            .glossary
            .get_str("tag_type")
            .filter(|tag| WRAPPER_TAGS.contains(tag))
            .map(str::to_string)
    }
}
