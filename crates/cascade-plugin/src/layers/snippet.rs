// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use cascade_core::FieldKind;
use cascade_glossary::{Choice, FieldSchema};

use crate::instance::PluginInstance;
use crate::layer::PluginLayer;
use crate::markup::{escape_html, join_parts};
use crate::scope::RenderScope;
use crate::template::{RENDER_TEMPLATE_FIELD, TemplateChoice};

/// A container rendered with a host-provided template.
#[derive(Debug, Clone, Default)]
pub struct SnippetLayer {
    choices: Vec<TemplateChoice>,
}

impl SnippetLayer {
    pub fn new(choices: Vec<TemplateChoice>) -> Self {
        Self { choices }
    }
}

impl PluginLayer for SnippetLayer {
    fn name(&self) -> &str {
        "snippet"
    }

    fn fields(&self) -> Vec<FieldSchema> {
        let choices = self
            .choices
            .iter()
            .map(|c| Choice::new(c.path.as_str(), c.label.as_str()));
        vec![
            FieldSchema::declare(RENDER_TEMPLATE_FIELD, FieldKind::Choice)
                .with_label("Render template")
                .with_choices(choices),
        ]
    }

    fn identifier(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        inherited: String,
    ) -> String {
        let label = instance
            .glossary
            .get_str(RENDER_TEMPLATE_FIELD)
            .and_then(|path| self.choices.iter().find(|c| c.path == path))
            .map(|c| escape_html(&c.label));
        match label {
            Some(label) => join_parts(&[label, inherited]),
            None => inherited,
        }
    }
}
