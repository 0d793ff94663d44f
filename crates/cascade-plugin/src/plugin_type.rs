// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::sync::Arc;

use cascade_glossary::Schema;

use crate::layer::PluginLayer;
use crate::template::TemplatePolicy;

/// A registered plugin type.
///
/// Built by [`PluginTypeManifest::build`](crate::manifest::PluginTypeManifest::build)
/// and immutable afterwards.
pub struct PluginType {
    /// Registry key, e.g. `FontIconPlugin`.
    pub name: String,
    /// Display name, e.g. `Font Icon`.
    pub label: String,
    pub(crate) layers: Vec<Arc<dyn PluginLayer>>,
    /// Union of the fields declared by every layer, least specific first.
    pub schema: Arc<Schema>,
    pub default_tag: String,
    pub default_css_class: Option<String>,
    pub template: TemplatePolicy,
    pub allow_children: bool,
    pub require_parent: bool,
    pub parent_classes: Vec<String>,
    pub text_enabled: bool,
}

impl PluginType {
    /// Layers, most specific first, ending with the base layer.
    pub fn ancestry(&self) -> &[Arc<dyn PluginLayer>] {
        &self.layers
    }

    pub fn ancestry_names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    /// Whether any layer reads the `icon_font` reference.
    pub fn uses_icon_font(&self) -> bool {
        self.layers.iter().any(|layer| layer.uses_icon_font())
    }
}

impl fmt::Debug for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginType")
            .field("name", &self.name)
            .field("ancestry", &self.ancestry_names())
            .field("fields", &self.schema.names().collect::<Vec<_>>())
            .field("default_tag", &self.default_tag)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
