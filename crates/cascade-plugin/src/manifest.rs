// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin-type manifests.
//!
//! A manifest lists a plugin type's own layers (most specific first) plus
//! its metadata. [`PluginTypeManifest::build`] appends the extra-fields
//! layer when enabled and the base layer, then assembles the field schema
//! from every layer, least specific first.

use std::sync::Arc;

use cascade_glossary::{Schema, SchemaError};

use crate::layer::PluginLayer;
use crate::layers::{BaseLayer, ExtraFieldsLayer};
use crate::plugin_type::PluginType;
use crate::template::TemplatePolicy;

#[derive(Debug)]
pub struct PluginTypeManifest {
    pub name: String,
    pub label: String,
    layers: Vec<Arc<dyn PluginLayer>>,
    pub default_tag: String,
    pub default_css_class: Option<String>,
    pub template: TemplatePolicy,
    pub allow_children: bool,
    pub require_parent: bool,
    pub parent_classes: Vec<String>,
    pub text_enabled: bool,
    pub with_extra_fields: bool,
}

impl PluginTypeManifest {
    pub fn new(name: impl Into<String>, label: impl Into<String>, template: TemplatePolicy) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            layers: Vec::new(),
            default_tag: "div".to_string(),
            default_css_class: None,
            template,
            allow_children: false,
            require_parent: false,
            parent_classes: Vec::new(),
            text_enabled: false,
            with_extra_fields: false,
        }
    }

    /// Add the next less specific layer.
    pub fn layer(mut self, layer: impl PluginLayer + 'static) -> Self {
        self.layers.push(Arc::new(layer));
        self
    }

    pub fn default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    pub fn default_css_class(mut self, class: impl Into<String>) -> Self {
        self.default_css_class = Some(class.into());
        self
    }

    pub fn allow_children(mut self) -> Self {
        self.allow_children = true;
        self
    }

    pub fn parent_classes<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_classes = parents.into_iter().map(Into::into).collect();
        self
    }

    pub fn require_parent(mut self) -> Self {
        self.require_parent = true;
        self
    }

    pub fn text_enabled(mut self) -> Self {
        self.text_enabled = true;
        self
    }

    pub fn with_extra_fields(mut self, enabled: bool) -> Self {
        self.with_extra_fields = enabled;
        self
    }

    pub fn build(self) -> Result<PluginType, SchemaError> {
        let mut layers = self.layers;
        if self.with_extra_fields {
            layers.push(Arc::new(ExtraFieldsLayer));
        }
        layers.push(Arc::new(BaseLayer));

        let schema = Schema::new(layers.iter().rev().flat_map(|layer| layer.fields()))?;

        Ok(PluginType {
            name: self.name,
            label: self.label,
            layers,
            schema: Arc::new(schema),
            default_tag: self.default_tag,
            default_css_class: self.default_css_class,
            template: self.template,
            allow_children: self.allow_children,
            require_parent: self.require_parent,
            parent_classes: self.parent_classes,
            text_enabled: self.text_enabled,
        })
    }
}
