// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The plugin layer trait.
//!
//! A plugin type's ancestry is an ordered list of layers, most specific
//! first and ending with the base layer. Resolution folds that list from
//! the base upwards: each hook receives the result accumulated by the
//! less specific layers and returns its own. A layer with nothing to add
//! returns the inherited value unchanged.

use std::fmt;

use cascade_glossary::FieldSchema;

use crate::instance::PluginInstance;
use crate::scope::RenderScope;
use crate::styles::InlineStyles;

pub trait PluginLayer: Send + Sync + fmt::Debug {
    /// Short name shown in ancestry listings.
    fn name(&self) -> &str;

    /// Glossary fields this layer declares.
    fn fields(&self) -> Vec<FieldSchema> {
        Vec::new()
    }

    /// Decorate the identifier produced by less specific layers.
    fn identifier(
        &self,
        _instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        inherited: String,
    ) -> String {
        inherited
    }

    /// Append CSS classes.
    fn css_classes(
        &self,
        _instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        classes: Vec<String>,
    ) -> Vec<String> {
        classes
    }

    /// Set or override inline style declarations.
    fn inline_styles(
        &self,
        _instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        styles: InlineStyles,
    ) -> InlineStyles {
        styles
    }

    /// Container tag demanded by this layer, if any.
    fn tag(&self, _instance: &PluginInstance) -> Option<String> {
        None
    }

    /// Whether this layer reads the `icon_font` reference.
    fn uses_icon_font(&self) -> bool {
        false
    }
}
