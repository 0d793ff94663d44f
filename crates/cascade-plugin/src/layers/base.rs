// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::instance::PluginInstance;
use crate::layer::PluginLayer;
use crate::scope::RenderScope;

/// Root of every ancestry chain.
///
/// Contributes the `#<position>` identifier and the plugin type's default
/// CSS class.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseLayer;

impl PluginLayer for BaseLayer {
    fn name(&self) -> &str {
        "base"
    }

    fn identifier(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        _inherited: String,
    ) -> String {
        instance
            .position
            .map(|position| format!("#{position}"))
            .unwrap_or_default()
    }

    fn css_classes(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        mut classes: Vec<String>,
    ) -> Vec<String> {
        if let Some(class) = &instance.plugin_type.default_css_class {
            classes.push(class.clone());
        }
        classes
    }
}
