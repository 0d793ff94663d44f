// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring from configuration to the registry, catalogue and templates.

use std::sync::Arc;

use cascade_config::CascadeConfig;
use cascade_core::{CascadeError, IconFontId};
use cascade_iconfont::{IconFontSource, IconFontStore, InMemoryIconFontStore};
use cascade_plugin::{
    build_registry, CatalogSettings, PluginRegistry, RenderScope, TemplateChoice, TemplateDirs,
    TemplateSource, TrustAllowList,
};
use tracing::info;

/// Everything a render pass or the gateway needs, built once at start-up.
pub struct Runtime {
    pub registry: Arc<PluginRegistry>,
    pub catalogue: Arc<dyn IconFontStore>,
    pub templates: Arc<dyn TemplateSource>,
}

impl Runtime {
    pub fn from_config(config: &CascadeConfig) -> Result<Self, CascadeError> {
        let registry = build_registry(&catalog_settings(config))?;
        let catalogue = InMemoryIconFontStore::load(&icon_font_sources(config))?;
        info!(
            plugin_types = registry.len(),
            icon_fonts = catalogue.len(),
            "runtime ready"
        );
        Ok(Self {
            registry: Arc::new(registry),
            catalogue: Arc::new(catalogue),
            templates: template_source(config),
        })
    }

    /// A fresh scope for one render pass.
    pub fn scope(&self) -> RenderScope<'_> {
        RenderScope::new(self.catalogue.as_ref(), self.templates.as_ref())
    }
}

pub fn catalog_settings(config: &CascadeConfig) -> CatalogSettings {
    let extra_render_templates = config
        .templates
        .extra_render_templates
        .iter()
        .map(|(plugin_type, entries)| {
            let choices = entries
                .iter()
                .map(|entry| TemplateChoice::new(&entry.path, &entry.label))
                .collect();
            (plugin_type.clone(), choices)
        })
        .collect();

    CatalogSettings {
        extra_render_templates,
        with_extra_fields: config.plugins.with_extra_fields.clone(),
    }
}

pub fn icon_font_sources(config: &CascadeConfig) -> Vec<IconFontSource> {
    config
        .catalogue
        .fonts
        .iter()
        .map(|font| IconFontSource {
            id: IconFontId(font.id),
            identifier: font.identifier.clone(),
            config_path: font.config_path.clone(),
            stylesheet_url: font.stylesheet_url.clone(),
        })
        .collect()
}

/// Without template roots the allow-list is trusted as is.
pub fn template_source(config: &CascadeConfig) -> Arc<dyn TemplateSource> {
    if config.templates.dirs.is_empty() {
        Arc::new(TrustAllowList)
    } else {
        Arc::new(TemplateDirs::new(config.templates.dirs.iter().cloned()))
    }
}
