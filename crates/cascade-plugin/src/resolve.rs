// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render-time resolution.
//!
//! Every function here folds the instance's ancestry from the base layer
//! up to the most specific layer. For identifiers that means the most
//! specific decoration wraps everything below it; for classes and styles
//! it means later layers append to or override earlier ones.

use cascade_core::InstanceId;
use serde::Serialize;

use crate::instance::PluginInstance;
use crate::layers::IconFontLayer;
use crate::scope::RenderScope;
use crate::styles::InlineStyles;
use crate::template::{select_template, TemplateRef};

/// Human-readable label for editing UIs. May contain HTML markup; user
/// text inside it is escaped.
pub fn identify(instance: &PluginInstance, scope: &RenderScope<'_>) -> String {
    instance
        .plugin_type
        .ancestry()
        .iter()
        .rev()
        .fold(String::new(), |inherited, layer| {
            layer.identifier(instance, scope, inherited)
        })
}

pub fn resolve_classes(instance: &PluginInstance, scope: &RenderScope<'_>) -> Vec<String> {
    instance
        .plugin_type
        .ancestry()
        .iter()
        .rev()
        .fold(Vec::new(), |classes, layer| {
            layer.css_classes(instance, scope, classes)
        })
}

pub fn resolve_styles(instance: &PluginInstance, scope: &RenderScope<'_>) -> InlineStyles {
    instance
        .plugin_type
        .ancestry()
        .iter()
        .rev()
        .fold(InlineStyles::new(), |styles, layer| {
            layer.inline_styles(instance, scope, styles)
        })
}

/// The most specific layer naming a tag wins, else the type's default.
pub fn resolve_tag(instance: &PluginInstance) -> String {
    instance
        .plugin_type
        .ancestry()
        .iter()
        .find_map(|layer| layer.tag(instance))
        .unwrap_or_else(|| instance.plugin_type.default_tag.clone())
}

/// Everything the external renderer needs for one instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlugin {
    pub plugin_type: String,
    pub instance_id: InstanceId,
    pub identifier: String,
    pub tag: String,
    pub classes: Vec<String>,
    pub styles: InlineStyles,
    /// `styles` rendered as a `style` attribute value.
    pub inline_style: String,
    pub template: TemplateRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
}

pub fn resolve(instance: &PluginInstance, scope: &RenderScope<'_>) -> ResolvedPlugin {
    let styles = resolve_styles(instance, scope);
    let (stylesheet_url, icon_class) = if instance.plugin_type.uses_icon_font() {
        (
            scope
                .icon_font(instance)
                .and_then(|font| font.stylesheet_url.clone()),
            IconFontLayer::icon_class(instance, scope),
        )
    } else {
        (None, None)
    };

    ResolvedPlugin {
        plugin_type: instance.plugin_type.name.clone(),
        instance_id: instance.id,
        identifier: identify(instance, scope),
        tag: resolve_tag(instance),
        classes: resolve_classes(instance, scope),
        inline_style: styles.to_css(),
        styles,
        template: select_template(instance, scope),
        stylesheet_url,
        icon_class,
    }
}
