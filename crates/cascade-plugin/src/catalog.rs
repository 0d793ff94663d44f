// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalogue.
//!
//! Returns the manifests of the plugin types compiled into Cascade,
//! adjusted by host configuration: which types carry the extra fields and
//! which custom templates the snippet type may use.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::layers::{FontIconLayer, HeadingLayer, IconFontLayer, SnippetLayer, WrapperLayer};
use crate::manifest::PluginTypeManifest;
use crate::registry::{PluginRegistry, RegistryError};
use crate::template::{TemplateChoice, TemplatePolicy};

pub const SIMPLE_WRAPPER: &str = "SimpleWrapperPlugin";
pub const HORIZONTAL_RULE: &str = "HorizontalRulePlugin";
pub const HEADING: &str = "HeadingPlugin";
pub const CUSTOM_SNIPPET: &str = "CustomSnippetPlugin";
pub const FONT_ICON: &str = "FontIconPlugin";
pub const TEXT_ICON: &str = "TextIconPlugin";

const BUILTIN_TYPES: &[&str] = &[
    SIMPLE_WRAPPER,
    HORIZONTAL_RULE,
    HEADING,
    CUSTOM_SNIPPET,
    FONT_ICON,
    TEXT_ICON,
];

/// Host settings that shape the built-in catalogue.
#[derive(Debug, Clone, Default)]
pub struct CatalogSettings {
    /// Custom templates per plugin type name.
    pub extra_render_templates: BTreeMap<String, Vec<TemplateChoice>>,
    /// Plugin types that carry the extra class/style fields.
    pub with_extra_fields: Vec<String>,
}

impl CatalogSettings {
    fn extra_fields_for(&self, name: &str) -> bool {
        self.with_extra_fields.iter().any(|n| n == name)
    }

    fn templates_for(&self, name: &str) -> Vec<TemplateChoice> {
        self.extra_render_templates
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// Configured names that match no built-in plugin type.
    pub fn unknown_type_names(&self) -> Vec<&str> {
        self.with_extra_fields
            .iter()
            .chain(self.extra_render_templates.keys())
            .map(String::as_str)
            .filter(|name| !BUILTIN_TYPES.contains(name))
            .collect()
    }
}

/// Manifests for all built-in plugin types.
///
/// The snippet type is only included when at least one custom template is
/// configured for it.
pub fn builtin_catalog(settings: &CatalogSettings) -> Vec<PluginTypeManifest> {
    let mut manifests = vec![
        PluginTypeManifest::new(
            SIMPLE_WRAPPER,
            "Simple Wrapper",
            TemplatePolicy::NakedOrWrapped {
                naked: "cascade/generic/naked.html".into(),
                wrapped: "cascade/generic/wrapper.html".into(),
            },
        )
        .layer(WrapperLayer)
        .allow_children(),
        PluginTypeManifest::new(
            HORIZONTAL_RULE,
            "Horizontal Rule",
            TemplatePolicy::fixed("cascade/generic/single.html"),
        )
        .default_tag("hr"),
        PluginTypeManifest::new(
            HEADING,
            "Heading",
            TemplatePolicy::fixed("cascade/generic/heading.html"),
        )
        .layer(HeadingLayer)
        .default_tag("h1"),
        PluginTypeManifest::new(
            FONT_ICON,
            "Font Icon",
            TemplatePolicy::fixed("cascade/generic/fonticon.html"),
        )
        .layer(FontIconLayer)
        .layer(IconFontLayer)
        .default_tag("span"),
        PluginTypeManifest::new(
            TEXT_ICON,
            "Icon",
            TemplatePolicy::fixed("cascade/generic/texticon.html"),
        )
        .layer(IconFontLayer)
        .default_tag("i")
        .parent_classes(["TextPlugin"])
        .text_enabled(),
    ];

    let snippet_templates = settings.templates_for(CUSTOM_SNIPPET);
    if snippet_templates.is_empty() {
        debug!("no custom snippet templates configured, skipping {CUSTOM_SNIPPET}");
    } else {
        manifests.push(
            PluginTypeManifest::new(
                CUSTOM_SNIPPET,
                "Custom Snippet",
                TemplatePolicy::custom(snippet_templates.clone()),
            )
            .layer(SnippetLayer::new(snippet_templates))
            .allow_children(),
        );
    }

    manifests
        .into_iter()
        .map(|manifest| {
            let extra = settings.extra_fields_for(&manifest.name);
            manifest.with_extra_fields(extra)
        })
        .collect()
}

/// Build the registry from the built-in catalogue.
pub fn build_registry(settings: &CatalogSettings) -> Result<PluginRegistry, RegistryError> {
    for name in settings.unknown_type_names() {
        warn!(plugin_type = name, "unknown plugin type in settings, ignoring");
    }
    let mut registry = PluginRegistry::new();
    for manifest in builtin_catalog(settings) {
        registry.register(manifest)?;
    }
    info!(plugin_types = registry.len(), "plugin registry built");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn snippet_requires_templates() {
        let registry = build_registry(&CatalogSettings::default()).unwrap();
        assert_eq!(registry.len(), 5);
        assert!(registry.get(CUSTOM_SNIPPET).is_none());

        let mut settings = CatalogSettings::default();
        settings.extra_render_templates.insert(
            CUSTOM_SNIPPET.to_string(),
            vec![TemplateChoice::new("myproject/hero.html", "Hero")],
        );
        let registry = build_registry(&settings).unwrap();
        assert_eq!(registry.len(), 6);
        let snippet = registry.get(CUSTOM_SNIPPET).unwrap();
        let field = snippet.schema.field("render_template").unwrap();
        assert_eq!(field.choice_label("myproject/hero.html"), Some("Hero"));
    }

    #[test]
    fn extra_fields_follow_settings() {
        let settings = CatalogSettings {
            with_extra_fields: vec![HEADING.to_string()],
            ..Default::default()
        };
        let registry = build_registry(&settings).unwrap();

        let heading = registry.get(HEADING).unwrap();
        assert_eq!(heading.ancestry_names(), ["heading", "extra_fields", "base"]);
        assert!(heading.schema.field("extra_css_classes").is_some());

        let rule = registry.get(HORIZONTAL_RULE).unwrap();
        assert_eq!(rule.ancestry_names(), ["base"]);
    }

    #[test]
    fn icon_types_share_the_icon_font_capability() {
        let registry = build_registry(&CatalogSettings::default()).unwrap();
        let font_icon = registry.get(FONT_ICON).unwrap();
        let text_icon = registry.get(TEXT_ICON).unwrap();

        assert!(font_icon.uses_icon_font());
        assert!(text_icon.uses_icon_font());
        assert!(!registry.get(HEADING).unwrap().uses_icon_font());

        assert_eq!(text_icon.ancestry_names(), ["icon_font", "base"]);
        assert!(text_icon.text_enabled);
        assert!(!text_icon.require_parent);
        assert_eq!(text_icon.parent_classes, ["TextPlugin"]);
        assert_eq!(
            text_icon.schema.names().collect::<Vec<_>>(),
            ["icon_font", "content"]
        );
    }

    #[test]
    fn default_tags() {
        let registry = build_registry(&CatalogSettings::default()).unwrap();
        let tag = |name: &str| registry.get(name).unwrap().default_tag.clone();
        assert_eq!(tag(FONT_ICON), "span");
        assert_eq!(tag(HORIZONTAL_RULE), "hr");
        assert_eq!(tag(SIMPLE_WRAPPER), "div");
        assert_eq!(tag(TEXT_ICON), "i");
    }

    #[test]
    fn builtin_names_are_known() {
        let settings = CatalogSettings {
            with_extra_fields: vec![HEADING.to_string(), SIMPLE_WRAPPER.to_string()],
            extra_render_templates: BTreeMap::from([(CUSTOM_SNIPPET.to_string(), Vec::new())]),
        };
        assert!(settings.unknown_type_names().is_empty());
    }

    #[traced_test]
    #[test]
    fn unknown_names_are_reported() {
        let settings = CatalogSettings {
            with_extra_fields: vec!["HeadingPlugn".to_string(), HEADING.to_string()],
            extra_render_templates: BTreeMap::from([(
                "CustomSnipetPlugin".to_string(),
                vec![TemplateChoice::new("myproject/hero.html", "Hero")],
            )]),
        };
        assert_eq!(
            settings.unknown_type_names(),
            ["HeadingPlugn", "CustomSnipetPlugin"]
        );

        let registry = build_registry(&settings).unwrap();
        assert!(logs_contain("unknown plugin type"));
        assert!(logs_contain("HeadingPlugn"));
        assert!(logs_contain("CustomSnipetPlugin"));
        assert!(registry.get(CUSTOM_SNIPPET).is_none());
    }
}
