// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template selection.
//!
//! Each plugin type carries a [`TemplatePolicy`]. Selection never fails:
//! a custom template that is not allow-listed or not registered with the
//! host falls back to the policy's placeholder and logs a warning.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::instance::PluginInstance;
use crate::scope::RenderScope;

/// Template rendered when a custom template cannot be used.
pub const PLACEHOLDER_TEMPLATE: &str = "cascade/generic/does_not_exist.html";

/// Glossary field naming a custom template.
pub const RENDER_TEMPLATE_FIELD: &str = "render_template";

/// Glossary value that selects the naked template.
pub const NAKED_TAG: &str = "naked";

/// Path of the template the external renderer should load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TemplateRef(pub String);

impl TemplateRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_TEMPLATE
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One host-provided template a plugin type may be rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateChoice {
    pub path: String,
    pub label: String,
}

impl TemplateChoice {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// How a plugin type picks its template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum TemplatePolicy {
    /// Always the same template.
    Fixed { path: String },
    /// `naked` when the `tag_type` field is `naked`, else `wrapped`.
    NakedOrWrapped { naked: String, wrapped: String },
    /// The `render_template` glossary value, if allow-listed and known to
    /// the host; else `fallback`.
    Custom {
        choices: Vec<TemplateChoice>,
        fallback: String,
    },
}

impl TemplatePolicy {
    pub fn fixed(path: impl Into<String>) -> Self {
        TemplatePolicy::Fixed { path: path.into() }
    }

    pub fn custom(choices: Vec<TemplateChoice>) -> Self {
        TemplatePolicy::Custom {
            choices,
            fallback: PLACEHOLDER_TEMPLATE.to_string(),
        }
    }
}

/// The host's registry of loadable templates.
pub trait TemplateSource: Send + Sync {
    fn contains(&self, name: &str) -> bool;
}

/// A fixed set of known template names.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplates(HashSet<String>);

impl StaticTemplates {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }
}

impl TemplateSource for StaticTemplates {
    fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

/// Template roots on disk; a name is known when it exists as a file
/// under any root.
#[derive(Debug, Clone, Default)]
pub struct TemplateDirs(Vec<PathBuf>);

impl TemplateDirs {
    pub fn new(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self(dirs.into_iter().collect())
    }
}

impl TemplateSource for TemplateDirs {
    fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|dir| dir.join(name).is_file())
    }
}

/// Accepts every allow-listed template without checking the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustAllowList;

impl TemplateSource for TrustAllowList {
    fn contains(&self, _name: &str) -> bool {
        true
    }
}

/// Pick the template for `instance`.
pub fn select_template(instance: &PluginInstance, scope: &RenderScope<'_>) -> TemplateRef {
    match &instance.plugin_type.template {
        TemplatePolicy::Fixed { path } => TemplateRef(path.clone()),
        TemplatePolicy::NakedOrWrapped { naked, wrapped } => {
            if instance.glossary.get_str("tag_type") == Some(NAKED_TAG) {
                TemplateRef(naked.clone())
            } else {
                TemplateRef(wrapped.clone())
            }
        }
        TemplatePolicy::Custom { choices, fallback } => {
            let requested = instance.glossary.get_str(RENDER_TEMPLATE_FIELD).unwrap_or_default();
            let listed = choices.iter().any(|c| c.path == requested);
            if listed && scope.templates().contains(requested) {
                return TemplateRef(requested.to_string());
            }
            warn!(
                plugin_type = %instance.type_name(),
                instance = %instance.id,
                template = requested,
                allow_listed = listed,
                fallback = %fallback,
                "custom template unavailable, rendering placeholder"
            );
            TemplateRef(fallback.clone())
        }
    }
}
