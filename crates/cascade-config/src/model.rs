// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Cascade.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of being silently ignored.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Cascade configuration.
///
/// Every section is optional and defaults to a working local setup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CascadeConfig {
    /// HTTP gateway bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Icon fonts available to icon plugins.
    #[serde(default)]
    pub catalogue: CatalogueConfig,

    /// Template lookup and custom template allow-lists.
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Per-plugin-type feature switches.
    #[serde(default)]
    pub plugins: PluginsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `127.0.0.1` or `0.0.0.0`.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogueConfig {
    /// `[[catalogue.fonts]]` entries.
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
}

/// One icon font exported by the icon font tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FontEntry {
    pub id: u64,
    /// Display name shown in editing UIs and identifiers.
    pub identifier: String,
    /// Path of the exported `config.json`.
    pub config_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Template roots. When empty, allow-listed templates are trusted
    /// without checking the filesystem.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,

    /// Custom templates per plugin type name, e.g.
    /// `CustomSnippetPlugin = [{ path = "...", label = "..." }]`.
    #[serde(default)]
    pub extra_render_templates: BTreeMap<String, Vec<TemplateEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateEntry {
    pub path: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Plugin types that get the extra CSS class and inline style fields.
    #[serde(default)]
    pub with_extra_fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_local_setup() {
        let config = CascadeConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(config.catalogue.fonts.is_empty());
        assert!(config.templates.dirs.is_empty());
        assert!(config.templates.extra_render_templates.is_empty());
        assert!(config.plugins.with_extra_fields.is_empty());
    }

    #[test]
    fn font_entry_rejects_unknown_keys() {
        let result: Result<FontEntry, _> = toml::from_str(
            r#"
id = 1
identifier = "Fontello"
config_path = "fonts/config.json"
stylesheet = "/static/x.css"
"#,
        );
        assert!(result.is_err());
    }
}
