// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks serde attributes cannot express.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::CascadeConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first.
pub fn validate_config(config: &CascadeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::validation("server.host must not be empty"));
    } else if host.parse::<std::net::IpAddr>().is_err()
        && !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        errors.push(ConfigError::validation(format!(
            "server.host `{host}` is not a valid IP address or hostname"
        )));
    }

    if config.server.port == 0 {
        errors.push(ConfigError::validation("server.port must not be 0"));
    }

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "logging.level `{}` must be one of: {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        )));
    }

    let mut font_ids = HashSet::new();
    for (index, font) in config.catalogue.fonts.iter().enumerate() {
        if !font_ids.insert(font.id) {
            errors.push(ConfigError::validation(format!(
                "catalogue.fonts[{index}]: duplicate icon font id {}",
                font.id
            )));
        }
        if font.identifier.trim().is_empty() {
            errors.push(ConfigError::validation(format!(
                "catalogue.fonts[{index}].identifier must not be empty"
            )));
        }
        if font.config_path.as_os_str().is_empty() {
            errors.push(ConfigError::validation(format!(
                "catalogue.fonts[{index}].config_path must not be empty"
            )));
        }
    }

    for (plugin_type, entries) in &config.templates.extra_render_templates {
        let mut seen = HashSet::new();
        for entry in entries {
            if entry.path.trim().is_empty() || entry.label.trim().is_empty() {
                errors.push(ConfigError::validation(format!(
                    "templates.extra_render_templates.{plugin_type}: path and label must not be empty"
                )));
            } else if !seen.insert(entry.path.as_str()) {
                errors.push(ConfigError::validation(format!(
                    "templates.extra_render_templates.{plugin_type}: `{}` is listed twice",
                    entry.path
                )));
            }
        }
    }

    if config
        .plugins
        .with_extra_fields
        .iter()
        .any(|name| name.trim().is_empty())
    {
        errors.push(ConfigError::validation(
            "plugins.with_extra_fields must not contain empty names",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
