// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Merge order, later wins:
//! 1. Compiled defaults
//! 2. `/etc/cascade/cascade.toml`
//! 3. `<config dir>/cascade/cascade.toml`
//! 4. `./cascade.toml`
//! 5. `CASCADE_*` environment variables

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CascadeConfig;

pub const SYSTEM_CONFIG: &str = "/etc/cascade/cascade.toml";
pub const LOCAL_CONFIG: &str = "cascade.toml";

/// Per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cascade").join("cascade.toml"))
}

/// The full file hierarchy plus environment overrides.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(CascadeConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment.merge(Toml::file(LOCAL_CONFIG)).merge(env_provider())
}

pub fn load_config() -> Result<CascadeConfig, figment::Error> {
    build_figment().extract()
}

/// Defaults plus one TOML string; no files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<CascadeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CascadeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Defaults plus one explicit file, with environment overrides.
pub fn load_config_from_path(path: &Path) -> Result<CascadeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CascadeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Map `CASCADE_<SECTION>_<KEY>` to `<section>.<key>`.
///
/// Uses an explicit section list rather than splitting on `_`, because
/// key names themselves contain underscores: `CASCADE_PLUGINS_WITH_EXTRA_FIELDS`
/// must become `plugins.with_extra_fields`.
fn env_provider() -> Env {
    const SECTIONS: &[&str] = &["server", "logging", "catalogue", "templates", "plugins"];

    Env::prefixed("CASCADE_").map(|key| {
        let key = key.as_str().to_ascii_lowercase();
        SECTIONS
            .iter()
            .find_map(|section| {
                key.strip_prefix(*section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| format!("{section}.{rest}"))
            })
            .unwrap_or(key)
            .into()
    })
}
