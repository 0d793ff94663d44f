// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Cascade plugin engine.
//!
//! Strict TOML parsing (`deny_unknown_fields`), a system/user/local file
//! hierarchy with `CASCADE_*` environment overrides, and miette diagnostics
//! with typo suggestions.
//!
//! ```no_run
//! use cascade_config::load_and_validate;
//!
//! match load_and_validate() {
//!     Ok(config) => println!("listening on {}:{}", config.server.host, config.server.port),
//!     Err(errors) => cascade_config::render_errors(&errors),
//! }
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    CascadeConfig, CatalogueConfig, FontEntry, LoggingConfig, PluginsConfig, ServerConfig,
    TemplateEntry, TemplatesConfig,
};

/// Load from the file hierarchy and environment, then validate.
pub fn load_and_validate() -> Result<CascadeConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load from one TOML string, then validate.
pub fn load_and_validate_str(toml_content: &str) -> Result<CascadeConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load from an explicit file (plus environment), then validate.
pub fn load_and_validate_path(path: &Path) -> Result<CascadeConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

fn finish(
    loaded: Result<CascadeConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<CascadeConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Read every config file that exists, for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|dir| dir.join(loader::LOCAL_CONFIG))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG.into());

    [Some(local), loader::user_config_path(), Some(loader::SYSTEM_CONFIG.into())]
        .into_iter()
        .flatten()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
