// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Cascade plugin engine.

use thiserror::Error;

/// The workspace-level error type.
///
/// Field validation and catalogue lookups have their own narrower error
/// types; they convert into this one only when they cross a process
/// boundary (start-up, CLI, HTTP server).
#[derive(Debug, Error)]
pub enum CascadeError {
    /// Configuration errors (invalid TOML, unknown keys, failed validation).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin type or field schema could not be registered.
    #[error("schema error: {0}")]
    Schema(String),

    /// The icon font catalogue could not be loaded.
    #[error("catalogue error: {message}")]
    Catalogue {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A glossary value was rejected by its field schema.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested plugin type is not in the registry.
    #[error("plugin type not found: {name}")]
    PluginTypeNotFound { name: String },

    /// The HTTP gateway failed to bind or serve.
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
