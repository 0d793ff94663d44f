// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use cascade_core::{CascadeError, IconFontId};
use thiserror::Error;

/// Errors raised by icon font catalogue stores.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("IconFont with id={id} does not exist")]
    NotFound { id: IconFontId },

    #[error("icon font id {id} is registered twice")]
    DuplicateId { id: IconFontId },

    #[error("failed to read icon font config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse icon font config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config file parsed but is not a JSON object.
    #[error("icon font config {} must be a JSON object", path.display())]
    InvalidConfig { path: PathBuf },

    /// The backing store could not answer.
    #[error("icon font catalogue unavailable: {0}")]
    Unavailable(String),
}

impl From<CatalogueError> for CascadeError {
    fn from(err: CatalogueError) -> Self {
        CascadeError::Catalogue {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
