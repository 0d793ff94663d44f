// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of plugin types.
//!
//! Built once at start-up from the plugin-type manifests and shared
//! read-only afterwards (`Arc<PluginRegistry>` is `Send + Sync`).

use std::collections::HashMap;
use std::sync::Arc;

use cascade_core::{CascadeError, InstanceId};
use cascade_glossary::SchemaError;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::instance::PluginInstance;
use crate::manifest::PluginTypeManifest;
use crate::plugin_type::PluginType;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("plugin type `{name}` is registered twice")]
    DuplicateType { name: String },

    #[error("unknown plugin type `{name}`")]
    UnknownType { name: String },

    #[error("plugin type `{name}`: {source}")]
    Schema {
        name: String,
        #[source]
        source: SchemaError,
    },
}

impl From<RegistryError> for CascadeError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownType { name } => CascadeError::PluginTypeNotFound { name },
            other => CascadeError::Schema(other.to_string()),
        }
    }
}

/// Plugin types keyed by name.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    entries: HashMap<String, Arc<PluginType>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manifest and register the resulting plugin type.
    pub fn register(&mut self, manifest: PluginTypeManifest) -> Result<(), RegistryError> {
        let name = manifest.name.clone();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::DuplicateType { name });
        }
        let plugin_type = manifest
            .build()
            .map_err(|source| RegistryError::Schema {
                name: name.clone(),
                source,
            })?;
        self.entries.insert(name, Arc::new(plugin_type));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<PluginType>> {
        self.entries.get(name)
    }

    /// All plugin types, sorted by name.
    pub fn list_all(&self) -> Vec<&Arc<PluginType>> {
        let mut entries: Vec<&Arc<PluginType>> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// A fresh instance of the named plugin type.
    pub fn instantiate(&self, name: &str, id: InstanceId) -> Result<PluginInstance, RegistryError> {
        let plugin_type = self.lookup(name)?;
        Ok(PluginInstance::new(Arc::clone(plugin_type), id))
    }

    /// Rebuild a persisted instance without validating its glossary.
    pub fn restore(
        &self,
        name: &str,
        id: InstanceId,
        values: Map<String, Value>,
    ) -> Result<PluginInstance, RegistryError> {
        let plugin_type = self.lookup(name)?;
        Ok(PluginInstance::restore(Arc::clone(plugin_type), id, values))
    }

    fn lookup(&self, name: &str) -> Result<&Arc<PluginType>, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
