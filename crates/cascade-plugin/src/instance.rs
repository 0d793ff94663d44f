// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use cascade_core::InstanceId;
use cascade_glossary::Glossary;
use serde_json::{Map, Value};

use crate::plugin_type::PluginType;

/// One placed occurrence of a plugin type.
///
/// Mutated only through its glossary.
#[derive(Debug, Clone)]
pub struct PluginInstance {
    pub id: InstanceId,
    /// Position among its siblings, used for the base identifier.
    pub position: Option<u32>,
    pub plugin_type: Arc<PluginType>,
    pub glossary: Glossary,
}

impl PluginInstance {
    /// A fresh instance whose fields all read as their defaults.
    pub fn new(plugin_type: Arc<PluginType>, id: InstanceId) -> Self {
        let glossary = Glossary::new(Arc::clone(&plugin_type.schema));
        Self {
            id,
            position: None,
            plugin_type,
            glossary,
        }
    }

    /// Rebuild an instance from a persisted glossary blob.
    pub fn restore(plugin_type: Arc<PluginType>, id: InstanceId, values: Map<String, Value>) -> Self {
        let glossary = Glossary::restore(Arc::clone(&plugin_type.schema), values);
        Self {
            id,
            position: None,
            plugin_type,
            glossary,
        }
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.plugin_type.name
    }

    /// The glossary value of a choice field, only when it is one of the
    /// field's declared non-empty choices.
    ///
    /// Restored glossaries skip validation, so layers read choices through
    /// this instead of `get_str`.
    pub fn choice(&self, field: &str) -> Option<&str> {
        let value = self.glossary.get_str(field).filter(|v| !v.is_empty())?;
        self.plugin_type
            .schema
            .field(field)?
            .choice_label(value)
            .map(|_| value)
    }

    /// The glossary value of `field` after passing it through the field's
    /// validator again; `None` when absent or rejected.
    pub fn checked(&self, field: &str) -> Option<Value> {
        let raw = self.glossary.value(field);
        self.plugin_type
            .schema
            .field(field)?
            .validate(raw)
            .ok()
            .filter(|v| !v.is_null())
    }
}
