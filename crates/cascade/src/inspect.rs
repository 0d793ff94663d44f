// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `cascade resolve`, `cascade validate` and `cascade plugins`.

use std::fmt::Write as _;
use std::path::Path;

use cascade_core::{CascadeError, InstanceId};
use cascade_glossary::ValidationError;
use cascade_plugin::{resolve, PluginInstance, PluginRegistry};
use serde_json::{Map, Value};

use crate::runtime::Runtime;

/// Read a glossary JSON object from disk.
pub fn read_glossary(path: &Path) -> Result<Map<String, Value>, CascadeError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CascadeError::Validation(format!("failed to read glossary {}: {e}", path.display()))
    })?;
    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CascadeError::Validation(format!(
            "glossary {} must be a JSON object",
            path.display()
        ))),
        Err(e) => Err(CascadeError::Validation(format!(
            "failed to parse glossary {}: {e}",
            path.display()
        ))),
    }
}

/// Build an instance and populate it, returning every rejected field.
fn populate(
    registry: &PluginRegistry,
    plugin: &str,
    id: InstanceId,
    glossary: Map<String, Value>,
) -> Result<(PluginInstance, Vec<ValidationError>), CascadeError> {
    let mut instance = registry.instantiate(plugin, id)?;
    let errors = instance.glossary.populate(glossary).err().unwrap_or_default();
    Ok((instance, errors))
}

/// `cascade resolve`: pretty JSON of the resolved instance.
pub fn run_resolve(
    runtime: &Runtime,
    plugin: &str,
    glossary: Option<&Path>,
    id: u64,
    position: Option<u32>,
) -> Result<String, CascadeError> {
    let values = glossary.map(read_glossary).transpose()?.unwrap_or_default();
    let (mut instance, errors) = populate(&runtime.registry, plugin, InstanceId(id), values)?;
    if let Some(first) = errors.into_iter().next() {
        return Err(first.into());
    }
    if let Some(position) = position {
        instance = instance.with_position(position);
    }

    let resolved = resolve(&instance, &runtime.scope());
    serde_json::to_string_pretty(&resolved).map_err(|e| CascadeError::Internal(e.to_string()))
}

/// `cascade validate`: one line per rejected field, empty when valid.
pub fn run_validate(
    runtime: &Runtime,
    plugin: &str,
    glossary: &Path,
) -> Result<Vec<String>, CascadeError> {
    let values = read_glossary(glossary)?;
    let (_, errors) = populate(&runtime.registry, plugin, InstanceId(0), values)?;
    Ok(errors
        .iter()
        .map(|e| format!("{}: {e}", e.field()))
        .collect())
}

/// `cascade plugins`: every type with its ancestry and fields.
pub fn run_plugins(registry: &PluginRegistry) -> String {
    let mut out = String::new();
    for plugin_type in registry.list_all() {
        let _ = writeln!(out, "{} ({})", plugin_type.name, plugin_type.label);
        let _ = writeln!(out, "  layers: {}", plugin_type.ancestry_names().join(" > "));
        let fields: Vec<String> = plugin_type
            .schema
            .fields()
            .map(|field| format!("{}:{}", field.name, field.kind))
            .collect();
        if !fields.is_empty() {
            let _ = writeln!(out, "  fields: {}", fields.join(", "));
        }
    }
    out
}
