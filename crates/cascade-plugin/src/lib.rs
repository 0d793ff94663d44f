// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin-type registry, built-in catalogue and render-time resolution.
//!
//! A plugin type is an explicit ancestry of [`PluginLayer`]s ending with
//! the base layer. At render time [`identify`], [`resolve_classes`],
//! [`resolve_styles`], [`resolve_tag`] and [`select_template`] fold that
//! ancestry for one [`PluginInstance`] inside a per-request
//! [`RenderScope`], which also caches icon font lookups.

pub mod catalog;
pub mod instance;
pub mod layer;
pub mod layers;
pub mod manifest;
pub mod markup;
pub mod plugin_type;
pub mod registry;
pub mod resolve;
pub mod scope;
pub mod styles;
pub mod template;

pub use catalog::{builtin_catalog, build_registry, CatalogSettings};
pub use instance::PluginInstance;
pub use layer::PluginLayer;
pub use manifest::PluginTypeManifest;
pub use plugin_type::PluginType;
pub use registry::{PluginRegistry, RegistryError};
pub use resolve::{identify, resolve, resolve_classes, resolve_styles, resolve_tag, ResolvedPlugin};
pub use scope::RenderScope;
pub use styles::InlineStyles;
pub use template::{
    select_template, StaticTemplates, TemplateChoice, TemplateDirs, TemplatePolicy, TemplateRef,
    TemplateSource, TrustAllowList,
};
