// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-request render scope and its icon font cache.
//!
//! A [`RenderScope`] lives for one render pass. The first time a layer
//! asks for an instance's icon font the scope reads the `icon_font`
//! reference from the glossary and queries the catalogue store. The
//! outcome, absence included, is remembered for the rest of the scope, so
//! the store sees at most one lookup per instance.
//!
//! The cache uses a `RefCell`, which makes the scope `!Sync`: it can be
//! moved to another thread but never shared between threads.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use cascade_core::{IconFontId, InstanceId};
use cascade_iconfont::{CatalogueError, IconFont, IconFontStore};
use tracing::{debug, warn};

use crate::instance::PluginInstance;
use crate::template::TemplateSource;

/// Glossary field holding the icon font reference.
pub const ICON_FONT_FIELD: &str = "icon_font";

pub struct RenderScope<'s> {
    store: &'s dyn IconFontStore,
    templates: &'s dyn TemplateSource,
    icon_fonts: RefCell<HashMap<InstanceId, Option<Arc<IconFont>>>>,
}

impl<'s> RenderScope<'s> {
    pub fn new(store: &'s dyn IconFontStore, templates: &'s dyn TemplateSource) -> Self {
        Self {
            store,
            templates,
            icon_fonts: RefCell::new(HashMap::new()),
        }
    }

    pub fn templates(&self) -> &'s dyn TemplateSource {
        self.templates
    }

    /// The icon font referenced by `instance`, or `None` when the
    /// reference is missing, malformed, unknown or the store failed.
    pub fn icon_font(&self, instance: &PluginInstance) -> Option<Arc<IconFont>> {
        let cached = self.icon_fonts.borrow().get(&instance.id).cloned();
        if let Some(hit) = cached {
            debug!(instance = %instance.id, found = hit.is_some(), "icon font cache hit");
            return hit;
        }

        let resolved = self.lookup(instance);
        self.icon_fonts
            .borrow_mut()
            .insert(instance.id, resolved.clone());
        resolved
    }

    fn lookup(&self, instance: &PluginInstance) -> Option<Arc<IconFont>> {
        let raw = instance.glossary.value(ICON_FONT_FIELD);
        if raw.is_null() {
            return None;
        }
        let Some(id) = IconFontId::from_value(raw) else {
            debug!(instance = %instance.id, reference = %raw, "malformed icon font reference");
            return None;
        };

        match self.store.find_by_id(id) {
            Ok(font) => {
                debug!(instance = %instance.id, font = %id, "icon font resolved");
                Some(font)
            }
            Err(CatalogueError::NotFound { .. }) => {
                debug!(instance = %instance.id, font = %id, "icon font not in catalogue");
                None
            }
            Err(e) => {
                warn!(instance = %instance.id, font = %id, error = %e, "icon font lookup failed");
                None
            }
        }
    }

    /// Forget every memoized lookup.
    pub fn clear(&self) {
        self.icon_fonts.borrow_mut().clear();
    }

    /// Number of instances with a memoized outcome.
    pub fn cached(&self) -> usize {
        self.icon_fonts.borrow().len()
    }
}

impl fmt::Debug for RenderScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderScope")
            .field("cached", &self.cached())
            .finish_non_exhaustive()
    }
}
