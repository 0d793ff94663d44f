// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Icon font catalogue stores.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cascade_core::IconFontId;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::CatalogueError;
use crate::font::IconFont;

/// Read access to the icon font catalogue.
///
/// Implementations are shared read-only between render scopes and HTTP
/// handlers, so they must be `Send + Sync`.
pub trait IconFontStore: Send + Sync {
    /// Look up one font. Unknown ids yield [`CatalogueError::NotFound`].
    fn find_by_id(&self, id: IconFontId) -> Result<Arc<IconFont>, CatalogueError>;

    /// Every font in the catalogue, ordered by id.
    fn list(&self) -> Vec<Arc<IconFont>>;
}

/// Where to load one catalogue entry from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFontSource {
    pub id: IconFontId,
    pub identifier: String,
    pub config_path: PathBuf,
    pub stylesheet_url: Option<String>,
}

/// A catalogue held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryIconFontStore {
    fonts: BTreeMap<IconFontId, Arc<IconFont>>,
}

impl InMemoryIconFontStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, font: IconFont) -> Result<(), CatalogueError> {
        let id = font.id;
        if self.fonts.contains_key(&id) {
            return Err(CatalogueError::DuplicateId { id });
        }
        self.fonts.insert(id, Arc::new(font));
        Ok(())
    }

    pub fn from_fonts(fonts: impl IntoIterator<Item = IconFont>) -> Result<Self, CatalogueError> {
        let mut store = Self::new();
        for font in fonts {
            store.insert(font)?;
        }
        Ok(store)
    }

    /// Build a catalogue by reading each source's JSON config file.
    pub fn load(sources: &[IconFontSource]) -> Result<Self, CatalogueError> {
        let mut store = Self::new();
        for source in sources {
            let config_data = read_config(&source.config_path)?;
            let mut font = IconFont::new(source.id, source.identifier.clone(), config_data);
            font.stylesheet_url = source.stylesheet_url.clone();
            debug!(id = %source.id, path = %source.config_path.display(), "loaded icon font");
            store.insert(font)?;
        }
        info!(fonts = store.len(), "icon font catalogue loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

fn read_config(path: &Path) -> Result<serde_json::Map<String, Value>, CatalogueError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| CatalogueError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CatalogueError::InvalidConfig {
            path: path.to_path_buf(),
        }),
    }
}

impl IconFontStore for InMemoryIconFontStore {
    fn find_by_id(&self, id: IconFontId) -> Result<Arc<IconFont>, CatalogueError> {
        self.fonts
            .get(&id)
            .cloned()
            .ok_or(CatalogueError::NotFound { id })
    }

    fn list(&self) -> Vec<Arc<IconFont>> {
        self.fonts.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};
    use std::io::Write;

    fn font(id: u64, name: &str) -> IconFont {
        IconFont::new(IconFontId(id), name, Map::new())
    }

    fn source(id: u64, path: &Path) -> IconFontSource {
        IconFontSource {
            id: IconFontId(id),
            identifier: format!("font {id}"),
            config_path: path.to_path_buf(),
            stylesheet_url: Some("/static/fontello.css".into()),
        }
    }

    #[test]
    fn find_and_list() {
        let store = InMemoryIconFontStore::from_fonts([font(2, "b"), font(1, "a")]).unwrap();
        assert_eq!(store.find_by_id(IconFontId(1)).unwrap().identifier, "a");
        let ids: Vec<u64> = store.list().iter().map(|f| f.id.0).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = InMemoryIconFontStore::new();
        let err = store.find_by_id(IconFontId(9)).unwrap_err();
        assert!(matches!(err, CatalogueError::NotFound { id } if id == IconFontId(9)));
        assert_eq!(err.to_string(), "IconFont with id=9 does not exist");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = InMemoryIconFontStore::from_fonts([font(1, "a"), font(1, "b")]).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateId { .. }));
    }

    #[test]
    fn find_returns_shared_record() {
        let store = InMemoryIconFontStore::from_fonts([font(1, "a")]).unwrap();
        let first = store.find_by_id(IconFontId(1)).unwrap();
        let second = store.find_by_id(IconFontId(1)).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn load_reads_config_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json!({"css_prefix_text": "fa-", "glyphs": []})).unwrap();

        let store = InMemoryIconFontStore::load(&[source(4, file.path())]).unwrap();
        let font = store.find_by_id(IconFontId(4)).unwrap();
        assert_eq!(font.css_prefix(), "fa-");
        assert_eq!(font.identifier, "font 4");
        assert_eq!(font.stylesheet_url.as_deref(), Some("/static/fontello.css"));
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = InMemoryIconFontStore::load(&[source(1, &missing)]).unwrap_err();
        assert!(matches!(err, CatalogueError::Io { .. }));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let err = InMemoryIconFontStore::load(&[source(1, &broken)]).unwrap_err();
        assert!(matches!(err, CatalogueError::Parse { .. }));

        let list = dir.path().join("list.json");
        std::fs::write(&list, "[]").unwrap();
        let err = InMemoryIconFontStore::load(&[source(1, &list)]).unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidConfig { .. }));
    }
}
