// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock icon font stores for deterministic testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cascade_core::IconFontId;
use cascade_iconfont::{CatalogueError, IconFont, IconFontStore, InMemoryIconFontStore};

/// An in-memory store that counts every `find_by_id` call.
///
/// Used to assert that render scopes hit the catalogue at most once per
/// instance.
#[derive(Debug, Default)]
pub struct CountingIconFontStore {
    inner: InMemoryIconFontStore,
    lookups: AtomicUsize,
}

impl CountingIconFontStore {
    pub fn new(fonts: impl IntoIterator<Item = IconFont>) -> Self {
        let mut inner = InMemoryIconFontStore::new();
        for font in fonts {
            // Fixtures never repeat ids; a duplicate keeps the first entry.
            let _ = inner.insert(font);
        }
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of `find_by_id` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl IconFontStore for CountingIconFontStore {
    fn find_by_id(&self, id: IconFontId) -> Result<Arc<IconFont>, CatalogueError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id)
    }

    fn list(&self) -> Vec<Arc<IconFont>> {
        self.inner.list()
    }
}

/// A store whose every lookup fails with [`CatalogueError::Unavailable`].
#[derive(Debug, Default)]
pub struct FailingIconFontStore {
    lookups: AtomicUsize,
}

impl FailingIconFontStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl IconFontStore for FailingIconFontStore {
    fn find_by_id(&self, _id: IconFontId) -> Result<Arc<IconFont>, CatalogueError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Err(CatalogueError::Unavailable("mock store is offline".into()))
    }

    fn list(&self) -> Vec<Arc<IconFont>> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_font;

    #[test]
    fn counts_hits_and_misses() {
        let store = CountingIconFontStore::new([sample_font(3)]);
        assert!(store.find_by_id(IconFontId(3)).is_ok());
        assert!(store.find_by_id(IconFontId(4)).is_err());
        assert_eq!(store.lookups(), 2);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn failing_store_always_fails() {
        let store = FailingIconFontStore::new();
        let err = store.find_by_id(IconFontId(1)).unwrap_err();
        assert!(matches!(err, CatalogueError::Unavailable(_)));
        assert_eq!(store.lookups(), 1);
        assert!(store.list().is_empty());
    }
}
