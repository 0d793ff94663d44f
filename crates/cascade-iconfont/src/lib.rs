// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Icon font catalogue for Cascade.
//!
//! Icon fonts are external entities: plugin glossaries only store their
//! id. This crate models the catalogue record, groups its glyphs into
//! families for editing UIs, and defines the [`IconFontStore`] seam that
//! render scopes and the HTTP gateway read from.

pub mod error;
pub mod font;
pub mod store;

pub use error::CatalogueError;
pub use font::{DEFAULT_CSS_PREFIX, DEFAULT_FAMILY, IconFamily, IconFont};
pub use store::{IconFontSource, IconFontStore, InMemoryIconFontStore};
