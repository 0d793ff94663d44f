// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Icon font fixtures.

use std::path::PathBuf;

use cascade_core::IconFontId;
use cascade_iconfont::IconFont;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

/// A small icon font tool export: two families plus one glyph without a
/// `src`.
pub fn fontello_config() -> Value {
    json!({
        "name": "fontello",
        "css_prefix_text": "icon-",
        "css_use_suffix": false,
        "hinting": true,
        "units_per_em": 1000,
        "ascent": 850,
        "glyphs": [
            {"uid": "9dd9e835aebe1060ba7190ad2b2ed951", "css": "search", "code": 59392, "src": "fontawesome"},
            {"uid": "d73eceadda1f594cec0536087539afbf", "css": "heart", "code": 59393, "src": "fontawesome"},
            {"uid": "474656633f79ea2f1dad59ff63f6bf07", "css": "star", "code": 59394, "src": "fontawesome"},
            {"uid": "cb13afd4722a849d48056540bb74c47e", "css": "cloud", "code": 59395, "src": "entypo"},
            {"uid": "0f99ab40ab0b4d64a74f2d0deeb03e42", "css": "logo", "code": 59396}
        ]
    })
}

fn config_map() -> Map<String, Value> {
    match fontello_config() {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// The fixture font registered under `id` as "Fontello".
pub fn sample_font(id: u64) -> IconFont {
    IconFont::new(IconFontId(id), "Fontello", config_map())
        .with_stylesheet_url(format!("/static/icon-fonts/{id}/css/fontello.css"))
}

/// Write [`fontello_config`] into a fresh temp dir.
///
/// Returns the dir guard (keep it alive) and the config file path.
pub fn write_fontello_config() -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");
    std::fs::write(&path, fontello_config().to_string())?;
    Ok((dir, path))
}
