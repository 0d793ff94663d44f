// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin layers.

pub mod base;
pub mod extra_fields;
pub mod font_icon;
pub mod heading;
pub mod icon_font;
pub mod snippet;
pub mod wrapper;

pub use base::BaseLayer;
pub use extra_fields::ExtraFieldsLayer;
pub use font_icon::FontIconLayer;
pub use heading::HeadingLayer;
pub use icon_font::IconFontLayer;
pub use snippet::SnippetLayer;
pub use wrapper::WrapperLayer;
