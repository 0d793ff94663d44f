// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Cascade plugin engine.
//!
//! This crate provides the error taxonomy and identifier types used by the
//! glossary, icon font, plugin and gateway crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CascadeError;
pub use types::{reference_id, FieldKind, IconFontId, InstanceId, InvalidIconFontId};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cascade_error_has_all_variants() {
        let _config = CascadeError::Config("test".into());
        let _schema = CascadeError::Schema("test".into());
        let _catalogue = CascadeError::Catalogue {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _validation = CascadeError::Validation("test".into());
        let _not_found = CascadeError::PluginTypeNotFound {
            name: "test".into(),
        };
        let _gateway = CascadeError::Gateway {
            message: "test".into(),
            source: None,
        };
        let _internal = CascadeError::Internal("test".into());
    }

    #[test]
    fn field_kind_round_trips_through_strings() {
        use std::str::FromStr;

        let variants = [
            FieldKind::Text,
            FieldKind::Choice,
            FieldKind::Color,
            FieldKind::Size,
            FieldKind::Border,
            FieldKind::ToggledColor,
            FieldKind::Reference,
            FieldKind::ClassList,
            FieldKind::StyleMap,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed = FieldKind::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
        assert_eq!(FieldKind::ToggledColor.to_string(), "toggled_color");
    }

    #[test]
    fn icon_font_id_from_value() {
        assert_eq!(IconFontId::from_value(&json!(7)), Some(IconFontId(7)));
        assert_eq!(IconFontId::from_value(&json!("12")), Some(IconFontId(12)));
        assert_eq!(IconFontId::from_value(&json!("")), None);
        assert_eq!(IconFontId::from_value(&json!("7a")), None);
        assert_eq!(IconFontId::from_value(&json!(-3)), None);
        assert_eq!(IconFontId::from_value(&json!(1.5)), None);
        assert_eq!(IconFontId::from_value(&json!(null)), None);
    }

    #[test]
    fn icon_font_id_from_str_rejects_sign() {
        assert_eq!("42".parse::<IconFontId>().ok(), Some(IconFontId(42)));
        assert!("+42".parse::<IconFontId>().is_err());
        assert!("abc".parse::<IconFontId>().is_err());
    }

    proptest::proptest! {
        #[test]
        fn digit_strings_and_numbers_agree(n in 0u64..1_000_000_000) {
            proptest::prop_assert_eq!(
                reference_id(&json!(n)),
                reference_id(&json!(n.to_string()))
            );
        }
    }
}
