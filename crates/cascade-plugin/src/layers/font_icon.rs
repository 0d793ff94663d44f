// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Appearance of a standalone icon: size, colors, border and alignment.

use cascade_core::FieldKind;
use cascade_glossary::{Border, Choice, FieldSchema, ToggledColor};
use serde_json::Value;

use crate::instance::PluginInstance;
use crate::layer::PluginLayer;
use crate::scope::RenderScope;
use crate::styles::InlineStyles;

const DEFAULT_FONT_SIZE: &str = "1em";
const DEFAULT_COLOR: &str = "#000000";
const RADII: &[&str] = &["1px", "2px", "3px", "5px", "7px", "10px", "15px", "20px"];

#[derive(Debug, Clone, Copy, Default)]
pub struct FontIconLayer;

impl FontIconLayer {
    fn text_align(instance: &PluginInstance) -> Option<&str> {
        instance.choice("text_align")
    }
}

impl PluginLayer for FontIconLayer {
    fn name(&self) -> &str {
        "font_icon"
    }

    fn fields(&self) -> Vec<FieldSchema> {
        let radius_choices = std::iter::once(Choice::new("", "Square"))
            .chain(RADII.iter().map(|r| Choice::new(*r, r.replace("px", " px"))))
            .chain(std::iter::once(Choice::new("50%", "Circle")));

        vec![
            FieldSchema::declare("font_size", FieldKind::Size)
                .with_label("Icon Size")
                .with_units(["px", "em"])
                .with_default(DEFAULT_FONT_SIZE),
            FieldSchema::declare("color", FieldKind::Color).with_label("Icon color"),
            FieldSchema::declare("background_color", FieldKind::ToggledColor)
                .with_label("Background color"),
            FieldSchema::declare("text_align", FieldKind::Choice)
                .with_label("Text Align")
                .with_choices([
                    Choice::new("", "Do not align"),
                    Choice::new("text-left", "Left"),
                    Choice::new("text-center", "Center"),
                    Choice::new("text-right", "Right"),
                ])
                .with_default("")
                .with_help_text("Align the icon inside the parent column."),
            FieldSchema::declare("border", FieldKind::Border).with_label("Set border"),
            FieldSchema::declare("border_radius", FieldKind::Choice)
                .with_label("Border radius")
                .with_choices(radius_choices)
                .with_default(""),
        ]
    }

    fn css_classes(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        mut classes: Vec<String>,
    ) -> Vec<String> {
        if let Some(align) = Self::text_align(instance) {
            classes.push(align.to_string());
        }
        classes
    }

    fn inline_styles(
        &self,
        instance: &PluginInstance,
        _scope: &RenderScope<'_>,
        mut styles: InlineStyles,
    ) -> InlineStyles {
        let size = instance.checked("font_size");
        let size = size.as_ref().and_then(Value::as_str);
        styles.set("font-size", size.unwrap_or(DEFAULT_FONT_SIZE));
        styles.set("display", "inline-block");
        let color = instance.checked("color");
        let color = color.as_ref().and_then(Value::as_str);
        styles.set("color", color.unwrap_or(DEFAULT_COLOR));
        if let Some(background) = instance
            .checked("background_color")
            .as_ref()
            .and_then(ToggledColor::enabled_color)
        {
            styles.set("background-color", background);
        }
        if let Some(border) = instance
            .checked("border")
            .and_then(|v| Border::from_value(&v))
            .filter(Border::is_enabled)
        {
            styles.set("border", border.css());
        }
        // Emitted with or without an enabled border.
        if let Some(radius) = instance.choice("border_radius") {
            styles.set("border-radius", radius);
        }
        styles
    }

    fn tag(&self, instance: &PluginInstance) -> Option<String> {
        Self::text_align(instance).map(|_| "div".to_string())
    }
}
