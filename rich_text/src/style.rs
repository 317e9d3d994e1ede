// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The span style vocabulary.
//!
//! The runtime names enum values the way its widget layer prints them, for example
//! `"FontWeight.w700"` or `"TextDecoration.lineThrough"`. Those names are parsed once into the
//! types below; values this crate does not know map to an explicit fallback rather than an
//! error.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::Color;
use crate::color::parse_color;
use crate::payload::{field, field_f32, field_str};

/// The style attributes of one text span.
///
/// Every field is optional. A missing field means "use the host default", never an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleRecord {
    /// Font family name.
    pub font_family: Option<Arc<str>>,
    /// Font size in layout units. Resolution falls back to the configured default (14).
    pub font_size: Option<f32>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Foreground color.
    pub color: Option<Color>,
    /// Extra spacing between letters, in layout units.
    pub letter_spacing: Option<f32>,
    /// Line decoration.
    pub decoration: Option<TextDecoration>,
    /// Background fill color.
    pub background_color: Option<Color>,
    /// Line height as a multiple of the font size.
    ///
    /// Parsed so the record round-trips what the runtime sent, but resolution does not act on it
    /// yet.
    pub height: Option<f32>,
}

impl StyleRecord {
    /// Parses a style object. Anything that is not an object yields an empty record.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        let color = |key: &str| {
            let raw = field_str(object, key)?;
            match parse_color(raw) {
                Ok(color) => Some(color),
                Err(err) => {
                    log::trace!("ignoring {key} {raw:?}: {err}");
                    None
                }
            }
        };
        Self {
            font_family: field_str(object, "fontFamily").map(Arc::from),
            font_size: field_f32(object, "fontSize").filter(|&size| size > 0.0),
            font_weight: field(object, "fontWeight"),
            font_style: field(object, "fontStyle"),
            color: color("color"),
            // Only real numbers count here; a numeric string is not a spacing.
            letter_spacing: object
                .get("letterSpacing")
                .filter(|v| v.is_number())
                .and_then(crate::payload::number_f32),
            decoration: field(object, "decoration"),
            background_color: color("backgroundColor"),
            height: object
                .get("height")
                .filter(|v| v.is_number())
                .and_then(crate::payload::number_f32),
        }
    }

    /// Builder-style setter for [`font_size`](Self::font_size).
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Builder-style setter for [`font_family`](Self::font_family).
    #[must_use]
    pub fn font_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Builder-style setter for [`font_weight`](Self::font_weight).
    #[must_use]
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Builder-style setter for [`font_style`](Self::font_style).
    #[must_use]
    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Builder-style setter for [`color`](Self::color).
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder-style setter for [`letter_spacing`](Self::letter_spacing).
    #[must_use]
    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Builder-style setter for [`decoration`](Self::decoration).
    #[must_use]
    pub fn decoration(mut self, decoration: TextDecoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    /// Builder-style setter for [`background_color`](Self::background_color).
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }
}

/// A font weight on the 100–900 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum FontWeight {
    /// Thin.
    #[serde(rename = "FontWeight.w100")]
    W100,
    /// Extra light.
    #[serde(rename = "FontWeight.w200")]
    W200,
    /// Light.
    #[serde(rename = "FontWeight.w300")]
    W300,
    /// Normal.
    #[serde(rename = "FontWeight.w400")]
    W400,
    /// Medium.
    #[serde(rename = "FontWeight.w500")]
    W500,
    /// Semi-bold.
    #[serde(rename = "FontWeight.w600")]
    W600,
    /// Bold.
    #[serde(rename = "FontWeight.w700")]
    W700,
    /// Extra bold.
    #[serde(rename = "FontWeight.w800")]
    W800,
    /// Black.
    #[serde(rename = "FontWeight.w900")]
    W900,
}

impl FontWeight {
    /// The numeric weight.
    pub const fn value(self) -> u16 {
        match self {
            Self::W100 => 100,
            Self::W200 => 200,
            Self::W300 => 300,
            Self::W400 => 400,
            Self::W500 => 500,
            Self::W600 => 600,
            Self::W700 => 700,
            Self::W800 => 800,
            Self::W900 => 900,
        }
    }

    /// Whether a host with only regular and bold faces should render this weight bold.
    pub const fn is_bold(self) -> bool {
        self.value() >= 700
    }
}

/// Upright or italic glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum FontStyle {
    /// Upright.
    #[serde(rename = "FontStyle.normal")]
    Normal,
    /// Italic.
    #[serde(rename = "FontStyle.italic")]
    Italic,
}

/// A line drawn over, under or through the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum TextDecoration {
    /// No decoration.
    #[serde(rename = "TextDecoration.none")]
    None,
    /// A line below the text.
    #[serde(rename = "TextDecoration.underline")]
    Underline,
    /// A line through the middle of the text.
    #[serde(rename = "TextDecoration.lineThrough")]
    LineThrough,
    /// Any decoration this renderer does not draw, such as overlines.
    #[serde(other)]
    Unsupported,
}

/// Text alignment as requested by the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum TextAlign {
    /// Left edge.
    #[serde(rename = "TextAlign.left")]
    Left,
    /// Right edge.
    #[serde(rename = "TextAlign.right")]
    Right,
    /// Centered.
    #[serde(rename = "TextAlign.center")]
    Center,
    /// Justified. Rendered as left aligned.
    #[serde(rename = "TextAlign.justify")]
    Justify,
    /// Leading edge. Rendered as left aligned.
    #[serde(rename = "TextAlign.start")]
    Start,
    /// Trailing edge. Rendered as right aligned.
    #[serde(rename = "TextAlign.end")]
    End,
    /// Anything else.
    #[serde(other)]
    Unknown,
}

impl TextAlign {
    /// The alignment the native view actually applies.
    pub const fn resolve(self) -> Alignment {
        match self {
            Self::Left | Self::Justify | Self::Start | Self::Unknown => Alignment::Left,
            Self::Right | Self::End => Alignment::Right,
            Self::Center => Alignment::Center,
        }
    }
}

/// Horizontal alignment of laid out lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Lines start at the left edge.
    #[default]
    Left,
    /// Lines end at the right edge.
    Right,
    /// Lines are centered.
    Center,
}
