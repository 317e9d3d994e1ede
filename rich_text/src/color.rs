// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color values as the runtime serializes them.
//!
//! The runtime sends the decimal string of a packed `0xAARRGGBB` value, so opaque red is
//! `"4294901760"`. Hosts with only signed 32-bit integers send the same bits as a negative
//! number (`"-65536"`). `#RRGGBB` and `#AARRGGBB` strings are accepted as well.

use core::fmt;

use peniko::Color;
use peniko::color::Srgb;

/// Error returned by [`parse_color`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a decimal ARGB value or #RRGGBB / #AARRGGBB hex color")
    }
}

impl core::error::Error for ParseColorError {}

/// Unpacks a `0xAARRGGBB` value.
pub fn color_from_argb(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, a)
}

/// Parses a color in any of the forms the runtime sends.
pub fn parse_color(s: &str) -> Result<Color, ParseColorError> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Ok(value) = s.parse::<u32>() {
        return Ok(color_from_argb(value));
    }
    s.parse::<i32>()
        .map(|value| color_from_argb(value.cast_unsigned()))
        .map_err(|_| ParseColorError)
}

fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError);
    }
    // CSS puts alpha last.
    let css = match hex.len() {
        6 => format!("#{hex}"),
        8 => format!("#{}{}", &hex[2..], &hex[..2]),
        _ => return Err(ParseColorError),
    };
    peniko::color::parse_color(&css)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|_| ParseColorError)
}
