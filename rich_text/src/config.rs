// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ResolveContext;

/// Host-level settings shared by every rich text component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RichTextConfig {
    /// Pixels per layout unit (the device density).
    pub display_scale: f32,
    /// Font size, in layout units, for spans that do not set one.
    pub default_font_size: f32,
}

impl Default for RichTextConfig {
    fn default() -> Self {
        Self {
            display_scale: 1.0,
            default_font_size: 14.0,
        }
    }
}

impl RichTextConfig {
    /// Sets the display scale.
    ///
    /// Non-finite or non-positive scales are ignored.
    #[must_use]
    pub fn with_display_scale(mut self, scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.display_scale = scale;
        } else {
            log::warn!("ignoring invalid display scale {scale}");
        }
        self
    }

    /// Sets the default font size.
    #[must_use]
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }

    /// The context the style resolver needs.
    pub fn resolve_context(&self) -> ResolveContext {
        ResolveContext {
            display_scale: self.display_scale,
            default_font_size: self.default_font_size,
        }
    }
}
