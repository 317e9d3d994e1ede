// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use parley::{FontContext, Layout, LayoutContext};
use rich_text::{LayoutLimits, LineBox, RichFragment, TextMeasurer};

use crate::{TextBrush, layout_fragment};

/// A [`TextMeasurer`] that lays text out with Parley.
///
/// Owns the font and layout contexts so their caches survive between passes.
pub struct ParleyMeasurer {
    font_cx: FontContext,
    layout_cx: LayoutContext<TextBrush>,
    default_font_size: f32,
}

impl core::fmt::Debug for ParleyMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyMeasurer")
            .field("default_font_size", &self.default_font_size)
            .finish_non_exhaustive()
    }
}

impl ParleyMeasurer {
    /// Creates a measurer using system fonts.
    ///
    /// `default_font_size` is in pixels and applies to text without a size directive.
    pub fn new(default_font_size: f32) -> Self {
        Self::with_font_context(FontContext::new(), default_font_size)
    }

    /// Creates a measurer with a caller-provided font context, for example one with
    /// registered application fonts.
    pub fn with_font_context(font_cx: FontContext, default_font_size: f32) -> Self {
        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
            default_font_size,
        }
    }

    /// Lays out `fragment` for drawing.
    pub fn layout(&mut self, fragment: &RichFragment, limits: &LayoutLimits) -> Layout<TextBrush> {
        layout_fragment(
            &mut self.layout_cx,
            &mut self.font_cx,
            fragment,
            self.default_font_size,
            limits,
        )
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn layout_lines(&mut self, fragment: &RichFragment, limits: &LayoutLimits) -> Vec<LineBox> {
        let layout = self.layout(fragment, limits);
        let lines: Vec<_> = layout
            .lines()
            .map(|line| {
                let metrics = line.metrics();
                LineBox {
                    width: metrics.advance - metrics.trailing_whitespace,
                    height: metrics.line_height,
                }
            })
            .collect();
        log::trace!(
            "parley laid out {} bytes into {} lines",
            fragment.len(),
            lines.len()
        );
        lines
    }
}
