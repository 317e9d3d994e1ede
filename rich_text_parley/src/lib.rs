// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley backend for [`rich_text`].
//!
//! This crate lowers the rendering [`Directive`](rich_text::Directive)s of a
//! [`RichFragment`] into Parley builder calls, producing a [`parley::Layout`], and implements
//! [`TextMeasurer`](rich_text::TextMeasurer) on top of that layout.
//!
//! ## Scope
//!
//! Font sizes in a fragment are already in pixels, so layouts are built at scale `1.0`.
//!
//! It intentionally does not handle:
//! - background fills: Parley has no such style, so painters read them with
//!   [`background_fills`] and draw them under the glyphs
//! - line limits and ellipsis: the measurer returns every line and callers cut them off
//!
//! ## Example
//!
//! ```no_run
//! use rich_text::{MeasureRequest, ResolveContext, StyleRecord, measure, resolve};
//! use rich_text_parley::ParleyMeasurer;
//!
//! let cx = ResolveContext::default();
//! let fragment = resolve(&StyleRecord::default().font_size(20.0), "Hello", &cx);
//! let mut measurer = ParleyMeasurer::new(cx.to_px(cx.default_font_size));
//! let size = measure(&fragment, &MeasureRequest::default(), cx.display_scale, &mut measurer);
//! assert!(size.width >= 1.0);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::ops::Range;

use parley::{FontContext, Layout, LayoutContext, RangedBuilder, StyleProperty};
use rich_text::{Color, Directive, LayoutLimits, RichFragment, UNCONSTRAINED};

mod convert;
mod measurer;


pub use crate::measurer::ParleyMeasurer;

use crate::convert::{to_parley_alignment, to_parley_decoration, to_parley_typeface};

/// The brush Parley carries for each glyph run: the foreground color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBrush(pub Color);

impl Default for TextBrush {
    fn default() -> Self {
        Self(Color::BLACK)
    }
}

/// Builds a shaped Parley [`Layout`] from `fragment`.
///
/// Line breaking and alignment are left to the caller; see [`layout_fragment`].
pub fn build_layout(
    layout_cx: &mut LayoutContext<TextBrush>,
    font_cx: &mut FontContext,
    fragment: &RichFragment,
    default_font_size: f32,
) -> Layout<TextBrush> {
    let text = fragment.as_str();
    let mut builder = layout_cx.ranged_builder(font_cx, text, 1.0, true);
    builder.push_default(StyleProperty::Brush(TextBrush::default()));
    builder.push_default(StyleProperty::FontSize(default_font_size));
    push_fragment(&mut builder, fragment, default_font_size);
    builder.build(text)
}

/// Builds, breaks and aligns a layout for `fragment` under `limits`.
///
/// `limits.max_lines` is not applied here: the layout holds every line. Painters must stop
/// after [`ViewState::max_lines`](rich_text::ViewState::max_lines) lines themselves, and draw
/// the ellipsis when [`ViewState::ellipsize_end`](rich_text::ViewState::ellipsize_end) is set.
pub fn layout_fragment(
    layout_cx: &mut LayoutContext<TextBrush>,
    font_cx: &mut FontContext,
    fragment: &RichFragment,
    default_font_size: f32,
    limits: &LayoutLimits,
) -> Layout<TextBrush> {
    let mut layout = build_layout(layout_cx, font_cx, fragment, default_font_size);
    let max_width = (limits.max_width < UNCONSTRAINED).then_some(limits.max_width);
    layout.break_all_lines(max_width);
    layout.align(
        max_width,
        to_parley_alignment(limits.alignment),
        parley::AlignmentOptions::default(),
    );
    layout
}

/// Pushes every directive of `fragment` onto `builder` as ranged style properties.
///
/// Directives over empty ranges are skipped. Letter spacing is converted from em back to pixels
/// using the font size in effect at the start of its range.
pub fn push_fragment(
    builder: &mut RangedBuilder<'_, TextBrush>,
    fragment: &RichFragment,
    default_font_size: f32,
) {
    for (range, directive) in fragment.attributes_iter() {
        if range.is_empty() {
            continue;
        }
        match directive {
            Directive::FontSize(px) => builder.push(StyleProperty::FontSize(*px), range.clone()),
            Directive::Typeface(typeface) => {
                let (stack, weight, style) = to_parley_typeface(typeface);
                if let Some(stack) = stack {
                    builder.push(StyleProperty::FontStack(stack), range.clone());
                }
                builder.push(StyleProperty::FontWeight(weight), range.clone());
                builder.push(StyleProperty::FontStyle(style), range.clone());
            }
            Directive::Foreground(color) => {
                builder.push(StyleProperty::Brush(TextBrush(*color)), range.clone());
            }
            Directive::LetterSpacing(em) => {
                let size = font_size_at(fragment, range.start, default_font_size);
                builder.push(StyleProperty::LetterSpacing(em * size), range.clone());
            }
            Directive::Decoration(line) => {
                builder.push(to_parley_decoration(*line), range.clone());
            }
            Directive::Background(_) => {}
        }
    }
}

/// The background fills of `fragment`, in the order they were applied.
///
/// Later fills paint over earlier ones where they overlap.
pub fn background_fills(
    fragment: &RichFragment,
) -> impl Iterator<Item = (Range<usize>, Color)> + '_ {
    fragment
        .attributes_iter()
        .filter(|(range, _)| !range.is_empty())
        .filter_map(|(range, directive)| match directive {
            Directive::Background(color) => Some((range.clone(), *color)),
            _ => None,
        })
}

/// The font size in pixels in effect at byte `index`; the last applied size wins.
pub(crate) fn font_size_at(fragment: &RichFragment, index: usize, default_font_size: f32) -> f32 {
    fragment
        .attributes_at(index)
        .filter_map(|directive| match directive {
            Directive::FontSize(px) => Some(*px),
            _ => None,
        })
        .last()
        .unwrap_or(default_font_size)
}
