// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rich text leaf widget of a cross-platform UI runtime.
//!
//! The runtime describes a rich text subtree as JSON: an ordered sequence of spans, each either
//! styled text, a nested span sequence, or an embedded widget. This crate turns that description
//! into an attributed [`RichFragment`] that a native text stack can draw, and reports the
//! measured size of that text back to the runtime when it asks for one.
//!
//! - [`style`] and [`span`] parse the loosely typed payload once, at the boundary. Colors
//!   become [`peniko::Color`] values.
//! - [`resolve()`] maps one [`StyleRecord`] onto rendering [`Directive`]s.
//! - [`compose()`] walks a span sequence and concatenates the resolved fragments.
//! - [`measure()`] runs a layout pass through a [`TextMeasurer`] and computes the padded
//!   bounding box that is reported back.
//! - [`RichText`] owns all of the above for one component instance.
//!
//! Line breaking and shaping are not done here. They belong to whatever implements
//! [`TextMeasurer`]; `rich_text_parley` provides one backed by Parley.
//!
//! ## Example
//!
//! ```
//! use rich_text::{MeasureId, MeasuredSize, RichText, RichTextConfig};
//! # use rich_text::{LayoutLimits, LineBox, RichFragment, TextMeasurer};
//! # struct OneLine;
//! # impl TextMeasurer for OneLine {
//! #     fn layout_lines(&mut self, fragment: &RichFragment, _: &LayoutLimits) -> Vec<LineBox> {
//! #         vec![LineBox { width: 10.0 * fragment.len() as f32, height: 20.0 }]
//! #     }
//! # }
//! use serde_json::json;
//!
//! let mut reports = Vec::new();
//! let mut text = RichText::new(RichTextConfig::default(), OneLine, |id: MeasureId, size: MeasuredSize| {
//!     reports.push((id, size));
//! });
//! text.set_attributes(&json!({ "measureId": 7, "maxWidth": "200" }));
//! text.set_children(&json!([
//!     { "name": "text_span", "attributes": { "text": "Hi", "style": { "fontSize": 20 } } }
//! ]));
//! drop(text);
//!
//! assert_eq!(reports, [(MeasureId(7), MeasuredSize { width: 21.0, height: 21.0 })]);
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

mod color;
mod component;
mod compose;
mod config;
mod measure;
mod payload;
mod resolve;

pub mod span;
pub mod style;

#[cfg(test)]
mod tests;

pub use crate::color::{ParseColorError, color_from_argb, parse_color};
pub use crate::component::{MeasureState, RichText, ViewState};
pub use crate::compose::compose;
pub use crate::config::RichTextConfig;
pub use crate::measure::{
    LayoutLimits, LineBox, MeasureId, MeasureRequest, MeasureSink, MeasuredSize, TextMeasurer,
    UNCONSTRAINED, effective_limit, measure,
};
pub use crate::payload::{Attributes, Constraints};
pub use crate::resolve::{
    DecorationLine, Directive, ResolveContext, RichFragment, Typeface, TypefaceStyle, resolve,
};
pub use crate::span::{SpanContent, SpanNode, TextSpan};
pub use crate::style::{Alignment, StyleRecord, TextAlign};

pub use attributed_fragment;
pub use peniko;
pub use peniko::Color;
