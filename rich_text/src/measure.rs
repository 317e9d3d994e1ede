// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Serialize;

use crate::style::Alignment;
use crate::{Attributes, RichFragment};

/// Stand-in for "no limit" where a finite number is required, in layout units.
pub const UNCONSTRAINED: f32 = 999_999.0;

/// Correlates a measurement pass with the runtime request that asked for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MeasureId(pub i64);

/// The size reported back to the runtime, in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MeasuredSize {
    /// Width of the widest measured line.
    pub width: f32,
    /// Summed height of the measured lines.
    pub height: f32,
}

/// The bounding box of one laid out line, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineBox {
    /// Horizontal extent of the line.
    pub width: f32,
    /// Line height.
    pub height: f32,
}

/// Limits for one layout pass, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutLimits {
    /// Lines break before exceeding this width.
    pub max_width: f32,
    /// Height of the box the text is laid out in.
    pub max_height: f32,
    /// Maximum number of lines, `None` for no limit.
    pub max_lines: Option<usize>,
    /// Horizontal alignment of each line.
    pub alignment: Alignment,
}

/// A text stack able to lay out a fragment.
///
/// Implementations break lines and shape text; the reporter only looks at the resulting line
/// boxes. Measuring must not paint anything.
pub trait TextMeasurer {
    /// Lays out `fragment` under `limits` and returns the line boxes from top to bottom.
    ///
    /// Implementations may return more lines than `limits.max_lines`; extra lines are ignored.
    fn layout_lines(&mut self, fragment: &RichFragment, limits: &LayoutLimits) -> Vec<LineBox>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn layout_lines(&mut self, fragment: &RichFragment, limits: &LayoutLimits) -> Vec<LineBox> {
        (**self).layout_lines(fragment, limits)
    }
}

/// Receives measurement results.
pub trait MeasureSink {
    /// Called once per measurement pass.
    fn text_measured(&mut self, id: MeasureId, size: MeasuredSize);
}

impl<F: FnMut(MeasureId, MeasuredSize)> MeasureSink for F {
    fn text_measured(&mut self, id: MeasureId, size: MeasuredSize) {
        self(id, size);
    }
}

/// The measurement constraints from the component attributes, in layout units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureRequest {
    /// Maximum width, `0` or out of range for unconstrained.
    pub max_width: f32,
    /// Maximum height, `0` or out of range for unconstrained.
    pub max_height: f32,
    /// Maximum number of lines, `None` for no limit.
    pub max_lines: Option<usize>,
    /// Horizontal alignment.
    pub alignment: Alignment,
}

impl Default for MeasureRequest {
    fn default() -> Self {
        Self {
            max_width: 0.0,
            max_height: 0.0,
            max_lines: None,
            alignment: Alignment::Left,
        }
    }
}

impl From<&Attributes> for MeasureRequest {
    fn from(attributes: &Attributes) -> Self {
        Self {
            max_width: attributes.max_width,
            max_height: attributes.max_height,
            max_lines: attributes.line_limit(),
            alignment: attributes
                .text_align
                .map(|align| align.resolve())
                .unwrap_or_default(),
        }
    }
}

/// Clamps a constraint into `(0, UNCONSTRAINED)`, mapping everything else to [`UNCONSTRAINED`].
pub fn effective_limit(value: f32) -> f32 {
    if value > 0.0 && value < UNCONSTRAINED {
        value
    } else {
        UNCONSTRAINED
    }
}

/// Converts a constraint to pixels, keeping [`UNCONSTRAINED`] as is.
pub(crate) fn limit_px(value: f32, display_scale: f32) -> f32 {
    let limit = effective_limit(value);
    if limit < UNCONSTRAINED {
        limit * display_scale
    } else {
        UNCONSTRAINED
    }
}

/// Measures `fragment` and returns the size to report.
///
/// The result is the widest line by the summed height of at most `max_lines` lines, each
/// rounded up to whole pixels plus one pixel of slack, converted back to layout units and
/// clamped to the effective constraints.
pub fn measure<M: TextMeasurer + ?Sized>(
    fragment: &RichFragment,
    request: &MeasureRequest,
    display_scale: f32,
    measurer: &mut M,
) -> MeasuredSize {
    let max_width = effective_limit(request.max_width);
    let max_height = effective_limit(request.max_height);
    let limits = LayoutLimits {
        max_width: limit_px(request.max_width, display_scale),
        max_height: limit_px(request.max_height, display_scale),
        max_lines: request.max_lines,
        alignment: request.alignment,
    };

    let lines = measurer.layout_lines(fragment, &limits);
    let count = lines.len().min(request.max_lines.unwrap_or(usize::MAX));
    let (text_width, text_height) = lines[..count]
        .iter()
        .fold((0.0_f32, 0.0_f32), |(width, height), line| {
            (width.max(line.width), height + line.height)
        });

    MeasuredSize {
        width: ((text_width.ceil() + 1.0) / display_scale).min(max_width),
        height: ((text_height.ceil() + 1.0) / display_scale).min(max_height),
    }
}
