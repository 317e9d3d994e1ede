// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde_json::Value;

use crate::measure::limit_px;
use crate::span::SpanNode;
use crate::style::{Alignment, TextAlign};
use crate::{
    Attributes, Constraints, MeasureId, MeasureRequest, MeasureSink, RichFragment, RichTextConfig,
    TextMeasurer, compose, measure,
};

/// Whether the component reports its size back to the runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasureState {
    /// No measurement id; the text is rendered but never measured.
    #[default]
    Idle,
    /// Every content change is measured and reported under this id.
    Armed(MeasureId),
}

/// Everything the host needs to draw the component, in pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// The attributed text, or `None` before any content arrived (or after `null` content).
    pub content: Option<RichFragment>,
    /// Frame size from the last [`RichText::update_layout`].
    pub frame: Option<(f32, f32)>,
    /// Maximum width the view may grow to.
    pub max_width: Option<f32>,
    /// Maximum height the view may grow to.
    pub max_height: Option<f32>,
    /// Maximum number of lines, `None` for no limit.
    pub max_lines: Option<usize>,
    /// Horizontal alignment of the lines.
    pub alignment: Alignment,
    /// Whether text that overflows `max_lines` ends in an ellipsis.
    pub ellipsize_end: bool,
}

/// One rich text component instance.
///
/// The component owns its text measurer and result sink. Every update runs synchronously:
/// content is rebuilt from scratch, and when a measurement id is active the new content is
/// measured and reported before the call returns.
#[derive(Debug)]
pub struct RichText<M, S> {
    config: RichTextConfig,
    measurer: M,
    sink: S,
    constraints: Option<Constraints>,
    request: MeasureRequest,
    state: MeasureState,
    view: ViewState,
}

impl<M: TextMeasurer, S: MeasureSink> RichText<M, S> {
    /// Creates an idle component with no content.
    pub fn new(config: RichTextConfig, measurer: M, sink: S) -> Self {
        Self {
            config,
            measurer,
            sink,
            constraints: None,
            request: MeasureRequest::default(),
            state: MeasureState::Idle,
            view: ViewState::default(),
        }
    }

    /// The current measurement state.
    pub fn state(&self) -> MeasureState {
        self.state
    }

    /// What the host should draw.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The text measurer.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Stores the layout box offered by the parent.
    ///
    /// While idle, a positive width or height also caps the view. While armed, the content is
    /// measured again.
    pub fn set_constraints(&mut self, value: &Value) {
        let constraints = Constraints::from_json(value);
        self.constraints = Some(constraints);
        match self.state {
            MeasureState::Idle => {
                let scale = self.config.display_scale;
                if let Some(w) = constraints.w.filter(|&w| w > 0.0) {
                    self.view.max_width = Some(w * scale);
                }
                if let Some(h) = constraints.h.filter(|&h| h > 0.0) {
                    self.view.max_height = Some(h * scale);
                }
            }
            MeasureState::Armed(_) => self.measure_and_report(),
        }
    }

    /// Applies component attributes.
    ///
    /// This only updates configuration; the next content or constraint change is measured
    /// with it.
    pub fn set_attributes(&mut self, value: &Value) {
        let attributes = Attributes::from_json(value);
        if let Some(align) = attributes.text_align.filter(|&a| a != TextAlign::Unknown) {
            self.view.alignment = align.resolve();
        }
        self.request = MeasureRequest {
            alignment: self.view.alignment,
            ..MeasureRequest::from(&attributes)
        };
        let state = match attributes.measure_id {
            Some(id) => MeasureState::Armed(id),
            None => MeasureState::Idle,
        };
        if state != self.state {
            log::debug!("rich text measure state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
        self.view.max_lines = self.request.max_lines;
        self.view.ellipsize_end = true;
    }

    /// Replaces the content with a new span sequence and measures it when armed.
    pub fn set_children(&mut self, value: &Value) {
        let spans = SpanNode::parse_sequence(value);
        self.view.content = spans
            .as_deref()
            .map(|spans| compose(Some(spans), &self.config.resolve_context()));
        if let MeasureState::Armed(_) = self.state {
            self.measure_and_report();
        }
    }

    /// Sizes the view frame from the last constraints.
    pub fn update_layout(&mut self) {
        let Some(constraints) = self.constraints else {
            return;
        };
        let scale = self.config.display_scale;
        self.view.frame = Some((
            constraints.w.unwrap_or(0.0) * scale,
            constraints.h.unwrap_or(0.0) * scale,
        ));
    }

    fn measure_and_report(&mut self) {
        let MeasureState::Armed(id) = self.state else {
            return;
        };
        let Some(content) = &self.view.content else {
            log::trace!("measure {id:?} skipped: no content");
            return;
        };
        let scale = self.config.display_scale;
        self.view.max_width = Some(limit_px(self.request.max_width, scale));
        self.view.max_height = Some(limit_px(self.request.max_height, scale));

        let size = measure(content, &self.request, scale, &mut self.measurer);
        log::debug!(
            "measured {id:?}: {}x{} for {} bytes",
            size.width,
            size.height,
            content.len()
        );
        self.sink.text_measured(id, size);
    }
}
