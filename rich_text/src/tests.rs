// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use crate::{
    Alignment, Directive, LayoutLimits, LineBox, MeasureId, MeasureState, MeasuredSize,
    RichFragment, RichText, RichTextConfig, TextMeasurer,
};

/// A monospace-ish text stack: every character advances half its font size (plus letter
/// spacing), lines are 1.25 font sizes tall, and lines wrap per character.
#[derive(Debug)]
struct FixedAdvance {
    default_px: f32,
    passes: usize,
}

impl FixedAdvance {
    fn new(default_px: f32) -> Self {
        Self {
            default_px,
            passes: 0,
        }
    }

    fn size_at(&self, fragment: &RichFragment, index: usize) -> (f32, f32) {
        let mut size = self.default_px;
        let mut spacing_em = 0.0;
        for directive in fragment.attributes_at(index) {
            match directive {
                Directive::FontSize(px) => size = *px,
                Directive::LetterSpacing(em) => spacing_em = *em,
                _ => {}
            }
        }
        (size, spacing_em * size)
    }
}

impl TextMeasurer for FixedAdvance {
    fn layout_lines(&mut self, fragment: &RichFragment, limits: &LayoutLimits) -> Vec<LineBox> {
        self.passes += 1;
        let mut lines = Vec::new();
        let mut current: Option<LineBox> = None;
        for (index, ch) in fragment.as_str().char_indices() {
            let (size, spacing) = self.size_at(fragment, index);
            if ch == '\n' {
                lines.push(current.take().unwrap_or(LineBox {
                    width: 0.0,
                    height: size * 1.25,
                }));
                continue;
            }
            let advance = size * 0.5 + spacing;
            let line = current.get_or_insert_with(LineBox::default);
            if line.width > 0.0 && line.width + advance > limits.max_width {
                lines.push(*line);
                *line = LineBox::default();
            }
            line.width += advance;
            line.height = line.height.max(size * 1.25);
        }
        lines.extend(current);
        lines
    }
}

type Reports = Rc<RefCell<Vec<(MeasureId, MeasuredSize)>>>;

fn component(
    config: RichTextConfig,
) -> (
    RichText<FixedAdvance, impl FnMut(MeasureId, MeasuredSize)>,
    Reports,
) {
    let reports = Reports::default();
    let sink = Rc::clone(&reports);
    let measurer = FixedAdvance::new(config.default_font_size * config.display_scale);
    let text = RichText::new(config, measurer, move |id: MeasureId, size: MeasuredSize| {
        sink.borrow_mut().push((id, size));
    });
    (text, reports)
}

fn hello_span(text: &str) -> serde_json::Value {
    json!([{ "name": "text_span", "attributes": { "text": text, "style": {} } }])
}

#[test]
fn measure_id_scenario() {
    let (mut text, reports) = component(RichTextConfig::default());
    text.set_attributes(&json!({ "measureId": 7, "maxWidth": "200", "maxHeight": "999999" }));
    assert_eq!(text.state(), MeasureState::Armed(MeasureId(7)));
    text.set_children(&json!([
        { "name": "text_span", "attributes": { "text": "Hi", "style": { "fontSize": 20 } } }
    ]));

    let reports = reports.borrow();
    assert_eq!(reports.len(), 1);
    let (id, size) = reports[0];
    assert_eq!(id, MeasureId(7));
    // Two 10px advances, one 25px line, each padded by one.
    assert_eq!(
        size,
        MeasuredSize {
            width: 21.0,
            height: 26.0
        }
    );
    assert!(size.width <= 200.0 && size.height <= 200.0);
}

#[test]
fn single_line_hello_fits_its_box() {
    let (mut unconstrained, reports) = component(RichTextConfig::default());
    unconstrained.set_attributes(&json!({ "measureId": 1 }));
    unconstrained.set_children(&hello_span("Hello"));
    let (_, natural) = reports.borrow()[0];

    let (mut constrained, reports) = component(RichTextConfig::default());
    constrained.set_attributes(&json!({
        "measureId": 2, "maxWidth": "100", "maxHeight": "100", "maxLines": 1,
    }));
    constrained.set_children(&hello_span("Hello"));
    let (_, size) = reports.borrow()[0];

    assert_eq!(size, natural);
    assert!(size.width <= 100.0 && size.height <= 100.0);
    assert_eq!(
        size,
        MeasuredSize {
            width: 36.0,
            height: 19.0
        }
    );
}

#[test]
fn idle_component_renders_without_reporting() {
    let (mut text, reports) = component(RichTextConfig::default().with_display_scale(2.0));
    text.set_attributes(&json!({ "textAlign": "TextAlign.center" }));
    text.set_constraints(&json!({ "w": 150, "h": 0 }));
    text.set_children(&hello_span("quiet"));

    assert!(reports.borrow().is_empty());
    assert_eq!(text.measurer().passes, 0);
    let view = text.view();
    assert_eq!(view.content.as_ref().map(RichFragment::as_str), Some("quiet"));
    assert_eq!(view.max_width, Some(300.0));
    assert_eq!(view.max_height, None);
    assert_eq!(view.alignment, Alignment::Center);
    assert!(view.ellipsize_end);
}

#[test]
fn null_children_never_report() {
    let (mut text, reports) = component(RichTextConfig::default());
    text.set_attributes(&json!({ "measureId": 3 }));
    text.set_children(&json!(null));
    text.set_constraints(&json!({ "w": 10, "h": 10 }));

    assert!(reports.borrow().is_empty());
    assert_eq!(text.view().content, None);
}

#[test]
fn empty_children_report_padding_only() {
    let (mut text, reports) = component(RichTextConfig::default());
    text.set_attributes(&json!({ "measureId": 3 }));
    text.set_children(&json!([]));
    assert_eq!(
        *reports.borrow(),
        [(
            MeasureId(3),
            MeasuredSize {
                width: 1.0,
                height: 1.0
            }
        )]
    );
}

#[test]
fn new_id_supersedes_and_missing_id_disarms() {
    let (mut text, reports) = component(RichTextConfig::default());
    text.set_attributes(&json!({ "measureId": 1 }));
    text.set_attributes(&json!({ "measureId": 2 }));
    text.set_children(&hello_span("a"));
    text.set_attributes(&json!({}));
    assert_eq!(text.state(), MeasureState::Idle);
    text.set_children(&hello_span("b"));

    let ids: Vec<_> = reports.borrow().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, [MeasureId(2)]);
}

#[test]
fn constraint_change_remeasures_when_armed() {
    let (mut text, reports) = component(RichTextConfig::default());
    text.set_attributes(&json!({ "measureId": 5 }));
    text.set_children(&hello_span("abc"));
    text.set_constraints(&json!({ "w": 40, "h": 40 }));
    assert_eq!(reports.borrow().len(), 2);
    assert_eq!(text.measurer().passes, 2);
}

#[test]
fn wrapping_respects_line_limit_and_scale() {
    let config = RichTextConfig::default().with_display_scale(2.0);
    let (mut text, reports) = component(config);
    // Default size 14 at scale 2 is 28px; each char advances 14px, so a 30 unit (60px) box
    // holds four characters per line.
    text.set_attributes(&json!({ "measureId": 9, "maxWidth": 30, "maxLines": 2 }));
    text.set_children(&hello_span("abcdefghij"));

    let (_, size) = reports.borrow()[0];
    // Two lines of 56px by 35px: (57 / 2, 71 / 2).
    assert_eq!(
        size,
        MeasuredSize {
            width: 28.5,
            height: 35.5
        }
    );
    assert_eq!(text.view().max_width, Some(60.0));
    assert_eq!(text.view().max_lines, Some(2));
}

#[test]
fn letter_spacing_widens_measurement() {
    let (mut text, reports) = component(RichTextConfig::default());
    text.set_attributes(&json!({ "measureId": 4 }));
    text.set_children(&json!([{
        "name": "text_span",
        "attributes": { "text": "ab", "style": { "fontSize": 20, "letterSpacing": 5 } }
    }]));
    let (_, size) = reports.borrow()[0];
    // (10 + 5) * 2 = 30
    assert_eq!(size.width, 31.0);
}

#[test]
fn content_is_rebuilt_not_patched() {
    let (mut text, _) = component(RichTextConfig::default());
    text.set_children(&json!([
        { "name": "text_span", "attributes": { "text": "old", "style": { "color": "4278190080" } } }
    ]));
    text.set_children(&json!([
        { "name": "text_span", "attributes": { "text": "new" } }
    ]));
    let content = text.view().content.as_ref().unwrap();
    assert_eq!(content.as_str(), "new");
    assert_eq!(content.attributes_len(), 0);
}

#[test]
fn update_layout_sizes_the_frame() {
    let (mut text, _) = component(RichTextConfig::default().with_display_scale(3.0));
    text.update_layout();
    assert_eq!(text.view().frame, None);
    text.set_constraints(&json!({ "w": 100, "h": 20.5 }));
    text.update_layout();
    assert_eq!(text.view().frame, Some((300.0, 61.5)));
}

#[test]
fn unknown_alignment_keeps_the_previous_one() {
    let (mut text, _) = component(RichTextConfig::default());
    text.set_attributes(&json!({ "textAlign": "TextAlign.end" }));
    assert_eq!(text.view().alignment, Alignment::Right);
    text.set_attributes(&json!({ "textAlign": "TextAlign.diagonal" }));
    assert_eq!(text.view().alignment, Alignment::Right);
    text.set_attributes(&json!({}));
    assert_eq!(text.view().alignment, Alignment::Right);
    text.set_attributes(&json!({ "textAlign": "TextAlign.justify" }));
    assert_eq!(text.view().alignment, Alignment::Left);
}

#[test]
fn overflowing_and_negative_sizes_use_the_default() {
    let (mut text, reports) = component(RichTextConfig::default());
    text.set_attributes(&json!({ "measureId": 7 }));
    text.set_children(&json!([
        {
            "name": "text_span",
            "attributes": { "text": "Hi there", "style": { "fontSize": 1e39, "letterSpacing": 1e39 } }
        },
        { "name": "text_span", "attributes": { "text": "neg", "style": { "fontSize": -20 } } }
    ]));

    let content = text.view().content.as_ref().unwrap();
    let directives: Vec<_> = content
        .attributes_iter()
        .map(|(range, d)| (range.clone(), d.clone()))
        .collect();
    assert_eq!(
        directives,
        [
            (0..8, Directive::FontSize(14.0)),
            (8..11, Directive::FontSize(14.0)),
        ]
    );
    // Eleven 7px advances on one 17.5px line.
    assert_eq!(
        *reports.borrow(),
        [(
            MeasureId(7),
            MeasuredSize {
                width: 78.0,
                height: 19.0
            }
        )]
    );
}
