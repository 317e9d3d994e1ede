// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The span tree delivered by `setChildren`.
//!
//! ```json
//! [
//!   { "name": "text_span", "attributes": { "text": "Hi ", "style": { "fontSize": 20 } } },
//!   { "name": "text_span", "children": [ ... ] },
//!   { "name": "widget_span", "attributes": { ... } }
//! ]
//! ```

use serde_json::Value;

use crate::style::StyleRecord;

/// One entry of a span sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum SpanNode {
    /// Styled text, or a nested sequence.
    Text(TextSpan),
    /// An embedded widget. Recognized, but renders nothing yet.
    Widget,
    /// A span kind this renderer does not know, kept by name for diagnostics.
    Unknown(String),
}

/// A `text_span` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    /// The span's style. `None` renders the text with host defaults.
    pub style: Option<StyleRecord>,
    /// What the span contains.
    pub content: SpanContent,
}

/// The body of a [`TextSpan`].
#[derive(Clone, Debug, PartialEq)]
pub enum SpanContent {
    /// Literal text.
    Literal(String),
    /// A nested span sequence, composed in place of the literal text.
    Children(Vec<SpanNode>),
}

impl SpanNode {
    /// Literal text with an optional style.
    pub fn text(text: impl Into<String>, style: Option<StyleRecord>) -> Self {
        Self::Text(TextSpan {
            style,
            content: SpanContent::Literal(text.into()),
        })
    }

    /// A nested sequence.
    pub fn nested(children: Vec<Self>) -> Self {
        Self::Text(TextSpan {
            style: None,
            content: SpanContent::Children(children),
        })
    }

    /// Parses one entry.
    ///
    /// Returns `None` for entries that carry nothing renderable: non-objects, entries without a
    /// `name`, and text spans with neither `children` nor `attributes`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name")?.as_str()?;
        match name {
            "text_span" => {
                if let Some(children) = object.get("children").and_then(Value::as_array) {
                    // A nested sequence replaces the span's own text; its own style is not
                    // inherited by the children.
                    return Some(Self::nested(parse_entries(children)));
                }
                let attributes = object.get("attributes")?.as_object()?;
                let text = match attributes.get("text") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    _ => String::new(),
                };
                let style = attributes
                    .get("style")
                    .filter(|v| v.is_object())
                    .map(StyleRecord::from_json);
                Some(Self::text(text, style))
            }
            "widget_span" => Some(Self::Widget),
            other => Some(Self::Unknown(other.to_owned())),
        }
    }

    /// Parses a whole sequence.
    ///
    /// Returns `None` when `value` is not an array, which includes `null`: "no content" is
    /// different from "empty content".
    pub fn parse_sequence(value: &Value) -> Option<Vec<Self>> {
        value.as_array().map(|entries| parse_entries(entries))
    }
}

fn parse_entries(entries: &[Value]) -> Vec<SpanNode> {
    entries
        .iter()
        .filter_map(|entry| {
            let node = SpanNode::from_json(entry);
            if node.is_none() {
                log::trace!("skipping span entry {entry}");
            }
            node
        })
        .collect()
}
