// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::span::{SpanContent, SpanNode};
use crate::{ResolveContext, RichFragment, resolve};

/// Concatenates the resolved spans of `spans`, in order, into one fragment.
///
/// Nested sequences are composed recursively in place. Widget spans and unknown span kinds
/// contribute nothing. `None` composes to an empty fragment.
pub fn compose(spans: Option<&[SpanNode]>, cx: &ResolveContext) -> RichFragment {
    let mut combined = RichFragment::default();
    for span in spans.unwrap_or_default() {
        match span {
            SpanNode::Text(text) => match &text.content {
                SpanContent::Children(children) => {
                    combined.append(compose(Some(children), cx));
                }
                SpanContent::Literal(literal) => match &text.style {
                    Some(style) => combined.append(resolve(style, literal, cx)),
                    None => combined.append(RichFragment::new(literal.as_str())),
                },
            },
            SpanNode::Widget => {}
            SpanNode::Unknown(name) => log::trace!("skipping unknown span kind `{name}`"),
        }
    }
    combined
}
