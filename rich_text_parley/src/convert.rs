// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;

use parley::{FontFamily, FontStack, FontStyle, FontWeight, StyleProperty};
use rich_text::{Alignment, DecorationLine, Typeface};

use crate::TextBrush;

#[inline]
pub(crate) fn to_parley_typeface(
    typeface: &Typeface,
) -> (Option<FontStack<'_>>, FontWeight, FontStyle) {
    let stack = typeface
        .family
        .as_deref()
        .map(|name| FontStack::Single(FontFamily::Named(Cow::Borrowed(name))));
    let weight = if typeface.style.is_bold() {
        FontWeight::BOLD
    } else {
        FontWeight::NORMAL
    };
    let style = if typeface.style.is_italic() {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    };
    (stack, weight, style)
}

#[inline]
pub(crate) fn to_parley_decoration(line: DecorationLine) -> StyleProperty<'static, TextBrush> {
    match line {
        DecorationLine::Underline => StyleProperty::Underline(true),
        DecorationLine::Strikethrough => StyleProperty::Strikethrough(true),
    }
}

#[inline]
pub(crate) fn to_parley_alignment(alignment: Alignment) -> parley::Alignment {
    match alignment {
        Alignment::Left => parley::Alignment::Left,
        Alignment::Right => parley::Alignment::Right,
        Alignment::Center => parley::Alignment::Middle,
    }
}
