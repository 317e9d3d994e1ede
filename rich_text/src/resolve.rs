// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use attributed_fragment::Fragment;

use crate::style::{FontStyle, StyleRecord, TextDecoration};
use crate::{Color, RichTextConfig};

/// Text with rendering directives applied over byte ranges.
pub type RichFragment = Fragment<Directive>;

/// One rendering instruction applied over a range of a [`RichFragment`].
///
/// Some directives only change how glyphs are painted; others change glyph advances and
/// therefore line breaking. See [`Directive::affects_measurement`].
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    /// Absolute font size in pixels.
    FontSize(f32),
    /// Font family and style.
    Typeface(Typeface),
    /// Glyph color.
    Foreground(Color),
    /// Extra spacing between letters as a fraction of the font size (em).
    LetterSpacing(f32),
    /// A line drawn under or through the glyphs.
    Decoration(DecorationLine),
    /// Fill behind the glyphs.
    Background(Color),
}

impl Directive {
    /// Whether this directive changes layout as well as painting.
    pub fn affects_measurement(&self) -> bool {
        match self {
            Self::FontSize(_) | Self::Typeface(_) | Self::LetterSpacing(_) => true,
            Self::Foreground(_) | Self::Decoration(_) | Self::Background(_) => false,
        }
    }
}

/// A concrete face request: an optional family plus one of the four classic styles.
///
/// `family: None` means the host's default family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Typeface {
    /// Family name.
    pub family: Option<Arc<str>>,
    /// Combined weight and slant.
    pub style: TypefaceStyle,
}

/// The four face styles a host without variable fonts distinguishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypefaceStyle {
    /// Regular.
    #[default]
    Normal,
    /// Bold.
    Bold,
    /// Italic.
    Italic,
    /// Bold and italic.
    BoldItalic,
}

impl TypefaceStyle {
    /// Combines the bold and italic flags.
    pub const fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Self::Normal,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (true, true) => Self::BoldItalic,
        }
    }

    /// Whether this style is bold.
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Whether this style is italic.
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

/// Which decoration line to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationLine {
    /// Below the baseline.
    Underline,
    /// Through the middle of the glyphs.
    Strikethrough,
}

/// Inputs to resolution that do not come from the span itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveContext {
    /// Pixels per layout unit.
    pub display_scale: f32,
    /// Font size used when a style has none, in layout units.
    pub default_font_size: f32,
}

impl Default for ResolveContext {
    fn default() -> Self {
        RichTextConfig::default().resolve_context()
    }
}

impl ResolveContext {
    /// Converts layout units to pixels.
    pub fn to_px(&self, value: f32) -> f32 {
        value * self.display_scale
    }
}

/// Resolves `style` into directives covering all of `text`.
///
/// The font size directive is always present. The typeface directive is only present when the
/// record names a family, weight or style. `height` is accepted but has no effect.
///
/// Empty text still yields a fragment; its directives cover `0..0` and do nothing.
pub fn resolve(style: &StyleRecord, text: &str, cx: &ResolveContext) -> RichFragment {
    let mut fragment = RichFragment::new(text);

    let font_size = style
        .font_size
        .filter(|&size| size.is_finite() && size > 0.0)
        .unwrap_or(cx.default_font_size);
    fragment.apply_to_all(Directive::FontSize(cx.to_px(font_size)));

    if style.font_family.is_some() || style.font_weight.is_some() || style.font_style.is_some() {
        let bold = style.font_weight.is_some_and(|w| w.is_bold());
        let italic = style.font_style == Some(FontStyle::Italic);
        fragment.apply_to_all(Directive::Typeface(Typeface {
            family: style.font_family.clone(),
            style: TypefaceStyle::from_flags(bold, italic),
        }));
    }

    if let Some(color) = style.color {
        fragment.apply_to_all(Directive::Foreground(color));
    }

    if let Some(spacing) = style.letter_spacing {
        // The layout stack expects spacing relative to the font size.
        let em = spacing / font_size;
        if em.is_finite() {
            fragment.apply_to_all(Directive::LetterSpacing(em));
        } else {
            log::trace!("dropping letter spacing {spacing} for font size {font_size}");
        }
    }

    match style.decoration {
        Some(TextDecoration::LineThrough) => {
            fragment.apply_to_all(Directive::Decoration(DecorationLine::Strikethrough));
        }
        Some(TextDecoration::Underline) => {
            fragment.apply_to_all(Directive::Decoration(DecorationLine::Underline));
        }
        Some(TextDecoration::None | TextDecoration::Unsupported) | None => {}
    }

    if let Some(color) = style.background_color {
        fragment.apply_to_all(Directive::Background(color));
    }

    // TODO: apply `style.height` once the measurer can take a line height multiplier.
    fragment
}

#[cfg(test)]
mod tests {
    use super::{DecorationLine, Directive, ResolveContext, TypefaceStyle, resolve};
    use crate::color_from_argb;
    use crate::style::{FontStyle, FontWeight, StyleRecord, TextDecoration};

    fn directives(style: &StyleRecord, text: &str) -> Vec<Directive> {
        resolve(style, text, &ResolveContext::default())
            .attributes_iter()
            .map(|(range, d)| {
                assert_eq!(*range, 0..text.len());
                d.clone()
            })
            .collect()
    }

    fn typeface_style(style: &StyleRecord) -> Option<TypefaceStyle> {
        directives(style, "x").into_iter().find_map(|d| match d {
            Directive::Typeface(t) => Some(t.style),
            _ => None,
        })
    }

    #[test]
    fn size_only_yields_single_scaled_directive() {
        let cx = ResolveContext {
            display_scale: 3.0,
            default_font_size: 14.0,
        };
        let fragment = resolve(&StyleRecord::default().font_size(12.0), "Hello", &cx);
        let all: Vec<_> = fragment.attributes_iter().map(|(_, d)| d).collect();
        assert_eq!(all, [&Directive::FontSize(36.0)]);
    }

    #[test]
    fn empty_record_uses_default_size() {
        assert_eq!(
            directives(&StyleRecord::default(), "Hi"),
            [Directive::FontSize(14.0)]
        );
    }

    #[test]
    fn letter_spacing_is_relative_to_font_size() {
        let style = StyleRecord::default().font_size(20.0).letter_spacing(3.0);
        let spacing = directives(&style, "abc")
            .into_iter()
            .find_map(|d| match d {
                Directive::LetterSpacing(em) => Some(em),
                _ => None,
            })
            .expect("letter spacing directive");
        assert!((spacing - 0.15).abs() < 1e-6, "{spacing}");
    }

    #[test]
    fn letter_spacing_uses_default_size_when_unset() {
        let style = StyleRecord::default().letter_spacing(7.0);
        assert!(directives(&style, "a").contains(&Directive::LetterSpacing(0.5)));
    }

    #[test]
    fn weight_and_style_combine() {
        let bold = StyleRecord::default().font_weight(FontWeight::W700);
        assert_eq!(typeface_style(&bold), Some(TypefaceStyle::Bold));

        let semi = StyleRecord::default().font_weight(FontWeight::W600);
        assert_eq!(typeface_style(&semi), Some(TypefaceStyle::Normal));

        let bold_italic = StyleRecord::default()
            .font_weight(FontWeight::W900)
            .font_style(FontStyle::Italic);
        assert_eq!(typeface_style(&bold_italic), Some(TypefaceStyle::BoldItalic));

        let italic = StyleRecord::default().font_style(FontStyle::Italic);
        assert_eq!(typeface_style(&italic), Some(TypefaceStyle::Italic));

        let family = StyleRecord::default().font_family("Roboto");
        let face = directives(&family, "x").into_iter().find_map(|d| match d {
            Directive::Typeface(t) => Some(t),
            _ => None,
        });
        let face = face.expect("typeface directive");
        assert_eq!(face.family.as_deref(), Some("Roboto"));
        assert_eq!(face.style, TypefaceStyle::Normal);
    }

    #[test]
    fn decoration_variants() {
        let underline = directives(
            &StyleRecord::default().decoration(TextDecoration::Underline),
            "u",
        );
        assert!(underline.contains(&Directive::Decoration(DecorationLine::Underline)));
        assert!(!underline.contains(&Directive::Decoration(DecorationLine::Strikethrough)));

        let strike = directives(
            &StyleRecord::default().decoration(TextDecoration::LineThrough),
            "s",
        );
        assert!(strike.contains(&Directive::Decoration(DecorationLine::Strikethrough)));
        assert!(!strike.contains(&Directive::Decoration(DecorationLine::Underline)));

        for other in [TextDecoration::None, TextDecoration::Unsupported] {
            let none = directives(&StyleRecord::default().decoration(other), "n");
            assert!(
                !none.iter().any(|d| matches!(d, Directive::Decoration(_))),
                "{other:?}"
            );
        }
    }

    #[test]
    fn colors_and_measurement_classes() {
        let red = color_from_argb(0xFFFF_0000);
        let clear = color_from_argb(0);
        let style = StyleRecord::default().color(red).background_color(clear);
        let all = directives(&style, "c");
        assert!(all.contains(&Directive::Foreground(red)));
        assert!(all.contains(&Directive::Background(clear)));
        let measured: Vec<_> = all.iter().filter(|d| d.affects_measurement()).collect();
        assert_eq!(measured, [&Directive::FontSize(14.0)]);
    }

    #[test]
    fn empty_text_keeps_inert_directives() {
        let fragment = resolve(
            &StyleRecord::default().color(color_from_argb(0xFF00_0000)),
            "",
            &ResolveContext::default(),
        );
        assert!(fragment.is_empty());
        assert!(fragment.attributes_iter().all(|(range, _)| range.is_empty()));
    }

    #[test]
    fn unusable_sizes_fall_back_to_default() {
        for size in [-20.0, 0.0, f32::INFINITY, f32::NAN] {
            let style = StyleRecord::default().font_size(size).letter_spacing(7.0);
            assert_eq!(
                directives(&style, "n"),
                [Directive::FontSize(14.0), Directive::LetterSpacing(0.5)],
                "{size}"
            );
        }
    }

    #[test]
    fn resolution_is_repeatable() {
        let style = StyleRecord::default()
            .font_size(18.0)
            .font_weight(FontWeight::W700)
            .letter_spacing(1.0)
            .decoration(TextDecoration::Underline);
        let cx = ResolveContext::default();
        assert_eq!(resolve(&style, "same", &cx), resolve(&style, "same", &cx));
    }
}
