// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text backend.
//!
//! This crate implements [`xyplot_text::TextBackend`] using Parley, enabling shaping-aware
//! label metrics and drawing. Text is drawn as positioned glyph runs through
//! [`Surface::show_glyphs`](xyplot_core::Surface::show_glyphs).

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use kurbo::{Point, Size};
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{
    Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight,
    PositionedLayoutItem,
};
use smallvec::SmallVec;
use xyplot_core::{Glyph, GlyphRun, Surface};
use xyplot_text::{FontFamily, FontStyle, TextBackend, TextStyle, first_line};

/// A [`TextBackend`] backed by Parley.
///
/// Font descriptions are parsed the way desktop font pickers write them: a family name
/// optionally followed by weight and style words, e.g. `"DejaVu Sans Bold Italic"`. The
/// requested size is used as given.
pub struct ParleyTextBackend {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    display_scale: Option<f32>,
    quantize: bool,
}

impl core::fmt::Debug for ParleyTextBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextBackend")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextBackend {
    /// Creates a new Parley-backed text backend.
    ///
    /// Note: this uses Parley’s default system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            display_scale: None,
            quantize: true,
        }
    }

    /// Overrides the display scale passed to Parley.
    ///
    /// By default the surface's [`display_scale`](Surface::display_scale) is used.
    /// Measurements and glyph positions are scaled back into logical coordinates.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = Some(display_scale.max(0.0));
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    /// Splits a description into the family name and trailing weight/style words.
    ///
    /// Unknown words are part of the family name.
    pub fn parse_description(description: &str) -> (&str, FontWeight, ParleyFontStyle) {
        let mut weight = FontWeight::NORMAL;
        let mut style = ParleyFontStyle::Normal;
        let mut family = description.trim();
        while let Some((rest, word)) = family.rsplit_once(char::is_whitespace) {
            let w = |s: &str| word.eq_ignore_ascii_case(s);
            if w("italic") {
                style = ParleyFontStyle::Italic;
            } else if w("oblique") {
                style = ParleyFontStyle::Oblique(None);
            } else if w("bold") {
                weight = FontWeight::BOLD;
            } else if w("semi-bold") || w("semibold") || w("demi-bold") {
                weight = FontWeight::SEMI_BOLD;
            } else if w("medium") {
                weight = FontWeight::MEDIUM;
            } else if w("light") {
                weight = FontWeight::LIGHT;
            } else if w("thin") {
                weight = FontWeight::THIN;
            } else if w("heavy") || w("black") {
                weight = FontWeight::BLACK;
            } else if !(w("regular") || w("normal") || w("roman")) {
                break;
            }
            family = rest.trim_end();
        }
        (family, weight, style)
    }

    fn parley_font_stack(family: &FontFamily) -> FontStack<'_> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    fn clamped_f32(value: f64) -> f32 {
        if !value.is_finite() {
            return 0.0;
        }
        let value = value.max(0.0);
        if value >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                value as f32
            }
        }
    }

    fn scale_for(&self, surface: &dyn Surface) -> f32 {
        let scale = self
            .display_scale
            .unwrap_or_else(|| Self::clamped_f32(surface.display_scale()));
        scale.max(1.0e-6)
    }

    fn layout(&self, text: &str, style: &TextStyle, scale: f32) -> parley::Layout<()> {
        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::clamped_f32(
            style.font_size,
        )));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            style.font_style,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight.0,
        ))));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());
        layout
    }
}

impl Default for ParleyTextBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBackend for ParleyTextBackend {
    fn name(&self) -> &'static str {
        "parley"
    }

    fn describe(&self, family: &str, size: f64) -> TextStyle {
        let (name, weight, style) = Self::parse_description(family);
        let font_family = if name.is_empty() {
            log::debug!("parley: no family in {family:?}, using sans-serif");
            FontFamily::SansSerif
        } else {
            FontFamily::parse(name)
        };
        let font_style = match style {
            ParleyFontStyle::Normal => FontStyle::Normal,
            ParleyFontStyle::Italic => FontStyle::Italic,
            ParleyFontStyle::Oblique(_) => FontStyle::Oblique,
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "weights produced by parse_description are small whole numbers"
        )]
        let font_weight = xyplot_text::FontWeight(weight.value() as u16);
        TextStyle {
            font_size: size,
            font_family,
            font_weight,
            font_style,
        }
    }

    fn measure(&self, surface: &dyn Surface, style: &TextStyle, text: &str) -> Size {
        let text = first_line(text);
        if text.is_empty() {
            return Size::ZERO;
        }

        let scale = self.scale_for(surface);
        let layout = self.layout(text, style, scale);
        let Some(line) = layout.lines().next() else {
            return Size::ZERO;
        };

        let m = line.metrics();
        let scale = f64::from(scale);
        Size::new(
            f64::from(m.advance) / scale,
            f64::from(m.ascent + m.descent + m.leading) / scale,
        )
    }

    fn draw(&self, surface: &mut dyn Surface, style: &TextStyle, origin: Point, text: &str) {
        let text = first_line(text);
        if text.is_empty() {
            return;
        }

        let scale = self.scale_for(surface);
        let layout = self.layout(text, style, scale);
        let Some(line) = layout.lines().next() else {
            return;
        };

        // Glyph positions are relative to the top of the layout; put the line's baseline at
        // `origin`.
        let baseline = f64::from(line.metrics().baseline / scale);
        let run_origin = Point::new(origin.x, origin.y - baseline);

        for item in line.items() {
            let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                continue;
            };
            let run = glyph_run.run();
            let glyphs: SmallVec<[Glyph; 32]> = glyph_run
                .positioned_glyphs()
                .map(|g| Glyph {
                    id: g.id,
                    x: g.x / scale,
                    y: g.y / scale,
                })
                .collect();
            surface.show_glyphs(&GlyphRun {
                font: run.font(),
                font_size: run.font_size() / scale,
                origin: run_origin,
                glyphs: &glyphs,
                text: text.get(run.text_range()).unwrap_or(""),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use xyplot_core::RecordingSurface;
    use xyplot_text::{TextEngine, contract};

    use super::*;

    #[test]
    fn parley_backend_satisfies_contract() {
        contract::check_all(ParleyTextBackend::new);
    }

    #[test]
    fn parley_measure_is_nonzero_for_nonempty_text() {
        let engine = TextEngine::new(ParleyTextBackend::new());
        let font = engine.create("Sans", 12.0);
        let size = font.measure(&RecordingSurface::new(), "Hello");
        assert!(size.width > 0.0);
        assert!(size.height > 0.0);
    }

    #[test]
    fn requested_size_is_used_as_given() {
        let engine = TextEngine::new(ParleyTextBackend::new());
        let font = engine.create("Serif", 10.0);
        assert_eq!(font.style().font_size, 10.0);
        assert_eq!(font.style().font_family, FontFamily::Serif);
    }

    #[test]
    fn description_words_set_weight_and_style() {
        let (family, weight, style) =
            ParleyTextBackend::parse_description("DejaVu Sans Bold Italic");
        assert_eq!(family, "DejaVu Sans");
        assert_eq!(weight, FontWeight::BOLD);
        assert_eq!(style, ParleyFontStyle::Italic);

        let (family, weight, style) = ParleyTextBackend::parse_description("Monospace");
        assert_eq!(family, "Monospace");
        assert_eq!(weight, FontWeight::NORMAL);
        assert_eq!(style, ParleyFontStyle::Normal);

        let (family, ..) = ParleyTextBackend::parse_description("Bold");
        assert_eq!(family, "Bold", "a lone word is always the family");
    }

    #[test]
    fn describe_maps_parsed_words_into_style() {
        let backend = ParleyTextBackend::new();
        let style = backend.describe("Sans Light Oblique", 9.0);
        assert_eq!(style.font_family, FontFamily::SansSerif);
        assert_eq!(style.font_weight, xyplot_text::FontWeight::LIGHT);
        assert_eq!(style.font_style, FontStyle::Oblique);

        let fallback = backend.describe("   ", 9.0);
        assert_eq!(fallback.font_family, FontFamily::SansSerif);
    }

    #[test]
    fn measurement_is_in_logical_units_at_any_display_scale() {
        let engine = TextEngine::new(ParleyTextBackend::new());
        let font = engine.create("Sans", 12.0);
        let at_1x = font.measure(&RecordingSurface::new(), "Scale");
        let at_2x = font.measure(&RecordingSurface::new().with_display_scale(2.0), "Scale");
        assert!(
            (at_1x.width - at_2x.width).abs() <= 1.0,
            "{at_1x:?} vs {at_2x:?}"
        );
    }

    #[test]
    fn draw_places_baseline_at_origin() {
        let engine = TextEngine::new(ParleyTextBackend::new());
        let font = engine.create("Sans", 12.0);
        let mut surface = RecordingSurface::new();
        font.draw(&mut surface, Point::new(5.0, 40.0), "Tick");

        let (origin, text) = surface.texts().next().expect("a glyph run");
        assert_eq!(origin.x, 5.0);
        assert!(origin.y < 40.0, "run origin should sit above the baseline");
        assert_eq!(text, "Tick");
    }
}
