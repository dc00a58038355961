// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in text backend.

use kurbo::{Point, Size};
use xyplot_core::Surface;

use crate::{FontFamily, TextBackend, TextStyle, first_line};

/// A text backend that needs no font files or shaping engine.
///
/// Text is drawn through the surface's built-in facility ([`Surface::show_text`]) and measured
/// with fixed per-glyph advance classes. The face is chosen by family name alone, with normal
/// weight and style.
///
/// Built-in faces render visibly smaller than shaped text at the same nominal size, so the
/// effective size is the requested size plus [`SIZE_COMPENSATION`](Self::SIZE_COMPENSATION).
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalTextBackend;

impl MinimalTextBackend {
    /// Points added to every requested size.
    pub const SIZE_COMPENSATION: f64 = 2.0;

    /// Distance from baseline to the top of typical glyphs, in em.
    pub const ASCENT: f64 = 0.8;

    /// Distance from baseline to the bottom of descending glyphs, in em.
    pub const DESCENT: f64 = 0.2;

    /// Creates the backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Horizontal advance of `c`, in em.
    fn advance(c: char) -> f64 {
        match c {
            ' ' | 'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | '`' => 0.28,
            'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '{' | '}' | '-' | '/' => 0.36,
            'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.85,
            '0'..='9' => 0.56,
            'A'..='Z' => 0.68,
            c if c.is_ascii() && c.is_ascii_control() => 0.0,
            c if c.is_ascii() => 0.52,
            _ => 0.6,
        }
    }

    fn has_descender(c: char) -> bool {
        matches!(
            c,
            'g' | 'j' | 'p' | 'q' | 'y' | 'Q' | ',' | ';' | '(' | ')' | '[' | ']' | '{' | '}' | '|'
        )
    }
}

impl TextBackend for MinimalTextBackend {
    fn name(&self) -> &'static str {
        "minimal"
    }

    fn describe(&self, family: &str, size: f64) -> TextStyle {
        TextStyle::new(size + Self::SIZE_COMPENSATION)
            .with_family(FontFamily::Named(family.into()))
    }

    fn measure(&self, _surface: &dyn Surface, style: &TextStyle, text: &str) -> Size {
        let text = first_line(text);
        if text.is_empty() {
            return Size::ZERO;
        }
        let em = style.font_size.max(0.0);
        let width: f64 = text.chars().map(Self::advance).sum::<f64>() * em;
        let descent = if text.chars().any(Self::has_descender) {
            Self::DESCENT
        } else {
            0.0
        };
        Size::new(width, (Self::ASCENT + descent) * em)
    }

    fn draw(&self, surface: &mut dyn Surface, style: &TextStyle, origin: Point, text: &str) {
        let text = first_line(text);
        if text.is_empty() {
            return;
        }
        surface.show_text(
            style.font_family.as_css_family(),
            style.font_size,
            origin,
            text,
        );
    }
}
