// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface contract.

use kurbo::{Affine, Cap, Point};
use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A positioned glyph, relative to the origin of its [`GlyphRun`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Glyph {
    /// Glyph id in the run's font.
    pub id: u32,
    /// Horizontal offset from the run origin.
    pub x: f32,
    /// Vertical offset from the run origin.
    pub y: f32,
}

/// A run of shaped glyphs sharing one font and size.
///
/// Shaping text backends emit these; the surface only has to rasterize glyph outlines.
#[derive(Clone, Copy, Debug)]
pub struct GlyphRun<'a> {
    /// The font the glyph ids refer to.
    pub font: &'a peniko::FontData,
    /// Font size in surface units.
    pub font_size: f32,
    /// Run origin in device space. Glyph offsets are relative to it.
    pub origin: Point,
    /// The positioned glyphs.
    pub glyphs: &'a [Glyph],
    /// The source text of the run, for surfaces that export text rather than outlines.
    pub text: &'a str,
}

/// A primitive 2-D vector drawing API.
///
/// The model follows immediate-mode contexts such as Cairo or HTML canvas: state (source
/// color, line width, line cap) is set first, then a path is built with
/// [`move_to`](Self::move_to)/[`line_to`](Self::line_to) and painted with
/// [`stroke`](Self::stroke), which also clears the current path.
///
/// Coordinates are in device space.
pub trait Surface {
    /// Sets the paint used by subsequent strokes and text.
    fn set_source_color(&mut self, color: Color);

    /// Sets the stroke width in surface user units.
    fn set_line_width(&mut self, width: f64);

    /// Sets the stroke cap style.
    fn set_line_cap(&mut self, cap: Cap);

    /// Discards the current path.
    fn new_path(&mut self);

    /// Begins a new sub-path at `p`.
    fn move_to(&mut self, p: Point);

    /// Adds a straight segment from the current point to `p`.
    fn line_to(&mut self, p: Point);

    /// Strokes the current path with the current state, then clears it.
    fn stroke(&mut self);

    /// Draws `text` with the surface's built-in ("toy") text facility.
    ///
    /// `origin` is the left end of the baseline. The face is selected by family name only,
    /// with normal slant and weight.
    fn show_text(&mut self, family: &str, size: f64, origin: Point, text: &str);

    /// Draws a run of shaped glyphs in the current source color.
    fn show_glyphs(&mut self, run: &GlyphRun<'_>);

    /// The transform from surface user units to output pixels.
    fn transform(&self) -> Affine {
        Affine::IDENTITY
    }

    /// Output pixels per logical pixel (a device pixel ratio).
    fn display_scale(&self) -> f64 {
        1.0
    }
}

/// Adds a line segment whose stroke is `width` output pixels wide, whatever the surface
/// transform.
///
/// This sets the line width and adds the segment to the current path; the caller strokes.
pub fn line_cosmetic(surface: &mut dyn Surface, p1: Point, p2: Point, width: f64) {
    // Geometric mean of the two axis scales.
    let factor: f64 = surface.transform().determinant().abs().sqrt();
    let width = if factor.is_finite() && factor > 0.0 {
        width / factor
    } else {
        width
    };
    surface.set_line_width(width);
    surface.move_to(p1);
    surface.line_to(p2);
}
