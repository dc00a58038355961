// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use xyplot_core::Surface;

use crate::TextStyle;

/// A text-rendering strategy.
///
/// Implementations can be:
/// - backed by a shaping engine (e.g. Parley), emitting glyph runs, or
/// - the built-in [`MinimalTextBackend`](crate::MinimalTextBackend), which uses the surface's
///   own text facility.
///
/// Every implementation must give the same answers to the same questions: where a string is
/// drawn, how large it is, and how a family/size request is honoured. Callers normally go
/// through [`TextEngine`](crate::TextEngine) and [`Font`](crate::Font) instead of calling these
/// methods directly.
pub trait TextBackend {
    /// A short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Resolves a family name and point size into a description.
    ///
    /// Malformed family names are not an error; the backend falls back to a default face.
    fn describe(&self, family: &str, size: f64) -> TextStyle;

    /// Releases whatever [`describe`](Self::describe) acquired for `style`.
    ///
    /// Called exactly once per description, when a [`Font`](crate::Font) drops it.
    fn release(&self, style: &TextStyle) {
        let _ = style;
    }

    /// Measures the first line of `text` as it would be drawn on `surface`.
    ///
    /// Returns the pixel width and height. Empty text measures [`Size::ZERO`]. The surface is
    /// only consulted, never modified.
    fn measure(&self, surface: &dyn Surface, style: &TextStyle, text: &str) -> Size;

    /// Draws the first line of `text` with its baseline starting at `origin`.
    ///
    /// The surface's current source color is used.
    fn draw(&self, surface: &mut dyn Surface, style: &TextStyle, origin: Point, text: &str);
}
