// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract between a plot and the things drawn on it.

use core::fmt;

use kurbo::Rect;
use xyplot_core::Surface;
use xyplot_text::Font;

use crate::ScaleMapper;

/// Everything an [`Item`] needs to draw itself.
pub struct DrawContext<'a> {
    /// Where to draw.
    pub surface: &'a mut dyn Surface,
    /// Data to device mapping.
    pub scale: &'a dyn ScaleMapper,
    /// Font for labels.
    pub font: &'a Font,
}

impl<'a> DrawContext<'a> {
    /// Bundles the pieces of a draw call.
    pub fn new(surface: &'a mut dyn Surface, scale: &'a dyn ScaleMapper, font: &'a Font) -> Self {
        Self {
            surface,
            scale,
            font,
        }
    }
}

impl fmt::Debug for DrawContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawContext")
            .field("font", self.font)
            .finish_non_exhaustive()
    }
}

/// A drawable plot element.
pub trait Item {
    /// Paints the item.
    fn draw(&self, cx: &mut DrawContext<'_>);

    /// The data-space rectangle the item covers, if known.
    fn data_rect(&self, cx: &DrawContext<'_>) -> Option<Rect>;

    /// The device-space rectangle the item covers, if known.
    fn figure_rect(&self, cx: &DrawContext<'_>) -> Option<Rect>;
}
