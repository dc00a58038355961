// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A display-list [`Surface`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Cap, PathEl, Point};
use peniko::Color;
use peniko::color::palette::css;

use crate::surface::{Glyph, GlyphRun, Surface};

/// One painted operation captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A stroked path.
    Stroke {
        /// The path, in device space.
        path: BezPath,
        /// Stroke paint.
        color: Color,
        /// Stroke width in surface user units.
        width: f64,
        /// Stroke cap style.
        cap: Cap,
    },
    /// Text drawn through the built-in text facility.
    Text {
        /// Requested family name.
        family: String,
        /// Font size in surface units.
        size: f64,
        /// Left end of the baseline.
        origin: Point,
        /// The text.
        text: String,
        /// Fill paint.
        color: Color,
    },
    /// A shaped glyph run.
    Glyphs {
        /// Font size in surface units.
        font_size: f32,
        /// Run origin.
        origin: Point,
        /// The positioned glyphs.
        glyphs: Vec<Glyph>,
        /// Source text of the run.
        text: String,
        /// Fill paint.
        color: Color,
    },
}

impl DrawCommand {
    /// Returns the endpoints if this is a stroke of a single straight segment.
    #[must_use]
    pub fn as_segment(&self) -> Option<(Point, Point)> {
        let Self::Stroke { path, .. } = self else {
            return None;
        };
        let mut els = path.elements().iter();
        match (els.next(), els.next(), els.next()) {
            (Some(PathEl::MoveTo(a)), Some(PathEl::LineTo(b)), None) => Some((*a, *b)),
            _ => None,
        }
    }

    /// Returns the origin and text if this command draws text (either kind).
    #[must_use]
    pub fn as_text(&self) -> Option<(Point, &str)> {
        match self {
            Self::Text { origin, text, .. } | Self::Glyphs { origin, text, .. } => {
                Some((*origin, text.as_str()))
            }
            Self::Stroke { .. } => None,
        }
    }
}

/// A [`Surface`] that records every painted operation instead of rasterizing it.
///
/// Strokes capture the path together with the state at the time of the
/// [`stroke`](Surface::stroke) call, so the list can be replayed or inspected in order.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    path: BezPath,
    color: Color,
    line_width: f64,
    line_cap: Cap,
    transform: Affine,
    display_scale: f64,
}

impl RecordingSurface {
    /// Creates an empty recording with black paint, a width of 1 and butt caps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            path: BezPath::new(),
            color: css::BLACK,
            line_width: 1.0,
            line_cap: Cap::Butt,
            transform: Affine::IDENTITY,
            display_scale: 1.0,
        }
    }

    /// Sets the transform reported by [`Surface::transform`].
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the value reported by [`Surface::display_scale`].
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f64) -> Self {
        self.display_scale = display_scale;
        self
    }

    /// The recorded commands, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterates the endpoints of all single-segment strokes, in paint order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(DrawCommand::as_segment)
    }

    /// Iterates all text commands as `(origin, text)`, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }

    /// Takes the recorded commands, leaving the recording empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// The current source color.
    #[must_use]
    pub fn source_color(&self) -> Color {
        self.color
    }

    /// The current line width.
    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn set_source_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_line_cap(&mut self, cap: Cap) {
        self.line_cap = cap;
    }

    fn new_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        if self.path.elements().is_empty() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
    }

    fn stroke(&mut self) {
        if self.path.elements().is_empty() {
            return;
        }
        let path = core::mem::take(&mut self.path);
        self.commands.push(DrawCommand::Stroke {
            path,
            color: self.color,
            width: self.line_width,
            cap: self.line_cap,
        });
    }

    fn show_text(&mut self, family: &str, size: f64, origin: Point, text: &str) {
        self.commands.push(DrawCommand::Text {
            family: family.into(),
            size,
            origin,
            text: text.into(),
            color: self.color,
        });
    }

    fn show_glyphs(&mut self, run: &GlyphRun<'_>) {
        self.commands.push(DrawCommand::Glyphs {
            font_size: run.font_size,
            origin: run.origin,
            glyphs: run.glyphs.to_vec(),
            text: run.text.into(),
            color: self.color,
        });
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn display_scale(&self) -> f64 {
        self.display_scale
    }
}
