// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared geometry and drawing-surface contract for `xyplot`.
//!
//! Plot items work in two coordinate systems:
//! - **data space**, the units of the plotted values ([`DataPoint`]), and
//! - **device space**, the coordinates of the drawing target ([`kurbo::Point`]).
//!
//! Only a scale mapper converts between the two; they are deliberately different types.
//!
//! Drawing goes through the [`Surface`] trait, a small stroke/text primitive API in the style
//! of a 2-D vector context. [`RecordingSurface`] implements it as a display list, which is what
//! tests and the SVG demo consume.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
mod float;
mod point;
mod recording;
mod surface;

pub use point::DataPoint;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Glyph, GlyphRun, Surface, line_cosmetic};
