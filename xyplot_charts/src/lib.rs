// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart decorations for `xyplot` surfaces.
//!
//! - **Scales** ([`ScaleMapper`], [`XyScale`]) map data-space points into device space.
//! - **Samplers** ([`TickSampler`], [`AxisSampler`]) decide where ticks go and how they are
//!   labelled.
//! - **Items** ([`Item`]) draw themselves into a [`DrawContext`]; [`Axis`] is the one provided
//!   here.
//!
//! Text goes through an `xyplot_text::Font`, so the same axis renders with either text
//! backend.

#![no_std]

extern crate alloc;

mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod item;
mod sampler;
mod scale;

pub use axis::{Axis, AxisLayout, AxisStyle, Orientation};
pub use format::{MAX_PRECISION, format_fixed, format_tick_with_step, precision_for_step};
pub use item::{DrawContext, Item};
pub use sampler::{AxisSampler, SampleMode, TickSample, TickSampler};
pub use scale::{ScaleLinear, ScaleMapper, XyScale};
