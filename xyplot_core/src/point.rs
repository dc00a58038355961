// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A point in data space.
///
/// This is structurally the same as [`kurbo::Point`], but it is kept as a distinct type so data
/// coordinates can't be handed to a surface without going through a scale mapper.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataPoint {
    /// Horizontal data coordinate.
    pub x: f64,
    /// Vertical data coordinate.
    pub y: f64,
}

impl DataPoint {
    /// Creates a new data-space point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
