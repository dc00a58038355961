// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping data space onto device space.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Rect};
use xyplot_core::DataPoint;

/// Converts data-space points into device-space points.
///
/// Implementations must be pure: mapping the same point twice gives the same result.
pub trait ScaleMapper {
    /// Maps `p` into device space.
    fn map(&self, p: DataPoint) -> Point;
}

impl<F: Fn(DataPoint) -> Point> ScaleMapper for F {
    fn map(&self, p: DataPoint) -> Point {
        self(p)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (y - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice" tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// The usual cartesian plot mapping.
///
/// The data rectangle `x_domain × y_domain` is stretched over `figure`, with the y axis
/// flipped so larger data values sit higher on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XyScale {
    x: ScaleLinear,
    y: ScaleLinear,
}

impl XyScale {
    /// Creates a scale showing `x_domain × y_domain` inside `figure`.
    pub fn new(x_domain: (f64, f64), y_domain: (f64, f64), figure: Rect) -> Self {
        Self {
            x: ScaleLinear::new(x_domain, (figure.x0, figure.x1)),
            y: ScaleLinear::new(y_domain, (figure.y1, figure.y0)),
        }
    }

    /// The horizontal component.
    pub fn x(&self) -> &ScaleLinear {
        &self.x
    }

    /// The vertical component (range runs bottom to top).
    pub fn y(&self) -> &ScaleLinear {
        &self.y
    }

    /// Maps a device point back into data space.
    pub fn unmap(&self, p: Point) -> DataPoint {
        DataPoint::new(self.x.invert(p.x), self.y.invert(p.y))
    }

    /// The data rectangle shown, as authored.
    pub fn data_rect(&self) -> Rect {
        let (x0, x1) = self.x.domain();
        let (y0, y1) = self.y.domain();
        Rect::new(x0, y0, x1, y1)
    }

    /// The device rectangle the data is mapped onto.
    pub fn figure_rect(&self) -> Rect {
        let (x0, x1) = self.x.range();
        let (y1, y0) = self.y.range();
        Rect::new(x0, y0, x1, y1)
    }
}

impl ScaleMapper for XyScale {
    fn map(&self, p: DataPoint) -> Point {
        Point::new(self.x.map(p.x), self.y.map(p.y))
    }
}

/// Returns roughly `count` evenly spaced ticks on a 1/2/5 × 10ⁿ grid that cover `[min, max]`.
///
/// The first and last tick may fall outside the range. Unordered bounds are swapped.
pub(crate) fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Rounds `step` to the nearest 1, 2, 5 or 10 times a power of ten.
pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite f64 is within ±324"
    )]
    let base = 10_f64.powi(power as i32);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn figure() -> XyScale {
        XyScale::new((0.0, 10.0), (0.0, 10.0), Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    #[test]
    fn linear_maps_and_inverts() {
        let s = ScaleLinear::new((0.0, 10.0), (100.0, 300.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(5.0), 200.0);
        assert_eq!(s.invert(300.0), 10.0);
    }

    #[test]
    fn zero_width_domain_maps_to_range_start() {
        let s = ScaleLinear::new((3.0, 3.0), (10.0, 20.0));
        assert_eq!(s.map(3.0), 10.0);
        assert_eq!(s.map(-7.0), 10.0);
    }

    #[test]
    fn xy_scale_flips_y() {
        let s = figure();
        assert_eq!(s.map(DataPoint::new(0.0, 0.0)), Point::new(0.0, 100.0));
        assert_eq!(s.map(DataPoint::new(10.0, 10.0)), Point::new(100.0, 0.0));
        assert_eq!(s.map(DataPoint::new(5.0, 2.5)), Point::new(50.0, 75.0));
        assert_eq!(s.unmap(Point::new(50.0, 75.0)), DataPoint::new(5.0, 2.5));
    }

    #[test]
    fn xy_scale_reports_its_rects() {
        let figure_rect = Rect::new(10.0, 20.0, 110.0, 220.0);
        let s = XyScale::new((-1.0, 1.0), (0.0, 4.0), figure_rect);
        assert_eq!(s.figure_rect(), figure_rect);
        assert_eq!(s.data_rect(), Rect::new(-1.0, 0.0, 1.0, 4.0));
    }

    #[test]
    fn closures_are_mappers() {
        let shift = |p: DataPoint| Point::new(p.x + 1.0, p.y - 1.0);
        assert_eq!(
            ScaleMapper::map(&shift, DataPoint::new(0.0, 0.0)),
            Point::new(1.0, -1.0)
        );
    }

    #[test]
    fn nice_steps_are_one_two_five() {
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(1.8), 2.0);
        assert_eq!(nice_step(4.0), 5.0);
        assert_eq!(nice_step(8.0), 10.0);
        assert!((nice_step(0.03) - 0.02).abs() < 1e-12);
        assert_eq!(nice_step(0.0), 0.0);
        assert_eq!(nice_step(f64::INFINITY), 0.0);
    }

    #[test]
    fn nice_ticks_cover_the_range() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), [0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(10.0, 0.0, 2), [0.0, 5.0, 10.0]);
        assert_eq!(nice_ticks(3.0, 3.0, 5), [3.0]);
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
        assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    }
}
