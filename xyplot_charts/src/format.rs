// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Largest number of decimals a label is formatted with.
pub const MAX_PRECISION: usize = 12;

/// Formats `v` with exactly `precision` decimals.
///
/// Values that round to zero print without a sign, so `-0.0001` at two decimals is `"0.00"`.
pub fn format_fixed(v: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let mut s = format!("{v:.precision$}");
    if s.starts_with('-') && s[1..].bytes().all(|b| b == b'0' || b == b'.') {
        s.remove(0);
    }
    s
}

/// Returns the number of decimals needed to tell ticks `step` apart.
///
/// A step of `0.25` needs two decimals, `5` needs none. Non-finite or non-positive steps fall
/// back to zero decimals.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    (0..=MAX_PRECISION)
        .find(|&p| {
            #[allow(clippy::cast_possible_truncation, reason = "p is at most MAX_PRECISION")]
            let scaled = step * 10_f64.powi(p as i32);
            (scaled - scaled.round()).abs() <= 1.0e-9 * scaled.max(1.0)
        })
        .unwrap_or(MAX_PRECISION)
}

/// Formats a tick value with as many decimals as the tick `step` calls for.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    format_fixed(v, precision_for_step(step))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fixed_precision_is_exact() {
        assert_eq!(format_fixed(2.5, 2), "2.50");
        assert_eq!(format_fixed(10.0, 0), "10");
        assert_eq!(format_fixed(-1.25, 1), "-1.2");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_fixed(-0.0, 0), "0");
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
    }

    #[test]
    fn step_precision_follows_step() {
        assert_eq!(precision_for_step(5.0), 0);
        assert_eq!(precision_for_step(0.5), 1);
        assert_eq!(precision_for_step(0.25), 2);
        assert_eq!(precision_for_step(0.0), 0);
        assert_eq!(precision_for_step(f64::NAN), 0);
        assert_eq!(format_tick_with_step(0.30000000000000004, 0.1), "0.3");
    }
}
