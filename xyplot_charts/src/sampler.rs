// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick sampling: where an axis puts its ticks and what it writes under them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::{format_fixed, precision_for_step};
use crate::scale::{nice_step, nice_ticks};

/// One position along an axis, with an optional label.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSample {
    /// Position in data units along the axis.
    pub coord: f64,
    /// Text drawn under the tick, if any.
    pub label: Option<String>,
}

impl TickSample {
    /// A labelled sample.
    pub fn new(coord: f64, label: impl Into<String>) -> Self {
        Self {
            coord,
            label: Some(label.into()),
        }
    }

    /// A tick without a label.
    pub fn unlabeled(coord: f64) -> Self {
        Self { coord, label: None }
    }
}

/// Supplies an axis with its ticks.
///
/// The owning axis calls [`update`](Self::update) whenever its range changes and draws
/// [`samples`](Self::samples) in the order given, without reordering or validating them.
pub trait TickSampler {
    /// Recomputes the samples for the range `min..=max`.
    fn update(&mut self, min: f64, max: f64) {
        let _ = (min, max);
    }

    /// The current samples, ascending by coordinate.
    fn samples(&self) -> &[TickSample];
}

impl TickSampler for Vec<TickSample> {
    fn samples(&self) -> &[TickSample] {
        self
    }
}

/// How an [`AxisSampler`] produces its samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleMode {
    /// Evenly spaced ticks on a 1/2/5 × 10ⁿ grid, about `hint` intervals across the range.
    Decimal {
        /// Desired number of intervals.
        hint: usize,
    },
    /// Samples supplied through [`AxisSampler::set_samples`].
    Manual,
}

/// The default tick sampler.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSampler {
    mode: SampleMode,
    precision: Option<usize>,
    samples: Vec<TickSample>,
}

impl Default for AxisSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisSampler {
    /// Interval count used when none is given.
    pub const DEFAULT_HINT: usize = 5;

    /// An empty sampler in decimal mode.
    pub fn new() -> Self {
        Self {
            mode: SampleMode::Decimal {
                hint: Self::DEFAULT_HINT,
            },
            precision: None,
            samples: Vec::new(),
        }
    }

    /// A sampler in manual mode holding `samples`.
    pub fn manual(samples: impl IntoIterator<Item = TickSample>) -> Self {
        let mut sampler = Self::new();
        sampler.set_samples(samples);
        sampler
    }

    /// Switches to decimal mode with about `hint` intervals per range.
    ///
    /// Nothing is sampled until the next [`update`](TickSampler::update).
    pub fn with_hint(mut self, hint: usize) -> Self {
        self.mode = SampleMode::Decimal { hint };
        self
    }

    /// Formats decimal labels with exactly `precision` decimals instead of deriving it from
    /// the tick step.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// The active mode.
    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    /// The configured label precision, if any.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Switches to decimal mode and samples `min..=max` right away.
    pub fn auto_sample_decimal(&mut self, min: f64, max: f64, hint: usize) {
        self.mode = SampleMode::Decimal { hint };
        self.resample(min, max);
    }

    /// Switches to manual mode with `samples`, sorted by coordinate.
    pub fn set_samples(&mut self, samples: impl IntoIterator<Item = TickSample>) {
        self.mode = SampleMode::Manual;
        self.samples.clear();
        self.samples.extend(samples);
        self.samples.sort_by(|a, b| a.coord.total_cmp(&b.coord));
    }

    /// Removes every sample. The mode is kept.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    fn resample(&mut self, min: f64, max: f64) {
        self.samples.clear();
        let SampleMode::Decimal { hint } = self.mode else {
            return;
        };
        if hint == 0 || !min.is_finite() || !max.is_finite() {
            log::debug!("no decimal ticks for {min}..={max} with hint {hint}");
            return;
        }
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        if lo == hi {
            // No step to go by; use as many decimals as the value itself needs.
            let precision = self.precision.unwrap_or_else(|| precision_for_step(lo));
            self.samples.push(TickSample::new(lo, format_fixed(lo, precision)));
            return;
        }

        let step = nice_step((hi - lo) / hint as f64);
        let precision = self.precision.unwrap_or_else(|| precision_for_step(step));
        let slack = step * 1.0e-9;
        self.samples.extend(
            nice_ticks(lo, hi, hint)
                .into_iter()
                .filter(|v| *v >= lo - slack && *v <= hi + slack)
                .map(|v| TickSample::new(v, format_fixed(v, precision))),
        );
        let collides = self.samples.windows(2).any(|w| w[0].label == w[1].label);
        if self.precision.is_none() && collides {
            log::debug!(
                "{precision} decimals cannot tell ticks {step} apart over {lo}..={hi}, dropping labels"
            );
            for sample in &mut self.samples {
                sample.label = None;
            }
        }
        log::trace!(
            "sampled {} decimal ticks over {lo}..={hi} (step {step})",
            self.samples.len()
        );
    }
}

impl TickSampler for AxisSampler {
    fn update(&mut self, min: f64, max: f64) {
        if matches!(self.mode, SampleMode::Decimal { .. }) {
            self.resample(min, max);
        }
    }

    fn samples(&self) -> &[TickSample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn labels(sampler: &AxisSampler) -> Vec<&str> {
        sampler
            .samples()
            .iter()
            .filter_map(|s| s.label.as_deref())
            .collect()
    }

    #[test]
    fn new_sampler_is_empty_decimal() {
        let sampler = AxisSampler::new();
        assert!(sampler.samples().is_empty());
        assert_eq!(
            sampler.mode(),
            SampleMode::Decimal {
                hint: AxisSampler::DEFAULT_HINT
            }
        );
    }

    #[test]
    fn decimal_ticks_stay_in_range_and_ascend() {
        let mut sampler = AxisSampler::new();
        sampler.auto_sample_decimal(0.3, 9.7, 5);
        let coords: Vec<f64> = sampler.samples().iter().map(|s| s.coord).collect();
        assert_eq!(coords, [2.0, 4.0, 6.0, 8.0]);
        assert_eq!(labels(&sampler), ["2", "4", "6", "8"]);
    }

    #[test]
    fn labels_follow_step_or_fixed_precision() {
        let mut sampler = AxisSampler::new();
        sampler.auto_sample_decimal(0.0, 1.0, 2);
        assert_eq!(labels(&sampler), ["0.0", "0.5", "1.0"]);

        let mut fixed = AxisSampler::new().with_precision(2);
        fixed.auto_sample_decimal(0.0, 10.0, 2);
        assert_eq!(labels(&fixed), ["0.00", "5.00", "10.00"]);
    }

    #[test]
    fn update_resamples_in_decimal_mode() {
        let mut sampler = AxisSampler::new();
        sampler.update(0.0, 10.0);
        assert_eq!(sampler.samples().len(), 6);
        sampler.update(10.0, 0.0);
        assert_eq!(sampler.samples().len(), 6);
        assert_eq!(sampler.samples()[0].coord, 0.0);
    }

    #[test]
    fn degenerate_ranges() {
        let mut sampler = AxisSampler::new();
        sampler.auto_sample_decimal(4.0, 4.0, 5);
        assert_eq!(sampler.samples(), [TickSample::new(4.0, "4")]);

        sampler.auto_sample_decimal(0.25, 0.25, 5);
        assert_eq!(sampler.samples(), [TickSample::new(0.25, "0.25")]);

        sampler.auto_sample_decimal(-3.5, -3.5, 5);
        assert_eq!(sampler.samples(), [TickSample::new(-3.5, "-3.5")]);

        sampler.auto_sample_decimal(0.0, 1.0, 0);
        assert!(sampler.samples().is_empty());

        sampler.auto_sample_decimal(f64::NEG_INFINITY, 1.0, 5);
        assert!(sampler.samples().is_empty());
    }

    #[test]
    fn indistinguishable_labels_are_dropped() {
        let mut sampler = AxisSampler::new();
        sampler.auto_sample_decimal(1.0, 1.0 + 1e-14, 5);
        assert!(sampler.samples().len() >= 2);
        for pair in sampler.samples().windows(2) {
            assert!(
                pair[0].label.is_none() || pair[0].label != pair[1].label,
                "{:?} and {:?} share a label",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn hint_takes_effect_on_update() {
        let mut sampler = AxisSampler::new().with_hint(2);
        assert_eq!(sampler.mode(), SampleMode::Decimal { hint: 2 });
        assert!(sampler.samples().is_empty());
        sampler.update(0.0, 10.0);
        assert_eq!(labels(&sampler), ["0", "5", "10"]);
    }

    #[test]
    fn manual_samples_are_sorted_and_kept() {
        let mut sampler = AxisSampler::manual(vec![
            TickSample::new(10.0, "hi"),
            TickSample::unlabeled(0.0),
            TickSample::new(5.0, "mid"),
        ]);
        assert_eq!(sampler.mode(), SampleMode::Manual);
        sampler.update(-100.0, 100.0);
        let coords: Vec<f64> = sampler.samples().iter().map(|s| s.coord).collect();
        assert_eq!(coords, [0.0, 5.0, 10.0]);
        assert_eq!(labels(&sampler), ["mid", "hi"]);

        sampler.clear();
        assert!(sampler.samples().is_empty());
        assert_eq!(sampler.mode(), SampleMode::Manual);
    }

    #[test]
    fn plain_vectors_are_samplers() {
        let mut ticks = vec![TickSample::new(1.0, "1")];
        ticks.update(0.0, 2.0);
        assert_eq!(ticks.samples().len(), 1);
    }
}
