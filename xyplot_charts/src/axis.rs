// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis rendering.
//!
//! An [`Axis`] is a line across a data range at a fixed position on the other axis, with a
//! tick (and optionally a label) at every sample its [`TickSampler`] provides.

use kurbo::{Cap, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use xyplot_core::{DataPoint, line_cosmetic};

use crate::item::{DrawContext, Item};
use crate::sampler::{AxisSampler, TickSampler};

/// Which data axis an [`Axis`] runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Along x, at a fixed y.
    Horizontal,
    /// Along y, at a fixed x.
    Vertical,
}

/// Axis paint settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    /// Stroke and label color.
    pub color: Color,
    /// Color used instead of [`color`](Self::color) while the axis is selected.
    pub selected_color: Color,
    /// Stroke width in output pixels.
    pub line_width: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: css::DIM_GRAY,
            selected_color: css::BLUE,
            line_width: 1.0,
        }
    }
}

impl AxisStyle {
    /// Sets the stroke and label color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the selected-state color.
    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    /// Sets the stroke width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }
}

/// Tick and label placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    /// Tick length in device units.
    pub tick_length: f64,
    /// Distance from the axis line to the label baseline, in multiples of the height of
    /// [`reference_glyph`](Self::reference_glyph).
    pub label_offset: f64,
    /// Text whose measured height sets the label offset unit.
    pub reference_glyph: &'static str,
}

impl AxisLayout {
    /// Default [`tick_length`](Self::tick_length).
    pub const DEFAULT_TICK_LENGTH: f64 = 5.0;
    /// Default [`label_offset`](Self::label_offset).
    pub const DEFAULT_LABEL_OFFSET: f64 = 1.25;
    /// Default [`reference_glyph`](Self::reference_glyph). It has both an ascender and a
    /// descender.
    pub const DEFAULT_REFERENCE_GLYPH: &'static str = "dummy";
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            tick_length: Self::DEFAULT_TICK_LENGTH,
            label_offset: Self::DEFAULT_LABEL_OFFSET,
            reference_glyph: Self::DEFAULT_REFERENCE_GLYPH,
        }
    }
}

/// A chart axis.
#[derive(Clone, Debug)]
pub struct Axis<S = AxisSampler> {
    orientation: Orientation,
    min: f64,
    max: f64,
    anchor: f64,
    selected: bool,
    style: AxisStyle,
    layout: AxisLayout,
    sampler: S,
}

impl Axis<AxisSampler> {
    /// Creates an axis with the default sampler and an empty range at zero.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            min: 0.0,
            max: 0.0,
            anchor: 0.0,
            selected: false,
            style: AxisStyle::default(),
            layout: AxisLayout::default(),
            sampler: AxisSampler::new(),
        }
    }

    /// Creates a horizontal axis.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Creates a vertical axis.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }
}

impl<S: TickSampler> Axis<S> {
    /// Replaces the sampler, updating the new one for the current range.
    pub fn with_sampler<T: TickSampler>(self, mut sampler: T) -> Axis<T> {
        sampler.update(self.min, self.max);
        Axis {
            orientation: self.orientation,
            min: self.min,
            max: self.max,
            anchor: self.anchor,
            selected: self.selected,
            style: self.style,
            layout: self.layout,
            sampler,
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the tick and label placement.
    pub fn with_layout(mut self, layout: AxisLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the range along the axis and the position on the other axis.
    ///
    /// The values are stored as given. `min > max` is allowed.
    pub fn set_position(&mut self, min: f64, max: f64, anchor: f64) {
        if min > max {
            log::debug!("axis range is reversed: {min} > {max}");
        }
        self.min = min;
        self.max = max;
        self.anchor = anchor;
        self.sampler.update(min, max);
    }

    /// Range start.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Range end.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Position on the other axis.
    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// Returns `(min, max, anchor)`.
    pub fn position(&self) -> (f64, f64, f64) {
        (self.min, self.max, self.anchor)
    }

    /// Which data axis this runs along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The tick sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Mutable access to the sampler. The axis does not update it after changes made here.
    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    /// Paint settings.
    pub fn style(&self) -> &AxisStyle {
        &self.style
    }

    /// Tick and label placement.
    pub fn layout(&self) -> &AxisLayout {
        &self.layout
    }

    /// Marks the axis as selected, which switches it to the selected color.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Whether the axis is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    fn draw_horizontal(&self, cx: &mut DrawContext<'_>) {
        let surface = &mut *cx.surface;
        let ref_height = cx.font.measure(surface, self.layout.reference_glyph).height;
        let width = self.style.line_width;

        let p1 = cx.scale.map(DataPoint::new(self.min, self.anchor));
        let p2 = cx.scale.map(DataPoint::new(self.max, self.anchor));
        surface.new_path();
        line_cosmetic(surface, p1, p2, width);
        surface.stroke();

        for sample in self.sampler.samples() {
            let base = cx.scale.map(DataPoint::new(sample.coord, self.anchor));
            let top = Point::new(base.x, base.y - self.layout.tick_length);
            line_cosmetic(surface, base, top, width);
            surface.stroke();

            if let Some(label) = &sample.label {
                let extents = cx.font.measure(surface, label);
                let origin = Point::new(
                    base.x - extents.width / 2.0,
                    base.y + self.layout.label_offset * ref_height,
                );
                cx.font.draw(surface, origin, label);
            }
        }
    }

    fn draw_vertical(&self, cx: &mut DrawContext<'_>) {
        let p1 = cx.scale.map(DataPoint::new(self.anchor, self.min));
        let p2 = cx.scale.map(DataPoint::new(self.anchor, self.max));
        cx.surface.new_path();
        line_cosmetic(cx.surface, p1, p2, self.style.line_width);
        cx.surface.stroke();
        // Vertical axes carry no ticks or labels yet.
        log::trace!(
            "vertical axis drawn without {} ticks",
            self.sampler.samples().len()
        );
    }
}

impl<S: TickSampler> Item for Axis<S> {
    fn draw(&self, cx: &mut DrawContext<'_>) {
        let color = if self.selected {
            self.style.selected_color
        } else {
            self.style.color
        };
        cx.surface.set_line_width(self.style.line_width);
        cx.surface.set_line_cap(Cap::Round);
        cx.surface.set_source_color(color);

        match self.orientation {
            Orientation::Horizontal => self.draw_horizontal(cx),
            Orientation::Vertical => self.draw_vertical(cx),
        }
    }

    fn data_rect(&self, _cx: &DrawContext<'_>) -> Option<Rect> {
        None
    }

    fn figure_rect(&self, _cx: &DrawContext<'_>) -> Option<Rect> {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Affine;
    use xyplot_core::{DrawCommand, RecordingSurface};
    use xyplot_text::{MinimalTextBackend, TextEngine};

    use super::*;
    use crate::{SampleMode, ScaleMapper, TickSample, XyScale};

    const EPS: f64 = 1e-9;

    fn scale() -> XyScale {
        XyScale::new((0.0, 10.0), (0.0, 10.0), Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    fn three_ticks() -> Vec<TickSample> {
        vec![
            TickSample::new(0.0, "0"),
            TickSample::new(5.0, "5"),
            TickSample::new(10.0, "10"),
        ]
    }

    fn render<S: TickSampler>(axis: &Axis<S>, surface: &mut RecordingSurface) {
        let engine = TextEngine::new(MinimalTextBackend);
        let font = engine.create("Sans", 10.0);
        let scale = scale();
        let mut cx = DrawContext::new(surface, &scale, &font);
        axis.draw(&mut cx);
    }

    #[test]
    fn horizontal_axis_draws_line_ticks_and_centered_labels() {
        let mut axis = Axis::horizontal().with_sampler(three_ticks());
        axis.set_position(0.0, 10.0, 0.0);
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);

        let segments: Vec<_> = surface.segments().collect();
        assert_eq!(segments.len(), 4);
        let s = scale();
        assert_eq!(segments[0].0, s.map(DataPoint::new(0.0, 0.0)));
        assert_eq!(segments[0].1, s.map(DataPoint::new(10.0, 0.0)));

        let ticks = &segments[1..];
        for ((base, top), sample) in ticks.iter().zip(three_ticks()) {
            assert_eq!(*base, s.map(DataPoint::new(sample.coord, 0.0)));
            assert_eq!(top.x, base.x);
            assert!((base.y - top.y - 5.0).abs() < EPS);
        }

        // "Sans" at 10 is 12 effective; "dummy" has a descender so measures 12 high.
        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts.len(), 3);
        let engine = TextEngine::new(MinimalTextBackend);
        let font = engine.create("Sans", 10.0);
        for ((origin, text), (tick, _)) in texts.iter().zip(ticks) {
            let width = font.measure(&surface, text).width;
            assert!((origin.x + width / 2.0 - tick.x).abs() < EPS, "{text}");
            assert!((origin.y - (tick.y + 1.25 * 12.0)).abs() < EPS, "{text}");
        }
        assert!((texts[1].0.x - 46.64).abs() < EPS);
        assert!((texts[1].0.y - 115.0).abs() < EPS);
    }

    #[test]
    fn position_reads_back_exactly() {
        let mut axis = Axis::horizontal();
        axis.set_position(0.1, 0.7, -3.3);
        assert_eq!(axis.min(), 0.1);
        assert_eq!(axis.max(), 0.7);
        assert_eq!(axis.anchor(), -3.3);
        assert_eq!(axis.position(), (0.1, 0.7, -3.3));
    }

    #[test]
    fn vertical_axis_draws_only_its_line() {
        let mut axis = Axis::vertical().with_sampler(three_ticks());
        axis.set_position(0.0, 10.0, 0.0);
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);

        let segments: Vec<_> = surface.segments().collect();
        assert_eq!(
            segments,
            [(Point::new(0.0, 100.0), Point::new(0.0, 0.0))]
        );
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn empty_sampler_draws_just_the_line() {
        let mut axis = Axis::horizontal().with_sampler(Vec::<TickSample>::new());
        axis.set_position(0.0, 10.0, 5.0);
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);
        assert_eq!(surface.commands().len(), 1);
        assert_eq!(
            surface.segments().next(),
            Some((Point::new(0.0, 50.0), Point::new(100.0, 50.0)))
        );
    }

    #[test]
    fn unlabeled_ticks_draw_no_text() {
        let mut axis = Axis::horizontal()
            .with_sampler(AxisSampler::manual([TickSample::unlabeled(2.0)]));
        axis.set_position(0.0, 10.0, 0.0);
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);
        assert_eq!(surface.segments().count(), 2);
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn strokes_use_style_and_selection() {
        let mut axis = Axis::horizontal();
        axis.set_position(0.0, 10.0, 0.0);
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);
        for cmd in surface.commands() {
            if let DrawCommand::Stroke { color, cap, .. } = cmd {
                assert_eq!(*color, css::DIM_GRAY);
                assert_eq!(*cap, Cap::Round);
            }
        }

        axis.set_selected(true);
        assert!(axis.is_selected());
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);
        assert!(!surface.commands().is_empty());
        for cmd in surface.commands() {
            let (DrawCommand::Stroke { color, .. } | DrawCommand::Text { color, .. }) = cmd
            else {
                panic!("unexpected command {cmd:?}");
            };
            assert_eq!(*color, css::BLUE);
        }
    }

    #[test]
    fn line_width_is_cosmetic() {
        let mut axis = Axis::horizontal().with_style(AxisStyle::default().with_line_width(2.0));
        axis.set_position(0.0, 10.0, 0.0);
        let mut surface = RecordingSurface::new().with_transform(Affine::scale(4.0));
        render(&axis, &mut surface);
        for cmd in surface.commands() {
            if let DrawCommand::Stroke { width, .. } = cmd {
                assert!((width - 0.5).abs() < EPS);
            }
        }
    }

    #[test]
    fn degenerate_ranges_still_draw() {
        let mut axis = Axis::horizontal().with_sampler(Vec::<TickSample>::new());
        axis.set_position(4.0, 4.0, 0.0);
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);
        assert_eq!(
            surface.segments().collect::<Vec<_>>(),
            [(Point::new(40.0, 100.0), Point::new(40.0, 100.0))]
        );

        axis.set_position(10.0, 0.0, 0.0);
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);
        assert_eq!(
            surface.segments().collect::<Vec<_>>(),
            [(Point::new(100.0, 100.0), Point::new(0.0, 100.0))]
        );
    }

    #[test]
    fn default_sampler_follows_position() {
        let mut axis = Axis::horizontal();
        assert!(axis.sampler().samples().is_empty());
        axis.set_position(0.0, 10.0, 0.0);
        assert_eq!(axis.sampler().mode(), SampleMode::Decimal { hint: 5 });
        assert_eq!(axis.sampler().samples().len(), 6);

        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);
        assert_eq!(surface.segments().count(), 7);
        assert_eq!(surface.texts().count(), 6);
    }

    #[test]
    fn rects_are_not_reported() {
        let axis = Axis::horizontal();
        let engine = TextEngine::new(MinimalTextBackend);
        let font = engine.create("Sans", 10.0);
        let scale = scale();
        let mut surface = RecordingSurface::new();
        let cx = DrawContext::new(&mut surface, &scale, &font);
        assert_eq!(axis.data_rect(&cx), None);
        assert_eq!(axis.figure_rect(&cx), None);
    }

    #[test]
    fn layout_constants_are_tunable() {
        assert_eq!(AxisLayout::default().tick_length, 5.0);
        let mut axis = Axis::horizontal()
            .with_layout(AxisLayout {
                tick_length: 8.0,
                ..AxisLayout::default()
            })
            .with_sampler(vec![TickSample::unlabeled(5.0)]);
        axis.set_position(0.0, 10.0, 0.0);
        let mut surface = RecordingSurface::new();
        render(&axis, &mut surface);
        let (base, top) = surface.segments().nth(1).unwrap_or_default();
        assert_eq!(base.y - top.y, 8.0);
    }
}
