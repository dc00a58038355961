// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behaviour every [`TextBackend`] must share.
//!
//! Backend crates run [`check_all`] from their tests (enable the `contract` feature as a
//! dev-dependency). Each check panics with a description of the violated property.

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::{Point, Size};
use xyplot_core::{RecordingSurface, Surface};

use crate::{TextBackend, TextEngine, TextStyle};

/// Wraps a backend and counts descriptions handed out and released.
#[derive(Debug)]
pub struct CountingBackend<B> {
    inner: B,
    described: Cell<usize>,
    released: Cell<usize>,
}

impl<B: TextBackend> CountingBackend<B> {
    /// Wraps `inner`.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            described: Cell::new(0),
            released: Cell::new(0),
        }
    }

    /// Number of [`TextBackend::describe`] calls so far.
    pub fn described(&self) -> usize {
        self.described.get()
    }

    /// Number of [`TextBackend::release`] calls so far.
    pub fn released(&self) -> usize {
        self.released.get()
    }

    /// Descriptions currently alive.
    pub fn outstanding(&self) -> usize {
        self.described() - self.released()
    }
}

impl<B: TextBackend> TextBackend for CountingBackend<B> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn describe(&self, family: &str, size: f64) -> TextStyle {
        self.described.set(self.described.get() + 1);
        self.inner.describe(family, size)
    }

    fn release(&self, style: &TextStyle) {
        self.released.set(self.released.get() + 1);
        self.inner.release(style);
    }

    fn measure(&self, surface: &dyn Surface, style: &TextStyle, text: &str) -> Size {
        self.inner.measure(surface, style, text)
    }

    fn draw(&self, surface: &mut dyn Surface, style: &TextStyle, origin: Point, text: &str) {
        self.inner.draw(surface, style, origin, text);
    }
}

const FAMILIES: &[&str] = &["Sans", "Serif", "Monospace", "DejaVu Sans", "", "No Such Face"];
const SIZES: &[f64] = &[6.0, 10.0, 12.0, 24.0];

/// Runs every check against backends built by `make`.
pub fn check_all<B: TextBackend + 'static>(make: impl Fn() -> B) {
    check_create_destroy_balances(&make);
    check_empty_text_measures_zero(&make);
    check_width_is_monotonic(&make);
    check_reselect_changes_extents(&make);
    check_measure_leaves_surface_alone(&make);
    check_draw_paints_only_non_empty_text(&make);
}

/// Creating then destroying a font (with any number of reselects) leaves nothing behind.
pub fn check_create_destroy_balances<B: TextBackend + 'static>(make: &impl Fn() -> B) {
    let counting = Rc::new(CountingBackend::new(make()));
    let engine = TextEngine::from_shared(counting.clone());
    for family in FAMILIES {
        for size in SIZES {
            engine.create(family, *size).destroy();
        }
    }
    let mut font = engine.create("Sans", 10.0);
    for family in FAMILIES {
        font.select(family, 11.0);
    }
    assert_eq!(
        counting.outstanding(),
        1,
        "{}: only the live font should hold a description",
        counting.name()
    );
    drop(font);
    assert_eq!(
        counting.outstanding(),
        0,
        "{}: described {} but released {}",
        counting.name(),
        counting.described(),
        counting.released()
    );
}

/// Measuring the empty string gives a zero-area rectangle.
pub fn check_empty_text_measures_zero<B: TextBackend + 'static>(make: &impl Fn() -> B) {
    let engine = TextEngine::new(make());
    let surface = RecordingSurface::new();
    for family in FAMILIES {
        let font = engine.create(family, 12.0);
        let size = font.measure(&surface, "");
        assert!(
            size.width * size.height <= 1.0e-9,
            "{}: empty text measured {size:?} with {family:?}",
            engine.backend_name()
        );
    }
}

/// Appending characters never makes a string (noticeably) narrower.
pub fn check_width_is_monotonic<B: TextBackend + 'static>(make: &impl Fn() -> B) {
    const TEXT: &str = "Axis 0.25 -1e3 Wiggly";
    // Kerning may pull a pair together slightly.
    const TOLERANCE: f64 = 0.5;

    let engine = TextEngine::new(make());
    let surface = RecordingSurface::new();
    let font = engine.create("Sans", 12.0);
    let widths: Vec<f64> = TEXT
        .char_indices()
        .map(|(i, c)| font.measure(&surface, &TEXT[..i + c.len_utf8()]).width)
        .collect();
    for pair in widths.windows(2) {
        assert!(
            pair[1] + TOLERANCE >= pair[0],
            "{}: width shrank from {} to {}",
            engine.backend_name(),
            pair[0],
            pair[1]
        );
    }
    assert!(
        widths.last().copied().unwrap_or(0.0) > 0.0,
        "{}: non-empty text measured zero width",
        engine.backend_name()
    );
}

/// Reselecting a font at a different size changes its measurement.
pub fn check_reselect_changes_extents<B: TextBackend + 'static>(make: &impl Fn() -> B) {
    let engine = TextEngine::new(make());
    let surface = RecordingSurface::new();
    let mut font = engine.create("Sans", 10.0);
    let before = font.measure(&surface, "Hello 123");
    font.select("Serif", 20.0);
    let after = font.measure(&surface, "Hello 123");
    assert_ne!(
        before,
        after,
        "{}: reselecting did not change the extents",
        engine.backend_name()
    );
}

/// Measuring paints nothing, and drawing in between does not change what a string measures.
pub fn check_measure_leaves_surface_alone<B: TextBackend + 'static>(make: &impl Fn() -> B) {
    let engine = TextEngine::new(make());
    let mut surface = RecordingSurface::new();
    let font = engine.create("Sans", 12.0);
    let before = font.measure(&surface, "measure me");
    assert!(
        surface.commands().is_empty(),
        "{}: measuring painted",
        engine.backend_name()
    );
    font.draw(&mut surface, Point::new(3.0, 30.0), "measure me");
    let after = font.measure(&surface, "measure me");
    assert_eq!(
        before,
        after,
        "{}: drawing changed the measurement",
        engine.backend_name()
    );
}

/// Drawing the empty string paints nothing; other text paints in the source color.
pub fn check_draw_paints_only_non_empty_text<B: TextBackend + 'static>(make: &impl Fn() -> B) {
    let engine = TextEngine::new(make());
    let font = engine.create("Sans", 12.0);

    let mut surface = RecordingSurface::new();
    font.draw(&mut surface, Point::new(10.0, 20.0), "");
    assert!(
        surface.commands().is_empty(),
        "{}: drawing empty text painted",
        engine.backend_name()
    );

    font.draw(&mut surface, Point::new(10.0, 20.0), "Label");
    assert!(
        surface.texts().count() >= 1,
        "{}: drawing text painted nothing",
        engine.backend_name()
    );
}
