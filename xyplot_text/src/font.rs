// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;

use kurbo::{Point, Size};
use xyplot_core::Surface;

use crate::{TextBackend, TextStyle};

/// The text backend selected for a plot.
///
/// Cloning is cheap; clones share the backend.
#[derive(Clone)]
pub struct TextEngine {
    backend: Rc<dyn TextBackend>,
}

impl core::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextEngine")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl TextEngine {
    /// Creates an engine around `backend`.
    pub fn new(backend: impl TextBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Creates an engine around an already shared backend.
    #[must_use]
    pub fn from_shared(backend: Rc<dyn TextBackend>) -> Self {
        Self { backend }
    }

    /// The backend's name.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Creates a font handle for `family` at `size` points.
    #[must_use]
    pub fn create(&self, family: &str, size: f64) -> Font {
        let style = self.backend.describe(family, size);
        log::trace!(
            "{}: created font {family:?} {size} -> {style:?}",
            self.backend.name()
        );
        Font {
            backend: Rc::clone(&self.backend),
            family: family.into(),
            size,
            style,
        }
    }
}

/// A font handle.
///
/// The handle owns the backend's description of the font. The description is released when
/// the handle is dropped or [`destroy`](Self::destroy)ed, and before it is replaced by
/// [`select`](Self::select), so every description is released exactly once.
pub struct Font {
    backend: Rc<dyn TextBackend>,
    family: String,
    size: f64,
    style: TextStyle,
}

impl core::fmt::Debug for Font {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Font")
            .field("backend", &self.backend.name())
            .field("family", &self.family)
            .field("size", &self.size)
            .field("style", &self.style)
            .finish()
    }
}

impl Font {
    /// Re-describes this handle in place.
    pub fn select(&mut self, family: &str, size: f64) {
        self.backend.release(&self.style);
        self.style = self.backend.describe(family, size);
        self.family.clear();
        self.family.push_str(family);
        self.size = size;
    }

    /// The requested family name.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The requested point size.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The backend's effective description.
    #[must_use]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Measures the first line of `text` as drawn with this font on `surface`.
    #[must_use]
    pub fn measure(&self, surface: &dyn Surface, text: &str) -> Size {
        self.backend.measure(surface, &self.style, text)
    }

    /// Draws the first line of `text` with its baseline starting at `origin`.
    pub fn draw(&self, surface: &mut dyn Surface, origin: Point, text: &str) {
        self.backend.draw(surface, &self.style, origin, text);
    }

    /// Releases the font.
    pub fn destroy(self) {}
}

impl Drop for Font {
    fn drop(&mut self) {
        self.backend.release(&self.style);
    }
}

/// Releases `font` if there is one.
pub fn destroy_font(font: Option<Font>) {
    if let Some(font) = font {
        font.destroy();
    }
}
