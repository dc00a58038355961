// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement and drawing for plot decorations.
//!
//! Axes need to measure and draw short single-line labels. How glyphs are produced is left to a
//! [`TextBackend`]: a shaping engine (see `xyplot_text_parley`) or the small built-in
//! [`MinimalTextBackend`]. Both satisfy the same contract, so chart code only ever deals with a
//! [`TextEngine`] and the [`Font`] handles it creates.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned family names), and
//! - backend-agnostic: the active backend is chosen at runtime by whoever builds the
//!   [`TextEngine`].

#![no_std]

extern crate alloc;

mod backend;
#[cfg(any(test, feature = "contract"))]
pub mod contract;
mod font;
mod minimal;

use alloc::sync::Arc;

pub use backend::TextBackend;
pub use font::{Font, TextEngine, destroy_font};
pub use minimal::MinimalTextBackend;

/// A backend's resolved description of a font.
///
/// This is intentionally minimal: it’s just enough to make chart labels consistent. Richer
/// typography (attributed text, shaping options, fallback) belongs in the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Effective font size in surface units (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }

    /// Maps a family name onto a generic family where one is recognised.
    ///
    /// Matching is ASCII case-insensitive and accepts the common aliases (`sans`, `mono`).
    /// Anything else becomes [`FontFamily::Named`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        let is = |s: &str| name.eq_ignore_ascii_case(s);
        if is("serif") {
            Self::Serif
        } else if is("sans") || is("sans-serif") || is("sans serif") {
            Self::SansSerif
        } else if is("mono") || is("monospace") {
            Self::Monospace
        } else {
            Self::Named(name.into())
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Thin weight (`100`).
    pub const THIN: Self = Self(100);
    /// Light weight (`300`).
    pub const LIGHT: Self = Self(300);
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (`500`).
    pub const MEDIUM: Self = Self(500);
    /// Semi-bold weight (`600`).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
    /// Heavy weight (`900`).
    pub const HEAVY: Self = Self(900);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Returns the first line of `text`.
///
/// Backends only lay out a single line; everything after the first `\n` is ignored.
#[must_use]
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}
