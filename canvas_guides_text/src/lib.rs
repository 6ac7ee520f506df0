// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for canvas-drawn chart guides.
//!
//! Tick labels and legend rows are placed from measured text widths: x-axis
//! labels are centered on their tick, y-axis labels are right-aligned against
//! the plot, rotated labels need a label box, and the legend panel is as wide
//! as its widest label. Text shaping stays with the drawing surface, so guide
//! code only depends on the tiny [`TextMeasurer`] interface defined here.
//!
//! Fonts are configured the way a 2D canvas context takes them, as a CSS font
//! shorthand (`"12px sans-serif"`); see [`parse_css_font`].

#![no_std]

extern crate alloc;

mod font;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

pub use font::{FontParseError, parse_css_font};

/// Measures single lines of text.
///
/// Drawing surfaces implement this with their native metrics; tests and demos
/// can use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Measure `text` as a single line in the given style.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Font inputs for measurement and drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif style of the given pixel size.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// The vertical advance used for one line of canvas text.
    ///
    /// Canvas text layout treats the font's pixel size as its ascent, so a
    /// `12px` font advances baselines by 12.
    #[must_use]
    pub fn ascent(&self) -> f64 {
        self.font_size
    }

    /// Formats the style back into a CSS font shorthand.
    #[must_use]
    pub fn to_css(&self) -> String {
        let style = match self.font_style {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        };
        format!(
            "{style} {} {}px {}",
            self.font_weight.0,
            self.font_size,
            self.font_family.as_css_family()
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

impl core::str::FromStr for TextStyle {
    type Err = FontParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_css_font(s)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
    /// A named family (e.g. `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family as it appears in a CSS font declaration.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    Normal,
    /// Italic.
    Italic,
    /// Oblique.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Fixed-ratio measurer for demos and tests.
///
/// Every glyph is `0.6em` wide; ascent is `0.8em` and descent `0.2em`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_chars_and_size() {
        let m = HeuristicTextMeasurer.measure("abcd", &TextStyle::new(10.0));
        assert!((m.advance_width - 24.0).abs() < 1e-9, "4 glyphs of 6px");
        assert!((m.height() - 10.0).abs() < 1e-9, "ascent + descent is 1em");
    }

    #[test]
    fn ascent_is_the_pixel_size() {
        assert_eq!(TextStyle::new(14.0).ascent(), 14.0);
    }

    #[test]
    fn css_round_trips_through_from_str() {
        let style = TextStyle {
            font_size: 11.0,
            font_family: FontFamily::Named("Helvetica Neue".into()),
            font_weight: FontWeight::BOLD,
            font_style: FontStyle::Italic,
        };
        let parsed: TextStyle = style.to_css().parse().expect("css output parses");
        assert_eq!(parsed, style);
    }
}
