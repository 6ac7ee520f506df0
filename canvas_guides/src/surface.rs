// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 2D drawing surface guides are painted onto.
//!
//! [`Canvas`] mirrors the handful of immediate-mode operations a 2D canvas
//! context offers: transform state that is saved and restored in pairs,
//! rectangle fills, and text drawn at an origin with an alignment and a
//! baseline. [`RecordingCanvas`] records those calls for inspection.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use canvas_guides_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
use kurbo::{Affine, Point, Rect, Vec2};
use peniko::Color;

/// Horizontal alignment of text relative to its draw origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The origin is at the start of the text.
    #[default]
    Left,
    /// The origin is at the horizontal center of the text.
    Center,
    /// The origin is at the end of the text.
    Right,
}

/// Vertical placement of text relative to its draw origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The origin is on the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The origin is at the top of the em box.
    Top,
}

/// An immediate-mode 2D drawing surface.
///
/// Transforms accumulate on a current transform matrix; `save` and `restore`
/// push and pop it (together with font, fill color and alpha) and are always
/// called in pairs by the renderer.
pub trait Canvas: TextMeasurer {
    /// Whether the surface rotates around the current origin natively.
    ///
    /// Surfaces answering `false` are driven through [`Canvas::transform`]
    /// with an explicit rotation matrix instead.
    fn supports_native_rotation(&self) -> bool;

    /// Pushes the drawing state.
    fn save(&mut self);

    /// Pops the drawing state pushed by the matching [`Canvas::save`].
    fn restore(&mut self);

    /// Moves the origin.
    fn translate(&mut self, offset: Vec2);

    /// Rotates around the current origin by `radians` (clockwise on a y-down surface).
    fn rotate(&mut self, radians: f64);

    /// Multiplies the current transform by `transform`.
    fn transform(&mut self, transform: Affine);

    /// Sets the font for subsequent text.
    fn set_font(&mut self, style: &TextStyle);

    /// Sets the fill color for subsequent fills and text.
    fn set_fill_color(&mut self, color: Color);

    /// Sets the global alpha in `[0, 1]`.
    fn set_global_alpha(&mut self, alpha: f64);

    /// Fills `rect` with the current fill color.
    fn fill_rect(&mut self, rect: Rect);

    /// Clears `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Draws a single line of text.
    fn fill_text(&mut self, text: &str, origin: Point, align: TextAlign, baseline: TextBaseline);
}

/// One recorded [`Canvas`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Canvas::save`].
    Save,
    /// [`Canvas::restore`].
    Restore,
    /// [`Canvas::translate`].
    Translate(Vec2),
    /// [`Canvas::rotate`].
    Rotate(f64),
    /// [`Canvas::transform`].
    Transform(Affine),
    /// [`Canvas::set_font`].
    SetFont(TextStyle),
    /// [`Canvas::set_fill_color`].
    SetFillColor(Color),
    /// [`Canvas::set_global_alpha`].
    SetGlobalAlpha(f64),
    /// [`Canvas::fill_rect`].
    FillRect(Rect),
    /// [`Canvas::clear_rect`].
    ClearRect(Rect),
    /// [`Canvas::fill_text`].
    FillText {
        /// The drawn string.
        text: String,
        /// Draw origin in the current transform.
        origin: Point,
        /// Horizontal alignment.
        align: TextAlign,
        /// Vertical baseline.
        baseline: TextBaseline,
    },
}

/// A [`Canvas`] that records every call and measures with `M`.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas<M = HeuristicTextMeasurer> {
    measurer: M,
    native_rotation: bool,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// A recorder using [`HeuristicTextMeasurer`] and emulated rotation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: TextMeasurer> RecordingCanvas<M> {
    /// A recorder measuring text with `measurer`.
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            native_rotation: false,
            commands: Vec::new(),
        }
    }

    /// Sets what [`Canvas::supports_native_rotation`] reports.
    pub fn with_native_rotation(mut self, native: bool) -> Self {
        self.native_rotation = native;
        self
    }

    /// All recorded calls, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The recorded [`DrawCommand::FillText`] calls as `(text, origin, align)`.
    pub fn texts(&self) -> Vec<(&str, Point, TextAlign)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText {
                    text,
                    origin,
                    align,
                    ..
                } => Some((text.as_str(), *origin, *align)),
                _ => None,
            })
            .collect()
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingCanvas<M> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        self.measurer.measure(text, style)
    }
}

impl<M: TextMeasurer> Canvas for RecordingCanvas<M> {
    fn supports_native_rotation(&self) -> bool {
        self.native_rotation
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(DrawCommand::Rotate(radians));
    }

    fn transform(&mut self, transform: Affine) {
        self.commands.push(DrawCommand::Transform(transform));
    }

    fn set_font(&mut self, style: &TextStyle) {
        self.commands.push(DrawCommand::SetFont(style.clone()));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn fill_text(&mut self, text: &str, origin: Point, align: TextAlign, baseline: TextBaseline) {
        self.commands.push(DrawCommand::FillText {
            text: String::from(text),
            origin,
            align,
            baseline,
        });
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.save();
        canvas.translate(Vec2::new(1.0, 2.0));
        canvas.fill_text("a", Point::ZERO, TextAlign::Right, TextBaseline::Top);
        canvas.restore();

        assert_eq!(canvas.commands().len(), 4);
        assert_eq!(canvas.commands()[0], DrawCommand::Save);
        assert_eq!(canvas.texts(), [("a", Point::ZERO, TextAlign::Right)]);
        assert_eq!(canvas.commands()[3], DrawCommand::Restore);
    }

    #[test]
    fn measures_through_the_measurer() {
        let canvas = RecordingCanvas::new();
        let m = canvas.measure("ab", &TextStyle::new(10.0));
        assert_eq!(m.advance_width, 12.0);
        assert!(!canvas.supports_native_rotation());
        assert!(canvas.with_native_rotation(true).supports_native_rotation());
    }
}
