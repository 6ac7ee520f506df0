// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An SVG-backed [`Canvas`].

use std::fmt::Write as _;

use canvas_guides::{
    Canvas, HeuristicTextMeasurer, TextAlign, TextBaseline, TextMeasurer, TextMetrics, TextStyle,
};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use peniko::Color;
use peniko::color::palette::css;

#[derive(Clone, Debug)]
struct State {
    transform: Affine,
    font: TextStyle,
    fill: Color,
    alpha: f64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            font: TextStyle::default(),
            fill: css::BLACK,
            alpha: 1.0,
        }
    }
}

/// Collects canvas calls as SVG elements.
///
/// Every element carries the full current transform as a `matrix(..)`, so
/// native rotations and emulated rotation matrices end up identical.
#[derive(Debug)]
pub(crate) struct SvgCanvas {
    size: Size,
    native_rotation: bool,
    state: State,
    stack: Vec<State>,
    body: String,
}

impl SvgCanvas {
    pub(crate) fn new(size: Size, native_rotation: bool) -> Self {
        Self {
            size,
            native_rotation,
            state: State::default(),
            stack: Vec::new(),
            body: String::new(),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        let _ = writeln!(
            out,
            r##"<rect width="{}" height="{}" fill="#ffffff"/>"##,
            self.size.width, self.size.height
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn push_rect(&mut self, rect: Rect, fill: &str, opacity: f64) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height()
        );
        self.push_transform();
        self.push_fill(fill, opacity);
        self.body.push_str("/>\n");
    }

    fn push_transform(&mut self) {
        if self.state.transform != Affine::IDENTITY {
            let [a, b, c, d, e, f] = self.state.transform.as_coeffs();
            let _ = write!(self.body, r#" transform="matrix({a} {b} {c} {d} {e} {f})""#);
        }
    }

    fn push_fill(&mut self, fill: &str, opacity: f64) {
        let _ = write!(self.body, r#" fill="{fill}""#);
        if opacity < 1.0 {
            let _ = write!(self.body, r#" fill-opacity="{opacity}""#);
        }
    }

    fn fill_paint(&self) -> (String, f64) {
        let rgba = self.state.fill.to_rgba8();
        let hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
        (hex, self.state.alpha * f64::from(rgba.a) / 255.0)
    }
}

impl TextMeasurer for SvgCanvas {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        HeuristicTextMeasurer.measure(text, style)
    }
}

impl Canvas for SvgCanvas {
    fn supports_native_rotation(&self) -> bool {
        self.native_rotation
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform *= Affine::translate(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform *= Affine::rotate(radians);
    }

    fn transform(&mut self, transform: Affine) {
        self.state.transform *= transform;
    }

    fn set_font(&mut self, style: &TextStyle) {
        self.state.font = style.clone();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let (fill, opacity) = self.fill_paint();
        self.push_rect(rect, &fill, opacity);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.push_rect(rect, "#ffffff", 1.0);
    }

    fn fill_text(&mut self, text: &str, origin: Point, align: TextAlign, baseline: TextBaseline) {
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Top => "text-before-edge",
        };
        let font = escape_xml(&self.state.font.to_css());
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" style="font: {font}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
            origin.x, origin.y
        );
        self.push_transform();
        let (fill, opacity) = self.fill_paint();
        self.push_fill(&fill, opacity);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
