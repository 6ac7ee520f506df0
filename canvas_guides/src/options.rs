// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid, canvas text, and legend configuration.
//!
//! These are caller-owned and read-only during a draw pass. Every struct has a
//! `Default` matching the stock plot look, plus `with_*` builders.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::{Point, Vec2};
use peniko::Color;
use peniko::color::palette::css;

use crate::legend::{LegendEntry, LegendPosition};

/// Errors from parsing string-valued options.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionParseError {
    /// A legend position other than `ne`, `nw`, `se` or `sw`.
    #[error("unknown legend position {0:?} (expected \"ne\", \"nw\", \"se\" or \"sw\")")]
    UnknownLegendPosition(String),
    /// A label position other than `high` or `low`.
    #[error("unknown label position {0:?} (expected \"high\" or \"low\")")]
    UnknownLabelPos(String),
}

/// Multi-line tick labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineBreaks {
    /// Split labels on whitespace into stacked lines.
    pub show: bool,
    /// Downward shift of a multi-line block on a top axis.
    pub margin_top: f64,
    /// Upward shift of a multi-line block on a bottom axis.
    pub margin_bottom: f64,
    /// Extra space between stacked lines.
    pub line_spacing: f64,
}

impl Default for LineBreaks {
    fn default() -> Self {
        Self {
            show: false,
            margin_top: 3.0,
            margin_bottom: 5.0,
            line_spacing: 1.0,
        }
    }
}

/// Drawing guides onto the canvas instead of as markup.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasTextOptions {
    /// Whether canvas text mode is on.
    pub show: bool,
    /// CSS font shorthand used for all guide text.
    pub font: String,
    /// Multi-line tick labels.
    pub line_breaks: LineBreaks,
}

impl Default for CanvasTextOptions {
    fn default() -> Self {
        Self {
            show: false,
            font: String::from("12px sans-serif"),
            line_breaks: LineBreaks::default(),
        }
    }
}

impl CanvasTextOptions {
    /// Canvas text mode with the default font.
    pub fn enabled() -> Self {
        Self {
            show: true,
            ..Self::default()
        }
    }

    /// Set the CSS font shorthand.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set the line break options.
    pub fn with_line_breaks(mut self, line_breaks: LineBreaks) -> Self {
        self.line_breaks = line_breaks;
        self
    }
}

/// Plot grid options relevant to guide placement.
#[derive(Clone, Debug, PartialEq)]
pub struct GridOptions {
    /// Whether the grid (and its tick labels) is shown.
    pub show: bool,
    /// Space between the plot border and tick labels.
    pub label_margin: f64,
    /// Width of the plot border.
    pub border_width: f64,
    /// Plot background, used behind the legend when it has no color of its own.
    pub background_color: Option<Color>,
    /// Canvas text mode.
    pub canvas_text: CanvasTextOptions,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            show: true,
            label_margin: 5.0,
            border_width: 2.0,
            background_color: None,
            canvas_text: CanvasTextOptions::default(),
        }
    }
}

impl GridOptions {
    /// Set the label margin.
    pub fn with_label_margin(mut self, label_margin: f64) -> Self {
        self.label_margin = label_margin;
        self
    }

    /// Set the border width.
    pub fn with_border_width(mut self, border_width: f64) -> Self {
        self.border_width = border_width;
        self
    }

    /// Set the plot background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set the canvas text options.
    pub fn with_canvas_text(mut self, canvas_text: CanvasTextOptions) -> Self {
        self.canvas_text = canvas_text;
        self
    }

    /// Total distance from the plot edge to tick labels.
    pub fn label_offset(&self) -> f64 {
        self.label_margin + self.border_width
    }
}

/// Fixed legend row geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendMetrics {
    /// Height of each legend row.
    pub row_height: f64,
    /// Width reserved for the color swatch, including its gap to the label.
    pub swatch_width: f64,
}

impl Default for LegendMetrics {
    fn default() -> Self {
        Self {
            row_height: 18.0,
            swatch_width: 22.0,
        }
    }
}

/// Rewrites a series label before it is shown in the legend.
pub type LegendLabelFormatter = Arc<dyn Fn(&str, &LegendEntry) -> String + Send + Sync>;

/// Legend options.
#[derive(Clone)]
pub struct LegendOptions {
    /// Whether the legend is shown.
    pub show: bool,
    /// Corner of the plot the legend is placed in.
    pub position: LegendPosition,
    /// Distance from the plot corner.
    pub margin: Vec2,
    /// Explicit top-left position on the canvas, overriding `position`.
    pub container: Option<Point>,
    /// Panel background; falls back to the grid background.
    pub background_color: Option<Color>,
    /// Opacity of the panel background.
    pub background_opacity: f64,
    /// Color of the swatch borders.
    pub label_box_border_color: Color,
    /// Optional label rewrite.
    pub label_formatter: Option<LegendLabelFormatter>,
    /// Row geometry.
    pub metrics: LegendMetrics,
}

impl core::fmt::Debug for LegendOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LegendOptions")
            .field("show", &self.show)
            .field("position", &self.position)
            .field("margin", &self.margin)
            .field("container", &self.container)
            .field("background_color", &self.background_color)
            .field("background_opacity", &self.background_opacity)
            .field("label_box_border_color", &self.label_box_border_color)
            .field("label_formatter", &self.label_formatter.is_some())
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            show: true,
            position: LegendPosition::NorthEast,
            margin: Vec2::new(5.0, 5.0),
            container: None,
            background_color: None,
            background_opacity: 0.85,
            label_box_border_color: Color::from_rgb8(0xcc, 0xcc, 0xcc),
            label_formatter: None,
            metrics: LegendMetrics::default(),
        }
    }
}

impl LegendOptions {
    /// Set whether the legend is shown.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Set the compass position.
    pub fn with_position(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }

    /// Set the margin from the plot corner.
    pub fn with_margin(mut self, margin: Vec2) -> Self {
        self.margin = margin;
        self
    }

    /// Place the legend at an explicit canvas position.
    pub fn with_container(mut self, origin: Point) -> Self {
        self.container = Some(origin);
        self
    }

    /// Set the panel background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set the panel background opacity.
    pub fn with_background_opacity(mut self, opacity: f64) -> Self {
        self.background_opacity = opacity;
        self
    }

    /// Set a label formatter.
    pub fn with_label_formatter(
        mut self,
        f: impl Fn(&str, &LegendEntry) -> String + Send + Sync + 'static,
    ) -> Self {
        self.label_formatter = Some(Arc::new(f));
        self
    }

    /// Set the row geometry.
    pub fn with_metrics(mut self, metrics: LegendMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Plot-wide options read by the renderer.
#[derive(Clone, Debug, Default)]
pub struct PlotOptions {
    /// Grid options.
    pub grid: GridOptions,
    /// Legend options.
    pub legend: LegendOptions,
}

impl PlotOptions {
    /// Set the grid options.
    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    /// Set the legend options.
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = legend;
        self
    }
}

/// Default text color for guides.
pub(crate) const LABEL_COLOR: Color = css::BLACK;
