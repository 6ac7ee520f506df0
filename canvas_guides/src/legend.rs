// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas legend: one swatch + label row per listed series.
//!
//! Layout is split from drawing so panel geometry can be checked without a
//! surface: [`layout_legend`] measures and positions the panel and
//! [`draw_legend`] paints it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use canvas_guides_text::{TextMeasurer, TextStyle};
use kurbo::{Point, Rect, Size};
use log::trace;
use peniko::Color;

use crate::options::{GridOptions, LABEL_COLOR, LegendOptions, OptionParseError};
use crate::plot::PlotGeometry;
use crate::surface::{Canvas, TextAlign, TextBaseline};

/// Compass corner of the plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendPosition {
    /// Top right.
    #[default]
    NorthEast,
    /// Top left.
    NorthWest,
    /// Bottom right.
    SouthEast,
    /// Bottom left.
    SouthWest,
}

impl LegendPosition {
    /// Whether the legend sits along the top edge.
    pub fn is_north(self) -> bool {
        matches!(self, Self::NorthEast | Self::NorthWest)
    }

    /// Whether the legend sits along the right edge.
    pub fn is_east(self) -> bool {
        matches!(self, Self::NorthEast | Self::SouthEast)
    }
}

impl core::str::FromStr for LegendPosition {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ne" => Ok(Self::NorthEast),
            "nw" => Ok(Self::NorthWest),
            "se" => Ok(Self::SouthEast),
            "sw" => Ok(Self::SouthWest),
            _ => Err(OptionParseError::UnknownLegendPosition(String::from(s))),
        }
    }
}

/// A series as seen by the legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Series label; unlabeled series are not listed.
    pub label: Option<String>,
    /// Series color.
    pub color: Color,
    /// Whether the series asks to be listed.
    pub show_in_legend: bool,
}

impl LegendEntry {
    /// A listed series.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: Some(label.into()),
            color,
            show_in_legend: true,
        }
    }

    /// An unlabeled series.
    pub fn unlabeled(color: Color) -> Self {
        Self {
            label: None,
            color,
            show_in_legend: true,
        }
    }

    /// Hide the series from the legend.
    pub fn hidden(mut self) -> Self {
        self.show_in_legend = false;
        self
    }

    /// Whether the series gets a legend row.
    pub fn is_listed(&self) -> bool {
        self.show_in_legend && self.label.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// One laid-out legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Text to draw (after the label formatter).
    pub label: String,
    /// Swatch color.
    pub color: Color,
    /// Top of the row.
    pub y: f64,
}

/// A positioned legend panel.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    /// Panel bounds on the canvas.
    pub panel: Rect,
    /// Rows in series order.
    pub rows: Vec<LegendRow>,
    /// Whether the panel was placed from the compass position (not a container).
    pub compass_placed: bool,
}

/// Lays out the legend for `entries`.
///
/// Returns `None` when the legend is hidden or no series is listed.
pub fn layout_legend<M: TextMeasurer + ?Sized>(
    entries: &[LegendEntry],
    legend: &LegendOptions,
    grid: &GridOptions,
    geometry: &PlotGeometry,
    style: &TextStyle,
    measurer: &M,
) -> Option<LegendLayout> {
    if !legend.show {
        return None;
    }

    let labels: Vec<(String, Color)> = entries
        .iter()
        .filter(|e| {
            let listed = e.is_listed();
            if !listed {
                trace!("legend: skipping unlisted series {:?}", e.label);
            }
            listed
        })
        .map(|e| {
            let raw = e.label.as_deref().unwrap_or_default();
            let label = match &legend.label_formatter {
                Some(f) => f(raw, e),
                None => String::from(raw),
            };
            (label, e.color)
        })
        .collect();
    if labels.is_empty() {
        return None;
    }

    let metrics = legend.metrics;
    let max_label = labels
        .iter()
        .map(|(l, _)| measurer.measure(l, style).advance_width)
        .fold(0.0_f64, f64::max);
    let size = Size::new(
        max_label + metrics.swatch_width,
        labels.len() as f64 * metrics.row_height,
    );

    let (origin, compass_placed) = match legend.container {
        Some(origin) => (origin, false),
        None => (compass_origin(legend, grid, geometry, size), true),
    };

    let rows = labels
        .into_iter()
        .enumerate()
        .map(|(i, (label, color))| LegendRow {
            label,
            color,
            y: origin.y + i as f64 * metrics.row_height,
        })
        .collect();

    Some(LegendLayout {
        panel: Rect::from_origin_size(origin, size),
        rows,
        compass_placed,
    })
}

fn compass_origin(
    legend: &LegendOptions,
    grid: &GridOptions,
    geometry: &PlotGeometry,
    size: Size,
) -> Point {
    let border = grid.border_width;
    let offset = geometry.offset;
    let m = legend.margin;
    let y = if legend.position.is_north() {
        offset.y + border + m.y
    } else {
        offset.y + border + geometry.size.height - m.y - size.height
    };
    let x = if legend.position.is_east() {
        offset.x + border + geometry.size.width - m.x - size.width
    } else {
        offset.x + border + m.x
    };
    Point::new(x.round(), y.round())
}

/// Paints a laid-out legend.
///
/// The background panel is only painted for compass placement, and only when
/// the opacity is non-zero and a background color (the legend's, else the
/// grid's) is configured.
pub fn draw_legend<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &LegendLayout,
    legend: &LegendOptions,
    grid: &GridOptions,
    style: &TextStyle,
) {
    if layout.compass_placed
        && legend.background_opacity != 0.0
        && let Some(color) = legend.background_color.or(grid.background_color)
    {
        canvas.set_global_alpha(legend.background_opacity);
        canvas.set_fill_color(color);
        canvas.fill_rect(layout.panel);
        canvas.set_global_alpha(1.0);
    }

    let rh = legend.metrics.row_height;
    let x = layout.panel.x0;
    for row in &layout.rows {
        let y = row.y;
        canvas.set_fill_color(legend.label_box_border_color);
        canvas.fill_rect(Rect::new(x, y, x + rh, y + rh - 4.0));
        canvas.clear_rect(Rect::new(x + 1.0, y + 1.0, x + rh - 1.0, y + rh - 5.0));

        canvas.set_fill_color(row.color);
        canvas.fill_rect(Rect::new(x + 2.0, y + 2.0, x + rh - 2.0, y + rh - 6.0));

        canvas.set_fill_color(LABEL_COLOR);
        canvas.fill_text(
            &row.label,
            Point::new(x + legend.metrics.swatch_width, y + style.ascent()),
            TextAlign::Left,
            TextBaseline::Alphabetic,
        );
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use canvas_guides_text::TextMetrics;
    use kurbo::Vec2;
    use peniko::color::palette::css;

    use super::*;
    use crate::surface::{DrawCommand, RecordingCanvas};

    /// Fixed widths per label.
    struct FixedWidths;

    impl TextMeasurer for FixedWidths {
        fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
            let w = match text {
                "alpha" => 30.0,
                "bravo" => 45.0,
                "charlie" => 20.0,
                _ => 10.0,
            };
            TextMetrics {
                advance_width: w,
                ascent: style.font_size,
                descent: 0.0,
            }
        }
    }

    fn geometry() -> PlotGeometry {
        PlotGeometry::new(Point::new(50.0, 20.0), Size::new(400.0, 300.0))
    }

    fn entries() -> Vec<LegendEntry> {
        vec![
            LegendEntry::new("alpha", css::RED),
            LegendEntry::new("bravo", css::GREEN),
            LegendEntry::new("charlie", css::BLUE),
        ]
    }

    #[test]
    fn panel_size_from_widest_label() {
        let layout = layout_legend(
            &entries(),
            &LegendOptions::default(),
            &GridOptions::default(),
            &geometry(),
            &TextStyle::default(),
            &FixedWidths,
        )
        .expect("three listed series");
        assert_eq!(layout.panel.width(), 45.0 + 22.0);
        assert_eq!(layout.panel.height(), 3.0 * 18.0);
        assert_eq!(layout.rows.len(), 3);
        assert_eq!(layout.rows[1].y - layout.rows[0].y, 18.0);
    }

    #[test]
    fn unlabeled_and_hidden_series_take_no_row() {
        let mut e = entries();
        e.push(LegendEntry::unlabeled(css::BLACK));
        e.push(LegendEntry::new("", css::BLACK));
        e.push(LegendEntry::new("delta", css::BLACK).hidden());
        let layout = layout_legend(
            &e,
            &LegendOptions::default(),
            &GridOptions::default(),
            &geometry(),
            &TextStyle::default(),
            &FixedWidths,
        )
        .expect("listed series remain");
        assert_eq!(layout.rows.len(), 3);

        let none = layout_legend(
            &[LegendEntry::unlabeled(css::BLACK)],
            &LegendOptions::default(),
            &GridOptions::default(),
            &geometry(),
            &TextStyle::default(),
            &FixedWidths,
        );
        assert!(none.is_none());
    }

    #[test]
    fn compass_corners() {
        let grid = GridOptions::default();
        let at = |position| {
            let legend = LegendOptions::default()
                .with_position(position)
                .with_margin(Vec2::new(5.0, 8.0));
            let style = TextStyle::default();
            layout_legend(&entries(), &legend, &grid, &geometry(), &style, &FixedWidths)
                .expect("listed series")
                .panel
                .origin()
        };
        // x: 50 + 2 + 400 - 5 - 67; y: 20 + 2 + 8
        assert_eq!(at(LegendPosition::NorthEast), Point::new(380.0, 30.0));
        assert_eq!(at(LegendPosition::NorthWest), Point::new(57.0, 30.0));
        // y: 20 + 2 + 300 - 8 - 54
        assert_eq!(at(LegendPosition::SouthWest), Point::new(57.0, 260.0));
        assert_eq!(at(LegendPosition::SouthEast), Point::new(380.0, 260.0));
    }

    #[test]
    fn formatter_rewrites_labels() {
        let legend = LegendOptions::default().with_label_formatter(|l, _| alloc::format!("<{l}>"));
        let layout = layout_legend(
            &entries(),
            &legend,
            &GridOptions::default(),
            &geometry(),
            &TextStyle::default(),
            &FixedWidths,
        )
        .expect("listed series");
        assert_eq!(layout.rows[0].label, "<alpha>");
    }

    #[test]
    fn background_needs_compass_placement_and_a_color() {
        let grid = GridOptions::default().with_background_color(css::WHITE);
        let style = TextStyle::default();
        let draw = |legend: &LegendOptions| {
            let layout =
                layout_legend(&entries(), legend, &grid, &geometry(), &style, &FixedWidths)
                    .expect("listed series");
            let mut canvas = RecordingCanvas::new();
            draw_legend(&mut canvas, &layout, legend, &grid, &style);
            canvas
                .commands()
                .iter()
                .any(|c| *c == DrawCommand::SetGlobalAlpha(0.85))
        };
        assert!(draw(&LegendOptions::default()));
        assert!(!draw(&LegendOptions::default().with_background_opacity(0.0)));
        assert!(!draw(&LegendOptions::default().with_container(Point::new(1.0, 1.0))));
    }

    #[test]
    fn rows_draw_swatch_then_label() {
        let legend = LegendOptions::default().with_container(Point::new(10.0, 100.0));
        let grid = GridOptions::default();
        let style = TextStyle::default();
        let layout = layout_legend(&entries(), &legend, &grid, &geometry(), &style, &FixedWidths)
            .expect("listed series");
        let mut canvas = RecordingCanvas::new();
        draw_legend(&mut canvas, &layout, &legend, &grid, &style);

        let cmds = canvas.commands();
        assert_eq!(cmds[1], DrawCommand::FillRect(Rect::new(10.0, 100.0, 28.0, 114.0)));
        assert_eq!(cmds[2], DrawCommand::ClearRect(Rect::new(11.0, 101.0, 27.0, 113.0)));
        assert_eq!(cmds[3], DrawCommand::SetFillColor(css::RED));
        assert_eq!(cmds[4], DrawCommand::FillRect(Rect::new(12.0, 102.0, 26.0, 112.0)));
        assert_eq!(
            canvas.texts()[2],
            ("charlie", Point::new(32.0, 136.0 + 12.0), TextAlign::Left)
        );
    }

    #[test]
    fn positions_parse() {
        assert_eq!("sw".parse::<LegendPosition>(), Ok(LegendPosition::SouthWest));
        assert_eq!(" NE ".parse::<LegendPosition>(), Ok(LegendPosition::NorthEast));
        assert!("north".parse::<LegendPosition>().is_err());
    }
}
