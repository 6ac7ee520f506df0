// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart guides drawn straight onto a 2D canvas.
//!
//! This crate draws the text decorations of a plot (tick labels and the
//! legend) onto a raster drawing surface instead of leaving them as overlaid
//! markup. It has three parts:
//! - **Tick labels** ([`select_label`]): numeric or date formatting, with the
//!   axis title replacing the first or last visible tick.
//! - **Rotated-label geometry** ([`rotated_bounds`], [`placement_offset`]):
//!   where to put the origin of a label rotated by an arbitrary angle so it
//!   stays flush against its axis, for native and emulated rotation.
//! - **The renderer** ([`CanvasTextRenderer`]): walks a [`PlotHost`]'s axes
//!   and series and issues the draw calls on a [`Canvas`].
//!
//! Everything is recomputed on each draw pass. The only state kept between
//! passes is the [`RenderEnvironment`] the renderer probes once.
//!
//! ```
//! use canvas_guides::{
//!     Axis, AxisOptions, AxisSide, CanvasTextOptions, CanvasTextRenderer, GridOptions,
//!     LegendEntry, Plot, PlotGeometry, PlotOptions, RecordingCanvas,
//! };
//! use kurbo::{Point, Size};
//! use peniko::color::palette::css;
//!
//! let options = PlotOptions::default()
//!     .with_grid(GridOptions::default().with_canvas_text(CanvasTextOptions::enabled()));
//! let geometry = PlotGeometry::new(Point::new(40.0, 10.0), Size::new(300.0, 200.0));
//! let mut plot = Plot::new(options, geometry)
//!     .with_axis(Axis::new(AxisSide::Bottom, 0.0, 10.0, AxisOptions::default().with_title("x")))
//!     .with_entry(LegendEntry::new("series", css::STEEL_BLUE));
//! plot.label_ticks();
//!
//! let mut canvas = RecordingCanvas::new();
//! CanvasTextRenderer::new().draw(&mut plot, &mut canvas);
//! assert!(canvas.texts().iter().any(|(text, _, _)| *text == "series"));
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod axis;
mod environment;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod legend;
mod options;
mod plot;
mod renderer;
mod rotation;
mod scale;
mod surface;
mod tick_label;
mod ticks;
mod time;

pub use axis::{Axis, AxisBox, AxisMode, AxisOptions, AxisSide, Tick};
pub use environment::{RenderEnvironment, RotationBackend, rotation_matrix};
pub use format::{NumberFormat, to_fixed, to_precision};
pub use legend::{
    LegendEntry, LegendLayout, LegendPosition, LegendRow, draw_legend, layout_legend,
};
pub use options::{
    CanvasTextOptions, GridOptions, LegendLabelFormatter, LegendMetrics, LegendOptions,
    LineBreaks, OptionParseError, PlotOptions,
};
pub use plot::{MarkupLabels, Plot, PlotGeometry, PlotHost};
pub use renderer::CanvasTextRenderer;
pub use rotation::{
    AngleSign, BoxMeasure, OffsetRule, OffsetTerm, PlacementOffset, RotatedBox, offset_rule,
    placement_offset, rotated_bounds,
};
pub use surface::{Canvas, DrawCommand, RecordingCanvas, TextAlign, TextBaseline};
pub use tick_label::{LabelPos, select_label, title_substitution, visible_tick_values};
pub use ticks::{NumericTickSize, TickSize, generate_ticks, numeric_tick_size};
pub use time::{
    DEFAULT_MONTH_NAMES, TimeTickSize, TimeUnit, default_time_pattern, format_date,
    time_tick_size,
};

pub use canvas_guides_text::{
    FontParseError, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle,
};
