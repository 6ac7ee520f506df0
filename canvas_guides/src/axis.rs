// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes as the guide renderer sees them.
//!
//! An [`Axis`] is a per-draw-pass snapshot: a side, a resolved value range, a
//! tick spacing, the generated ticks with their labels, and the caller's
//! [`AxisOptions`]. It also carries the value to pixel mapping (`p2c`) and
//! the box the axis' labels are drawn in.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use log::trace;

use crate::format::NumberFormat;
use crate::scale::ScaleLinear;
use crate::tick_label::{LabelPos, select_label};
use crate::ticks::{TickSize, generate_ticks, numeric_tick_size};
use crate::time::time_tick_size;

/// Which edge of the plot an axis is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSide {
    /// Above the plot.
    Top,
    /// Below the plot.
    Bottom,
    /// Left of the plot.
    Left,
    /// Right of the plot.
    Right,
}

impl AxisSide {
    /// Whether the axis runs horizontally (top or bottom).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Where an axis' labels live, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisBox {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Inner padding between the box edge and the labels.
    pub padding: f64,
}

impl AxisBox {
    /// A box at `(left, top)` of the given size.
    pub fn new(top: f64, left: f64, width: f64, height: f64, padding: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
            padding,
        }
    }

    /// A box of `thickness` just outside `plot` on `side`.
    pub fn adjacent(side: AxisSide, plot: Rect, thickness: f64, padding: f64) -> Self {
        match side {
            AxisSide::Bottom => Self::new(plot.y1, plot.x0, plot.width(), thickness, padding),
            AxisSide::Top => Self::new(
                plot.y0 - thickness,
                plot.x0,
                plot.width(),
                thickness,
                padding,
            ),
            AxisSide::Left => Self::new(
                plot.y0,
                plot.x0 - thickness,
                thickness,
                plot.height(),
                padding,
            ),
            AxisSide::Right => Self::new(plot.y0, plot.x1, thickness, plot.height(), padding),
        }
    }
}

/// A generated tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position on the axis.
    pub value: f64,
    /// Label text, once labeled.
    pub label: Option<String>,
}

/// How axis values are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisMode {
    /// Plain numbers.
    #[default]
    Numeric,
    /// Milliseconds since the Unix epoch.
    Time,
}

/// Caller-owned axis configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisOptions {
    /// Title that replaces one extreme tick label.
    pub title: Option<String>,
    /// Which extreme tick the title replaces.
    pub label_pos: LabelPos,
    /// Tick label rotation in degrees (counter-clockwise; `0` is unrotated).
    pub label_angle: f64,
    /// Explicit range minimum.
    pub min: Option<f64>,
    /// Explicit range maximum.
    pub max: Option<f64>,
    /// Fraction of the data span added on each unpinned end of the range.
    pub autoscale_margin: Option<f64>,
    /// Fixed number of tick decimals.
    pub tick_decimals: Option<usize>,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Value interpretation.
    pub mode: AxisMode,
    /// Explicit time label pattern (see [`format_date`](crate::format_date)).
    pub time_format: Option<String>,
    /// Month names for `%b`.
    pub month_names: Option<[String; 12]>,
    /// Append am/pm to default time patterns that show hours.
    pub twelve_hour_clock: bool,
    /// Unrotated size of a tick label, used for rotated placement.
    pub label_box: Option<Size>,
    /// Numeric label formatting.
    pub number_format: NumberFormat,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            title: None,
            label_pos: LabelPos::High,
            label_angle: 0.0,
            min: None,
            max: None,
            autoscale_margin: None,
            tick_decimals: None,
            tick_count: 5,
            mode: AxisMode::Numeric,
            time_format: None,
            month_names: None,
            twelve_hour_clock: false,
            label_box: None,
            number_format: NumberFormat::default(),
        }
    }
}

impl AxisOptions {
    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set which extreme tick the title replaces.
    pub fn with_label_pos(mut self, label_pos: LabelPos) -> Self {
        self.label_pos = label_pos;
        self
    }

    /// Set tick label rotation in degrees.
    pub fn with_label_angle(mut self, angle_degrees: f64) -> Self {
        self.label_angle = angle_degrees;
        self
    }

    /// Pin the range minimum.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Pin the range maximum.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the autoscale margin.
    pub fn with_autoscale_margin(mut self, margin: f64) -> Self {
        self.autoscale_margin = Some(margin);
        self
    }

    /// Fix the number of tick decimals.
    pub fn with_tick_decimals(mut self, decimals: usize) -> Self {
        self.tick_decimals = Some(decimals);
        self
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Treat values as timestamps.
    pub fn with_time_mode(mut self) -> Self {
        self.mode = AxisMode::Time;
        self
    }

    /// Set an explicit time label pattern.
    pub fn with_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = Some(pattern.into());
        self
    }

    /// Set month names for `%b`.
    pub fn with_month_names(mut self, names: [String; 12]) -> Self {
        self.month_names = Some(names);
        self
    }

    /// Use a twelve-hour clock in default time patterns.
    pub fn with_twelve_hour_clock(mut self, twelve_hour_clock: bool) -> Self {
        self.twelve_hour_clock = twelve_hour_clock;
        self
    }

    /// Set the unrotated label box.
    pub fn with_label_box(mut self, size: Size) -> Self {
        self.label_box = Some(size);
        self
    }

    /// Set numeric label formatting.
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}

/// One axis of a plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Plot edge.
    pub side: AxisSide,
    /// Range minimum.
    pub min: f64,
    /// Range maximum.
    pub max: f64,
    /// Smallest observed data value.
    pub data_min: f64,
    /// Largest observed data value.
    pub data_max: f64,
    /// Spacing between ticks.
    pub tick_size: TickSize,
    /// Decimals for numeric labels.
    pub tick_decimals: usize,
    /// Generated ticks.
    pub ticks: Vec<Tick>,
    /// Configuration.
    pub options: AxisOptions,
    /// Label box in canvas pixels.
    pub layout_box: AxisBox,
    scale: ScaleLinear,
}

impl Axis {
    /// Creates an axis for data spanning `[data_min, data_max]`.
    ///
    /// The range comes from the options' `min`/`max` where set and the data
    /// otherwise. A zero-width range is widened; otherwise the autoscale
    /// margin pads the unpinned ends without crossing zero for one-signed
    /// data. Ticks are not generated until [`Axis::label_ticks`].
    pub fn new(side: AxisSide, data_min: f64, data_max: f64, options: AxisOptions) -> Self {
        let (min, max) = resolve_range(data_min, data_max, &options);
        let count = options.tick_count;
        let (tick_size, tick_decimals) = match options.mode {
            AxisMode::Numeric => {
                let t = numeric_tick_size(min, max, count, options.tick_decimals);
                (TickSize::Numeric(t.size), t.decimals)
            }
            AxisMode::Time => (
                TickSize::Time(time_tick_size(min, max, count)),
                options.tick_decimals.unwrap_or(0),
            ),
        };
        Self {
            side,
            min,
            max,
            data_min,
            data_max,
            tick_size,
            tick_decimals,
            ticks: Vec::new(),
            options,
            layout_box: AxisBox::default(),
            scale: axis_scale(side, min, max, 0.0),
        }
    }

    /// Sets the pixel length of the axis (plot width or height).
    pub fn set_extent(&mut self, extent: f64) {
        self.scale = axis_scale(self.side, self.min, self.max, extent);
    }

    /// Builder form of [`Axis::set_extent`].
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.set_extent(extent);
        self
    }

    /// Set the label box.
    pub fn with_layout_box(mut self, layout_box: AxisBox) -> Self {
        self.layout_box = layout_box;
        self
    }

    /// Maps a value to a pixel offset from the plot's left (x) or top (y) edge.
    pub fn p2c(&self, value: f64) -> f64 {
        self.scale.map(value)
    }

    /// Tick label rotation in degrees.
    pub fn label_angle(&self) -> f64 {
        self.options.label_angle
    }

    /// Whether values are timestamps.
    pub fn is_time(&self) -> bool {
        self.options.mode == AxisMode::Time
    }

    /// Raw tick values; the first and last may fall outside the range.
    pub fn generate_ticks(&self) -> Vec<f64> {
        generate_ticks(self.min, self.max, self.tick_size.step())
    }

    /// Regenerates the ticks and labels each one.
    pub fn label_ticks(&mut self) {
        self.ticks = self
            .generate_ticks()
            .into_iter()
            .map(|value| Tick { value, label: None })
            .collect();
        let labels: Vec<String> = self
            .ticks
            .iter()
            .map(|t| select_label(t.value, self))
            .collect();
        for (tick, label) in self.ticks.iter_mut().zip(labels) {
            tick.label = Some(label);
        }
    }

    /// Ticks to draw: labeled with non-empty text and inside `[min, max]`.
    pub fn drawable_ticks(&self) -> impl Iterator<Item = (f64, &str)> + '_ {
        self.ticks.iter().filter_map(|t| {
            let label = t.label.as_deref().filter(|l| !l.is_empty());
            match label {
                Some(label) if t.value >= self.min && t.value <= self.max => {
                    Some((t.value, label))
                }
                _ => {
                    trace!("skipping tick {} on {:?} axis", t.value, self.side);
                    None
                }
            }
        })
    }
}

fn axis_scale(side: AxisSide, min: f64, max: f64, extent: f64) -> ScaleLinear {
    if side.is_horizontal() {
        ScaleLinear::new((min, max), (0.0, extent))
    } else {
        ScaleLinear::new((min, max), (extent, 0.0))
    }
}

fn resolve_range(data_min: f64, data_max: f64, options: &AxisOptions) -> (f64, f64) {
    let mut min = options.min.unwrap_or(data_min);
    let mut max = options.max.unwrap_or(data_max);
    match (min.is_finite(), max.is_finite()) {
        (true, true) => {}
        (true, false) => max = min + 1.0,
        (false, true) => min = max - 1.0,
        (false, false) => return (0.0, 1.0),
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }

    let delta = max - min;
    if delta == 0.0 {
        let widen = if max == 0.0 { 1.0 } else { 0.01 };
        if options.min.is_none() {
            min -= widen;
        }
        if options.max.is_none() || options.min.is_some() {
            max += widen;
        }
    } else if let Some(margin) = options.autoscale_margin {
        if options.min.is_none() {
            min -= delta * margin;
            if min < 0.0 && data_min >= 0.0 {
                min = 0.0;
            }
        }
        if options.max.is_none() {
            max += delta * margin;
            if max > 0.0 && data_max <= 0.0 {
                max = 0.0;
            }
        }
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn range_follows_data_and_pins() {
        let a = Axis::new(AxisSide::Bottom, 1.0, 9.0, AxisOptions::default());
        assert_eq!((a.min, a.max), (1.0, 9.0));

        let a = Axis::new(AxisSide::Bottom, 1.0, 9.0, AxisOptions::default().with_min(0.0));
        assert_eq!((a.min, a.max), (0.0, 9.0));
    }

    #[test]
    fn autoscale_margin_stops_at_zero() {
        let opts = AxisOptions::default().with_autoscale_margin(0.5);
        let a = Axis::new(AxisSide::Left, 0.0, 10.0, opts.clone());
        assert_eq!((a.min, a.max), (0.0, 15.0));
        let a = Axis::new(AxisSide::Left, -10.0, -2.0, opts);
        assert_eq!((a.min, a.max), (-14.0, 0.0));
    }

    #[test]
    fn zero_width_range_is_widened() {
        let a = Axis::new(AxisSide::Bottom, 0.0, 0.0, AxisOptions::default());
        assert_eq!((a.min, a.max), (-1.0, 1.0));
        let a = Axis::new(AxisSide::Bottom, 5.0, 5.0, AxisOptions::default().with_min(5.0));
        assert_eq!(a.min, 5.0);
        assert!((a.max - 5.01).abs() < 1e-12, "max {}", a.max);
    }

    #[test]
    fn p2c_direction_depends_on_side() {
        let x = Axis::new(AxisSide::Bottom, 0.0, 10.0, AxisOptions::default()).with_extent(200.0);
        assert_eq!(x.p2c(0.0), 0.0);
        assert_eq!(x.p2c(5.0), 100.0);
        let y = Axis::new(AxisSide::Left, 0.0, 10.0, AxisOptions::default()).with_extent(200.0);
        assert_eq!(y.p2c(0.0), 200.0);
        assert_eq!(y.p2c(10.0), 0.0);
    }

    #[test]
    fn labels_every_generated_tick() {
        let mut a = Axis::new(AxisSide::Bottom, 1.0, 9.0, AxisOptions::default());
        a.label_ticks();
        let values: Vec<f64> = a.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(a.ticks.iter().all(|t| t.label.is_some()));

        let drawn: Vec<(f64, &str)> = a.drawable_ticks().collect();
        assert_eq!(drawn, vec![(2.0, "2"), (4.0, "4"), (6.0, "6"), (8.0, "8")]);
    }

    #[test]
    fn empty_labels_are_not_drawable() {
        let mut a = Axis::new(AxisSide::Bottom, 0.0, 10.0, AxisOptions::default());
        a.ticks = vec![
            Tick {
                value: 2.0,
                label: Some(String::new()),
            },
            Tick {
                value: 4.0,
                label: None,
            },
            Tick {
                value: 6.0,
                label: Some("6".into()),
            },
        ];
        assert_eq!(a.drawable_ticks().count(), 1);
    }

    #[test]
    fn adjacent_boxes_hug_the_plot() {
        let plot = Rect::new(50.0, 20.0, 450.0, 320.0);
        let b = AxisBox::adjacent(AxisSide::Bottom, plot, 30.0, 2.0);
        assert_eq!(b, AxisBox::new(320.0, 50.0, 400.0, 30.0, 2.0));
        let l = AxisBox::adjacent(AxisSide::Left, plot, 40.0, 2.0);
        assert_eq!(l, AxisBox::new(20.0, 10.0, 40.0, 300.0, 2.0));
    }
}
