// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick labels, with the axis title standing in for one extreme tick.
//!
//! Instead of drawing a separate axis title, the title replaces the label of
//! the first or last *visible* tick. Visibility depends on how the range was
//! resolved: with pinned bounds (or no autoscale margin) the tick generator
//! overshoots the range, so only ticks strictly inside it count.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::axis::Axis;
use crate::options::OptionParseError;
use crate::ticks::TickSize;
use crate::time::{default_time_pattern, format_date, time_tick_size};

/// Which visible tick the axis title replaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelPos {
    /// The last (greatest) visible tick.
    #[default]
    High,
    /// The first (least) visible tick.
    Low,
}

impl core::str::FromStr for LabelPos {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            _ => Err(OptionParseError::UnknownLabelPos(String::from(s))),
        }
    }
}

/// The ticks eligible for title substitution, in order.
pub fn visible_tick_values(axis: &Axis) -> Vec<f64> {
    let opts = &axis.options;
    let raw = axis.generate_ticks();
    if opts.autoscale_margin.is_none() || opts.min.is_some() || opts.max.is_some() {
        raw.into_iter()
            .filter(|v| *v > axis.min && *v < axis.max)
            .collect()
    } else {
        raw
    }
}

/// Returns `title` if `value` is the tick `pos` selects from `visible`.
///
/// An empty `visible` never selects anything.
pub fn title_substitution<'a>(
    value: f64,
    visible: &[f64],
    pos: LabelPos,
    title: Option<&'a str>,
) -> Option<&'a str> {
    let title = title?;
    let target = match pos {
        LabelPos::High => visible.last(),
        LabelPos::Low => visible.first(),
    }?;
    (*target == value).then_some(title)
}

/// The label for the tick at `value` on `axis`.
///
/// Time axes are formatted as dates and never show the title. Numeric axes
/// show the title on the selected extreme tick and a formatted number
/// everywhere else.
pub fn select_label(value: f64, axis: &Axis) -> String {
    let opts = &axis.options;
    if axis.is_time() {
        let pattern = match &opts.time_format {
            Some(pattern) => pattern.clone(),
            None => {
                let tick_size = match axis.tick_size {
                    TickSize::Time(t) => t,
                    TickSize::Numeric(_) => time_tick_size(axis.min, axis.max, opts.tick_count),
                };
                default_time_pattern(tick_size, axis.max - axis.min, opts.twelve_hour_clock)
            }
        };
        return format_date(value, &pattern, opts.month_names.as_ref());
    }

    let visible = visible_tick_values(axis);
    if let Some(title) = title_substitution(value, &visible, opts.label_pos, opts.title.as_deref())
    {
        return String::from(title);
    }
    opts.number_format
        .format(value, axis.data_min, axis.tick_decimals)
}
