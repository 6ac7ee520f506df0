// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time tick sizing and formatting.
//!
//! Time axes carry values in **milliseconds since the Unix epoch** (UTC). The
//! label pattern is chosen from the tick spacing: sub-minute spacing shows
//! seconds, sub-day spacing shows hours and minutes, and so on up to
//! year-only labels at yearly spacing.

extern crate alloc;

use alloc::string::String;

use chrono::{DateTime, Datelike, Timelike};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::format::to_fixed;

/// English month abbreviations, used when no month names are configured.
pub const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar units for time tick sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hour,
    /// One day.
    Day,
    /// Thirty days.
    Month,
    /// 365.2425 days.
    Year,
}

impl TimeUnit {
    /// Approximate length of the unit in milliseconds.
    pub fn millis(self) -> f64 {
        match self {
            Self::Second => 1000.0,
            Self::Minute => 60.0 * 1000.0,
            Self::Hour => 60.0 * 60.0 * 1000.0,
            Self::Day => 24.0 * 60.0 * 60.0 * 1000.0,
            Self::Month => 30.0 * 24.0 * 60.0 * 60.0 * 1000.0,
            Self::Year => 365.2425 * 24.0 * 60.0 * 60.0 * 1000.0,
        }
    }
}

/// A tick spacing of `count` calendar units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeTickSize {
    /// Number of units between ticks (may be fractional, e.g. a quarter month).
    pub count: f64,
    /// The calendar unit.
    pub unit: TimeUnit,
}

impl TimeTickSize {
    /// Creates a tick size of `count` units.
    pub const fn new(count: f64, unit: TimeUnit) -> Self {
        Self { count, unit }
    }

    /// Spacing in milliseconds.
    pub fn millis(&self) -> f64 {
        self.count * self.unit.millis()
    }
}

const TIME_TICK_SIZES: &[TimeTickSize] = &[
    TimeTickSize::new(1.0, TimeUnit::Second),
    TimeTickSize::new(2.0, TimeUnit::Second),
    TimeTickSize::new(5.0, TimeUnit::Second),
    TimeTickSize::new(10.0, TimeUnit::Second),
    TimeTickSize::new(30.0, TimeUnit::Second),
    TimeTickSize::new(1.0, TimeUnit::Minute),
    TimeTickSize::new(2.0, TimeUnit::Minute),
    TimeTickSize::new(5.0, TimeUnit::Minute),
    TimeTickSize::new(10.0, TimeUnit::Minute),
    TimeTickSize::new(30.0, TimeUnit::Minute),
    TimeTickSize::new(1.0, TimeUnit::Hour),
    TimeTickSize::new(2.0, TimeUnit::Hour),
    TimeTickSize::new(4.0, TimeUnit::Hour),
    TimeTickSize::new(8.0, TimeUnit::Hour),
    TimeTickSize::new(12.0, TimeUnit::Hour),
    TimeTickSize::new(1.0, TimeUnit::Day),
    TimeTickSize::new(2.0, TimeUnit::Day),
    TimeTickSize::new(3.0, TimeUnit::Day),
    TimeTickSize::new(0.25, TimeUnit::Month),
    TimeTickSize::new(0.5, TimeUnit::Month),
    TimeTickSize::new(1.0, TimeUnit::Month),
    TimeTickSize::new(2.0, TimeUnit::Month),
    TimeTickSize::new(3.0, TimeUnit::Month),
    TimeTickSize::new(6.0, TimeUnit::Month),
    TimeTickSize::new(1.0, TimeUnit::Year),
];

/// Chooses a time tick size so that roughly `count` ticks cover `[min, max]`.
///
/// The table entry nearest to the ideal spacing is used; beyond a year the
/// spacing grows in 1, 2, 5, 10 multiples of whole years.
pub fn time_tick_size(min: f64, max: f64, count: usize) -> TimeTickSize {
    let delta = (max - min).abs() / count.max(1) as f64;

    let mut chosen = TIME_TICK_SIZES[TIME_TICK_SIZES.len() - 1];
    for pair in TIME_TICK_SIZES.windows(2) {
        if delta < 0.5 * (pair[0].millis() + pair[1].millis()) {
            chosen = pair[0];
            break;
        }
    }

    if chosen.unit == TimeUnit::Year {
        let years = delta / TimeUnit::Year.millis();
        if years.is_finite() && years > 1.0 {
            let magn = 10_f64.powi(exponent_of(years));
            let norm = years / magn;
            let size = if norm < 1.5 {
                1.0
            } else if norm < 3.0 {
                2.0
            } else if norm < 7.5 {
                5.0
            } else {
                10.0
            };
            chosen.count = (size * magn).max(1.0);
        }
    }
    chosen
}

fn exponent_of(v: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite positive f64 is well inside the i32 range"
    )]
    {
        v.log10().floor() as i32
    }
}

/// Picks the default label pattern for a time axis.
///
/// `span` is the visible axis range in milliseconds.
pub fn default_time_pattern(tick_size: TimeTickSize, span: f64, twelve_hour_clock: bool) -> String {
    let t = tick_size.millis();
    let base = if t < TimeUnit::Minute.millis() {
        "%h:%M:%S"
    } else if t < TimeUnit::Day.millis() {
        if span < 2.0 * TimeUnit::Day.millis() {
            "%h:%M"
        } else {
            "%b %d %h:%M"
        }
    } else if t < TimeUnit::Month.millis() {
        "%b %d"
    } else if t < TimeUnit::Year.millis() {
        if span < TimeUnit::Year.millis() {
            "%b"
        } else {
            "%b %y"
        }
    } else {
        "%y"
    };

    let mut pattern = String::from(base);
    if twelve_hour_clock && base.contains("%h") {
        pattern.push_str(" %p");
    }
    pattern
}

/// Formats a UTC timestamp (milliseconds) with a `%`-directive pattern.
///
/// Directives: `%h` hour, `%H` two-digit hour, `%M` two-digit minutes,
/// `%S` two-digit seconds, `%d` day of month, `%m` month number, `%y` full
/// year, `%b` month name, `%p`/`%P` am/pm, and `%0` which zero-pads the next
/// directive. Any other character after `%` is emitted as-is. When the
/// pattern contains `%p` or `%P`, hours use a twelve-hour clock.
///
/// Timestamps outside chrono's range fall back to the plain number.
pub fn format_date(millis: f64, pattern: &str, month_names: Option<&[String; 12]>) -> String {
    let Some(dt) = to_datetime(millis) else {
        return to_fixed(millis, 0);
    };

    let twelve_hour = pattern.contains("%p") || pattern.contains("%P");
    let mut hours = dt.hour();
    let is_am = hours < 12;
    if twelve_hour {
        if hours > 12 {
            hours -= 12;
        } else if hours == 0 {
            hours = 12;
        }
    }
    let month0 = usize::try_from(dt.month0()).unwrap_or(0);

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut escape = false;
    let mut pad_next = false;
    for c in pattern.chars() {
        if !escape {
            if c == '%' {
                escape = true;
            } else {
                out.push(c);
            }
            continue;
        }

        let piece: String = match c {
            'h' => alloc::format!("{hours}"),
            'H' => alloc::format!("{hours:02}"),
            'M' => alloc::format!("{:02}", dt.minute()),
            'S' => alloc::format!("{:02}", dt.second()),
            'd' => alloc::format!("{}", dt.day()),
            'm' => alloc::format!("{}", dt.month()),
            'y' => alloc::format!("{}", dt.year()),
            'b' => match month_names {
                Some(names) => names[month0].clone(),
                None => String::from(DEFAULT_MONTH_NAMES[month0]),
            },
            'p' => String::from(if is_am { "am" } else { "pm" }),
            'P' => String::from(if is_am { "AM" } else { "PM" }),
            '0' => {
                pad_next = true;
                continue;
            }
            other => {
                let mut s = String::new();
                s.push(other);
                s
            }
        };

        if pad_next && piece.chars().count() == 1 {
            out.push('0');
        }
        pad_next = false;
        out.push_str(&piece);
        escape = false;
    }
    out
}

fn to_datetime(millis: f64) -> Option<DateTime<chrono::Utc>> {
    if !millis.is_finite() || millis.abs() > 8.64e15 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "bounded by the ECMAScript time range checked above"
    )]
    let ms = millis.round() as i64;
    DateTime::from_timestamp_millis(ms)
}
