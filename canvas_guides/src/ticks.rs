// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick spacing and raw tick generation.
//!
//! Ticks are laid out on a uniform grid anchored at a multiple of the tick
//! size. The first and last generated ticks may fall outside `[min, max]`;
//! callers decide whether those are visible.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::time::TimeTickSize;

/// Upper bound on generated ticks for a single axis.
const MAX_TICKS: usize = 10_000;

/// The spacing between adjacent ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickSize {
    /// Spacing in data units.
    Numeric(f64),
    /// Spacing in calendar units (values are milliseconds since the epoch).
    Time(TimeTickSize),
}

impl TickSize {
    /// Spacing in axis value units (milliseconds for time axes).
    pub fn step(&self) -> f64 {
        match self {
            Self::Numeric(size) => *size,
            Self::Time(size) => size.millis(),
        }
    }
}

/// A numeric tick size together with the decimals needed to print it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericTickSize {
    /// Spacing in data units.
    pub size: f64,
    /// Number of decimals that distinguishes adjacent ticks.
    pub decimals: usize,
}

/// Chooses a tick size of 1, 2, 2.5, 5 or 10 times a power of ten so that
/// roughly `count` ticks cover `[min, max]`.
///
/// `max_decimals` caps the decimals (and forbids the extra decimal that a
/// 2.5 step needs when that would exceed the cap).
pub fn numeric_tick_size(
    min: f64,
    max: f64,
    count: usize,
    max_decimals: Option<usize>,
) -> NumericTickSize {
    let delta = (max - min).abs() / count.max(1) as f64;
    if !(delta.is_finite() && delta > 0.0) {
        return NumericTickSize {
            size: 1.0,
            decimals: max_decimals.unwrap_or(0),
        };
    }

    let cap = max_decimals.map(|d| i32::try_from(d).unwrap_or(i32::MAX));
    #[allow(
        clippy::cast_possible_truncation,
        reason = "log10 of a finite positive f64 is well inside the i32 range"
    )]
    let mut dec = -(delta.log10().floor() as i32);
    if let Some(cap) = cap {
        dec = dec.min(cap);
    }

    let magn = 10_f64.powi(-dec);
    let norm = delta / magn;
    let size = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        if norm > 2.25 && cap.is_none_or(|cap| dec < cap) {
            dec += 1;
            2.5
        } else {
            2.0
        }
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };

    let decimals = match max_decimals {
        Some(d) => d,
        None => usize::try_from(dec.max(0)).unwrap_or(0),
    };
    NumericTickSize {
        size: size * magn,
        decimals,
    }
}

/// Generates ticks every `step` starting at the multiple of `step` at or
/// below `min`, stopping once a tick reaches `max`.
pub fn generate_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0 && min.is_finite() && max.is_finite()) {
        return Vec::new();
    }
    let start = (min / step).floor() * step;
    let mut ticks = Vec::new();
    let mut prev = f64::NAN;
    for i in 0..MAX_TICKS {
        let v = start + step * i as f64;
        ticks.push(v);
        if v >= max || v == prev {
            break;
        }
        prev = v;
    }
    ticks
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn picks_round_steps() {
        let t = numeric_tick_size(0.0, 10.0, 5, None);
        assert_eq!(t.size, 2.0);
        assert_eq!(t.decimals, 0);

        let t = numeric_tick_size(0.0, 1.0, 5, None);
        assert!((t.size - 0.2).abs() < 1e-12, "got {}", t.size);
        assert_eq!(t.decimals, 1);
    }

    #[test]
    fn two_and_a_half_adds_a_decimal_unless_capped() {
        // delta = 2.4 => norm 2.4 > 2.25
        let t = numeric_tick_size(0.0, 24.0, 10, None);
        assert_eq!(t.size, 2.5);
        assert_eq!(t.decimals, 1);

        let t = numeric_tick_size(0.0, 24.0, 10, Some(0));
        assert_eq!(t.size, 2.0);
        assert_eq!(t.decimals, 0);
    }

    #[test]
    fn configured_decimals_win() {
        let t = numeric_tick_size(0.0, 10.0, 5, Some(1));
        assert_eq!(t.decimals, 1);
    }

    #[test]
    fn generation_covers_the_range() {
        assert_eq!(generate_ticks(1.0, 9.0, 2.0), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(generate_ticks(0.0, 4.0, 2.0), vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn degenerate_inputs_yield_no_ticks() {
        assert!(generate_ticks(0.0, 1.0, 0.0).is_empty());
        assert!(generate_ticks(f64::NAN, 1.0, 1.0).is_empty());
    }
}
