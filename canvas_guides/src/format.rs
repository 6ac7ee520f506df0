// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// How numeric tick values are printed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberFormat {
    /// When the axis' observed data minimum is below this value, labels use
    /// two significant digits ([`to_precision`]) instead of fixed decimals.
    pub scientific_threshold: f64,
}

impl NumberFormat {
    /// Two significant digits, as used below [`NumberFormat::scientific_threshold`].
    pub const SIGNIFICANT_DIGITS: usize = 2;

    /// Formats `value` for an axis whose data minimum is `data_min` and whose
    /// ticks need `decimals` decimals.
    pub fn format(&self, value: f64, data_min: f64, decimals: usize) -> String {
        if data_min < self.scientific_threshold {
            to_precision(value, Self::SIGNIFICANT_DIGITS)
        } else {
            to_fixed(value, decimals)
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            scientific_threshold: 1e-5,
        }
    }
}

/// Fixed-point formatting with `decimals` digits after the point.
///
/// Exact halves round away from zero (`0.125` to two places is `0.13`).
/// Negative zero prints as `0`; non-finite values print as `NaN`,
/// `Infinity` or `-Infinity`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let scale = -i64::try_from(decimals).unwrap_or(i64::MAX);
    let value = round_ties_away(value, scale);
    format!("{value:.decimals$}")
}

/// Formats `value` with `precision` significant digits.
///
/// Exact halves round away from zero (`12.5` to two digits is `13`).
///
/// Like ECMAScript `toPrecision`, the result switches to exponential notation
/// (`1.2e-7`, `1.2e+2`) when the decimal exponent is below `-6` or not less
/// than `precision`, and uses fixed notation otherwise (`0.0000012`, `5.0`).
pub fn to_precision(value: f64, precision: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }
    let precision = precision.max(1);
    if value == 0.0 {
        return to_fixed(0.0, precision - 1);
    }

    let digits = i32::try_from(precision).unwrap_or(i32::MAX);
    let shortest = format!("{value:e}");
    let magnitude: i64 = shortest
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);
    let value = round_ties_away(value, magnitude - i64::from(digits - 1));

    let sci = format!("{value:.prec$e}", prec = precision - 1);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -6 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        format!("{value:.decimals$}")
    }
}

/// Moves `value` one ulp away from zero when it lies exactly halfway between
/// two multiples of `10^scale`.
///
/// Float formatting rounds such ties to even; the label formats round them up
/// in magnitude.
fn round_ties_away(value: f64, scale: i64) -> f64 {
    if is_decimal_tie(value.abs(), scale) {
        let up = value.abs().next_up();
        if value < 0.0 { -up } else { up }
    } else {
        value
    }
}

/// Whether `2 * value / 10^scale` is an odd integer.
fn is_decimal_tie(value: f64, scale: i64) -> bool {
    // value = mantissa * 2^exp exactly.
    let bits = value.to_bits();
    let biased = i64::try_from((bits >> 52) & 0x7ff).unwrap_or(0);
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    let twos = mantissa.trailing_zeros();
    let odd = mantissa >> twos;

    // 2 * odd * 2^(twos + exp) / (2^scale * 5^scale) is odd only when the
    // powers of two cancel exactly and 5^scale divides the odd part.
    if i64::from(twos) + exp + 1 != scale {
        return false;
    }
    match u32::try_from(scale) {
        Ok(0) | Err(_) => true,
        Ok(s) => 5_u64.checked_pow(s).is_some_and(|p| odd % p == 0),
    }
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some(String::from("NaN"))
    } else if value.is_infinite() {
        Some(String::from(if value > 0.0 { "Infinity" } else { "-Infinity" }))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fixed_point() {
        assert_eq!(to_fixed(4.0, 1), "4.0");
        assert_eq!(to_fixed(1234.5678, 2), "1234.57");
        assert_eq!(to_fixed(-0.0, 1), "0.0");
        assert_eq!(to_fixed(3.0, 0), "3");
    }

    #[test]
    fn precision_fixed_range() {
        assert_eq!(to_precision(5.0, 2), "5.0");
        assert_eq!(to_precision(0.000_001_234, 2), "0.0000012");
        assert_eq!(to_precision(0.5, 2), "0.50");
        assert_eq!(to_precision(0.0, 2), "0.0");
        assert_eq!(to_precision(-42.0, 2), "-42");
    }

    #[test]
    fn precision_exponential_range() {
        assert_eq!(to_precision(123.0, 2), "1.2e+2");
        assert_eq!(to_precision(1.234e-7, 2), "1.2e-7");
        assert_eq!(to_precision(9.96, 2), "10");
        assert_eq!(to_precision(99.6, 2), "1.0e+2");
    }

    #[test]
    fn threshold_selects_style() {
        let f = NumberFormat::default();
        assert_eq!(f.format(4.0, 0.0, 1), "4.0");
        assert_eq!(f.format(4.0, 1.0, 1), "4.0");
        assert_eq!(f.format(4.0, 1e-6, 1), "4.0");
        assert_eq!(f.format(1234.0, 1e-6, 1), "1.2e+3");
        assert_eq!(f.format(1.0e9, 5.0, 0), "1000000000");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_precision(12.5, 2), "13");
        assert_eq!(to_precision(22.5, 2), "23");
        assert_eq!(to_precision(125.0, 2), "1.3e+2");
        assert_eq!(to_precision(9.5, 1), "1e+1");
    }

    #[test]
    fn near_halves_keep_their_binary_value() {
        // 1.005 is stored just below the half.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 0.45 is stored just above it.
        assert_eq!(to_fixed(0.45, 1), "0.5");
        assert_eq!(to_fixed(0.15, 1), "0.1");
        assert_eq!(to_precision(0.000_001_25, 2), "0.0000013");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_precision(f64::NEG_INFINITY, 2), "-Infinity");
    }
}
