// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotated-label geometry.
//!
//! A label is modeled as a `width × height` rectangle in a y-up local frame
//! with corners `(0, 0)`, `(w, 0)`, `(w, -h)` and `(0, -h)`, rotated around
//! its origin. [`rotated_bounds`] measures the result and names the corners
//! that placement needs; [`placement_offset`] turns those into the
//! translation that keeps the rotated label flush against its axis.
//!
//! The per-side corrections differ between native and emulated rotation
//! because the two backends rotate around different origins. They are kept
//! as a lookup table ([`offset_rule`]) so each row can be checked on its own.

use kurbo::{Affine, Point, Vec2};

use crate::axis::AxisSide;
use crate::environment::RotationBackend;
use crate::surface::TextAlign;

/// The axis-aligned bounds of a rotated label and its named corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedBox {
    /// Horizontal extent of the rotated corners.
    pub width: f64,
    /// Vertical extent of the rotated corners.
    pub height: f64,
    /// The rotated midpoint of the label's left edge, `(0, h/2)`.
    pub aligned_left: Point,
    /// The rotated midpoint of the label's right edge, `(w, h/2)`.
    pub aligned_right: Point,
    /// The rotated corner with the greatest y.
    pub topmost: Point,
    /// The rotated corner with the least y.
    pub bottommost: Point,
    /// The rotated corner with the least x.
    pub leftmost: Point,
}

/// Measures a `width × height` label rotated by `angle_degrees`.
pub fn rotated_bounds(width: f64, height: f64, angle_degrees: f64) -> RotatedBox {
    let rot = Affine::rotate(angle_degrees.to_radians());
    let corners = [
        Point::ZERO,
        Point::new(width, 0.0),
        Point::new(width, -height),
        Point::new(0.0, -height),
    ]
    .map(|p| rot * p);

    let (mut x0, mut x1, mut y0, mut y1) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
    for c in &corners {
        x0 = x0.min(c.x);
        x1 = x1.max(c.x);
        y0 = y0.min(c.y);
        y1 = y1.max(c.y);
    }

    let (topmost, bottommost, leftmost) = if angle_degrees < 0.0 {
        (corners[0], corners[2], corners[3])
    } else {
        (corners[1], corners[3], corners[0])
    };

    RotatedBox {
        width: x1 - x0,
        height: y1 - y0,
        aligned_left: rot * Point::new(0.0, height / 2.0),
        aligned_right: rot * Point::new(width, height / 2.0),
        topmost,
        bottommost,
        leftmost,
    }
}

/// The sign of a non-zero label angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleSign {
    /// Clockwise on screen.
    Negative,
    /// Counter-clockwise on screen.
    Positive,
}

impl AngleSign {
    /// The sign of `angle_degrees`, or `None` for zero and NaN.
    pub fn of(angle_degrees: f64) -> Option<Self> {
        if angle_degrees < 0.0 {
            Some(Self::Negative)
        } else if angle_degrees > 0.0 {
            Some(Self::Positive)
        } else {
            None
        }
    }
}

/// A scalar read off a [`RotatedBox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxMeasure {
    /// `aligned_left.x`
    AlignedLeftX,
    /// `aligned_left.y`
    AlignedLeftY,
    /// `aligned_right.x`
    AlignedRightX,
    /// `aligned_right.y`
    AlignedRightY,
    /// `topmost.y`
    TopmostY,
    /// `bottommost.y`
    BottommostY,
    /// `leftmost.x`
    LeftmostX,
    /// `width + aligned_left.x`
    WidthPlusAlignedLeftX,
    /// `height - aligned_left.y`
    HeightMinusAlignedLeftY,
}

impl BoxMeasure {
    /// Reads the measure from `b`.
    pub fn read(self, b: &RotatedBox) -> f64 {
        match self {
            Self::AlignedLeftX => b.aligned_left.x,
            Self::AlignedLeftY => b.aligned_left.y,
            Self::AlignedRightX => b.aligned_right.x,
            Self::AlignedRightY => b.aligned_right.y,
            Self::TopmostY => b.topmost.y,
            Self::BottommostY => b.bottommost.y,
            Self::LeftmostX => b.leftmost.x,
            Self::WidthPlusAlignedLeftX => b.width + b.aligned_left.x,
            Self::HeightMinusAlignedLeftY => b.height - b.aligned_left.y,
        }
    }
}

/// A signed [`BoxMeasure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OffsetTerm {
    /// What to read.
    pub measure: BoxMeasure,
    /// Whether the value is negated.
    pub negate: bool,
}

impl OffsetTerm {
    const fn plus(measure: BoxMeasure) -> Self {
        Self {
            measure,
            negate: false,
        }
    }

    const fn minus(measure: BoxMeasure) -> Self {
        Self {
            measure,
            negate: true,
        }
    }

    /// Evaluates the term against `b`.
    pub fn eval(self, b: &RotatedBox) -> f64 {
        let v = self.measure.read(b);
        if self.negate { -v } else { v }
    }
}

/// One row of the placement table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OffsetRule {
    /// Alignment for the drawn text.
    pub text_align: TextAlign,
    /// Vertical origin offset.
    pub origin_top: Option<OffsetTerm>,
    /// Horizontal origin offset.
    pub origin_left: Option<OffsetTerm>,
    /// Extra vertical compensation.
    pub compensate_top: Option<OffsetTerm>,
    /// Extra horizontal compensation.
    pub compensate_left: Option<OffsetTerm>,
}

/// Looks up the placement rule for a rotated label.
pub fn offset_rule(side: AxisSide, sign: AngleSign, backend: RotationBackend) -> OffsetRule {
    use AngleSign::{Negative, Positive};
    use AxisSide::{Bottom, Left, Right, Top};
    use BoxMeasure::*;
    use RotationBackend::{Emulated, Native};

    let none = OffsetRule::default();
    let right = OffsetRule {
        text_align: TextAlign::Right,
        ..none
    };

    match (side, sign, backend) {
        (Bottom, Negative, Native) => OffsetRule {
            origin_left: Some(OffsetTerm::plus(AlignedLeftX)),
            ..none
        },
        (Bottom, Negative, Emulated) => OffsetRule {
            origin_left: Some(OffsetTerm::minus(AlignedLeftX)),
            ..none
        },
        (Bottom, Positive, Native) => OffsetRule {
            origin_left: Some(OffsetTerm::minus(AlignedRightX)),
            compensate_top: Some(OffsetTerm::plus(TopmostY)),
            ..right
        },
        (Bottom, Positive, Emulated) => OffsetRule {
            origin_left: Some(OffsetTerm::minus(AlignedRightX)),
            ..right
        },
        (Top, Negative, Native) => OffsetRule {
            origin_left: Some(OffsetTerm::minus(AlignedRightX)),
            ..right
        },
        (Top, Negative, Emulated) => OffsetRule {
            origin_left: Some(OffsetTerm::minus(WidthPlusAlignedLeftX)),
            ..none
        },
        (Top, Positive, Native) => OffsetRule {
            origin_left: Some(OffsetTerm::minus(AlignedLeftX)),
            compensate_top: Some(OffsetTerm::plus(BottommostY)),
            ..none
        },
        (Top, Positive, Emulated) => OffsetRule {
            origin_left: Some(OffsetTerm::minus(AlignedLeftX)),
            ..none
        },
        (Left, Negative, Native) => OffsetRule {
            origin_top: Some(OffsetTerm::plus(AlignedRightY)),
            compensate_left: Some(OffsetTerm::minus(LeftmostX)),
            ..right
        },
        (Left, Negative, Emulated) | (Left, Positive, Native) => OffsetRule {
            origin_top: Some(OffsetTerm::plus(AlignedRightY)),
            ..right
        },
        (Left, Positive, Emulated) => OffsetRule {
            origin_top: Some(OffsetTerm::minus(AlignedLeftY)),
            ..right
        },
        (Right, Negative, Native) => OffsetRule {
            origin_top: Some(OffsetTerm::minus(AlignedLeftY)),
            compensate_left: Some(OffsetTerm::minus(LeftmostX)),
            ..none
        },
        (Right, Positive, Native) => OffsetRule {
            origin_top: Some(OffsetTerm::minus(HeightMinusAlignedLeftY)),
            ..none
        },
        (Right, _, Emulated) => OffsetRule {
            origin_top: Some(OffsetTerm::minus(AlignedLeftY)),
            ..none
        },
    }
}

/// Where and how to draw a rotated label relative to its axis anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlacementOffset {
    /// Vertical origin offset.
    pub origin_top: f64,
    /// Horizontal origin offset.
    pub origin_left: f64,
    /// Extra vertical compensation.
    pub compensate_top: f64,
    /// Extra horizontal compensation.
    pub compensate_left: f64,
    /// Alignment for the drawn text.
    pub text_align: TextAlign,
}

impl PlacementOffset {
    /// The total translation from the anchor to the draw origin.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(
            self.origin_left + self.compensate_left,
            self.origin_top + self.compensate_top,
        )
    }
}

/// Computes the placement of a label rotated by `angle_degrees` on `side`.
///
/// A zero (or NaN) angle yields the default offset; unrotated labels are
/// placed without this table.
pub fn placement_offset(
    side: AxisSide,
    angle_degrees: f64,
    rotated: &RotatedBox,
    backend: RotationBackend,
) -> PlacementOffset {
    let Some(sign) = AngleSign::of(angle_degrees) else {
        return PlacementOffset::default();
    };
    let rule = offset_rule(side, sign, backend);
    let eval = |t: Option<OffsetTerm>| t.map_or(0.0, |t| t.eval(rotated));
    PlacementOffset {
        origin_top: eval(rule.origin_top),
        origin_left: eval(rule.origin_left),
        compensate_top: eval(rule.compensate_top),
        compensate_left: eval(rule.compensate_left),
        text_align: rule.text_align,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const SIDES: [AxisSide; 4] = [AxisSide::Top, AxisSide::Bottom, AxisSide::Left, AxisSide::Right];
    const BACKENDS: [RotationBackend; 2] = [RotationBackend::Native, RotationBackend::Emulated];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let b = rotated_bounds(40.0, 10.0, 90.0);
        assert!(close(b.width, 10.0), "width {}", b.width);
        assert!(close(b.height, 40.0), "height {}", b.height);
        // (w, h/2) turns to (-h/2, w)
        assert!(close(b.aligned_right.x, -5.0) && close(b.aligned_right.y, 40.0));
        assert!(close(b.topmost.y, 40.0), "(w, 0) ends up on top");
    }

    #[test]
    fn zero_angle_box_is_the_label() {
        let b = rotated_bounds(40.0, 10.0, 0.0);
        assert!(close(b.width, 40.0) && close(b.height, 10.0));
        assert_eq!(b.aligned_left, Point::new(0.0, 5.0));
    }

    #[test]
    fn extremal_corners_flip_with_the_sign() {
        let pos = rotated_bounds(40.0, 10.0, 30.0);
        let neg = rotated_bounds(40.0, 10.0, -30.0);
        assert!(close(pos.leftmost.x, 0.0), "origin is leftmost for positive angles");
        assert!(neg.leftmost.x < 0.0, "(0, -h) swings left for negative angles");
        assert!(close(neg.topmost.y, 0.0));
        assert!(pos.bottommost.y < 0.0 && neg.bottommost.y < 0.0);
    }

    #[test]
    fn right_alignment_matches_the_table() {
        let expected_right = |side: AxisSide, sign: AngleSign, backend: RotationBackend| {
            matches!(
                (side, sign, backend),
                (AxisSide::Bottom, AngleSign::Positive, _)
                    | (AxisSide::Top, AngleSign::Negative, RotationBackend::Native)
                    | (AxisSide::Left, _, _)
            )
        };
        let b = rotated_bounds(30.0, 12.0, 45.0);
        for side in SIDES {
            for backend in BACKENDS {
                for (angle, sign) in [(45.0, AngleSign::Positive), (-45.0, AngleSign::Negative)] {
                    let p = placement_offset(side, angle, &b, backend);
                    let want = if expected_right(side, sign, backend) {
                        TextAlign::Right
                    } else {
                        TextAlign::Left
                    };
                    assert_eq!(p.text_align, want, "{side:?} {sign:?} {backend:?}");
                }
            }
        }
    }

    /// `(origin_top, origin_left, compensate_top, compensate_left)` for `b`.
    type Cell = fn(&RotatedBox) -> [f64; 4];

    #[test]
    fn every_table_cell() {
        use AxisSide::{Bottom, Left, Right, Top};
        use RotationBackend::{Emulated, Native};
        use TextAlign::{Left as Start, Right as End};

        let table: [(AxisSide, f64, RotationBackend, TextAlign, Cell); 16] = [
            (Bottom, -1.0, Native, Start, |b| [0.0, b.aligned_left.x, 0.0, 0.0]),
            (Bottom, -1.0, Emulated, Start, |b| [0.0, -b.aligned_left.x, 0.0, 0.0]),
            (Bottom, 1.0, Native, End, |b| [0.0, -b.aligned_right.x, b.topmost.y, 0.0]),
            (Bottom, 1.0, Emulated, End, |b| [0.0, -b.aligned_right.x, 0.0, 0.0]),
            (Top, -1.0, Native, End, |b| [0.0, -b.aligned_right.x, 0.0, 0.0]),
            (Top, -1.0, Emulated, Start, |b| [0.0, -(b.width + b.aligned_left.x), 0.0, 0.0]),
            (Top, 1.0, Native, Start, |b| [0.0, -b.aligned_left.x, b.bottommost.y, 0.0]),
            (Top, 1.0, Emulated, Start, |b| [0.0, -b.aligned_left.x, 0.0, 0.0]),
            (Left, -1.0, Native, End, |b| [b.aligned_right.y, 0.0, 0.0, -b.leftmost.x]),
            (Left, -1.0, Emulated, End, |b| [b.aligned_right.y, 0.0, 0.0, 0.0]),
            (Left, 1.0, Native, End, |b| [b.aligned_right.y, 0.0, 0.0, 0.0]),
            (Left, 1.0, Emulated, End, |b| [-b.aligned_left.y, 0.0, 0.0, 0.0]),
            (Right, -1.0, Native, Start, |b| [-b.aligned_left.y, 0.0, 0.0, -b.leftmost.x]),
            (Right, -1.0, Emulated, Start, |b| [-b.aligned_left.y, 0.0, 0.0, 0.0]),
            (Right, 1.0, Native, Start, |b| [-(b.height - b.aligned_left.y), 0.0, 0.0, 0.0]),
            (Right, 1.0, Emulated, Start, |b| [-b.aligned_left.y, 0.0, 0.0, 0.0]),
        ];

        for (side, sign, backend, align, cell) in table {
            for magnitude in [20.0, 45.0, 70.0, 135.0] {
                let angle = sign * magnitude;
                let b = rotated_bounds(30.0, 12.0, angle);
                let p = placement_offset(side, angle, &b, backend);
                let got = [p.origin_top, p.origin_left, p.compensate_top, p.compensate_left];
                let want = cell(&b);
                assert_eq!(p.text_align, align, "{side:?} {angle} {backend:?}");
                for (g, w) in got.iter().zip(want) {
                    assert!(close(*g, w), "{side:?} {angle} {backend:?}: {got:?} != {want:?}");
                }
            }
        }
    }

    #[test]
    fn zero_angle_bypasses_the_table() {
        let b = rotated_bounds(30.0, 12.0, 0.0);
        for side in SIDES {
            for backend in BACKENDS {
                assert_eq!(placement_offset(side, 0.0, &b, backend), PlacementOffset::default());
                assert_eq!(
                    placement_offset(side, f64::NAN, &b, backend),
                    PlacementOffset::default()
                );
            }
        }
    }

    #[test]
    fn bottom_rows() {
        let b = rotated_bounds(30.0, 12.0, -45.0);
        let native = placement_offset(AxisSide::Bottom, -45.0, &b, RotationBackend::Native);
        assert_eq!(native.origin_left, b.aligned_left.x);
        let emulated = placement_offset(AxisSide::Bottom, -45.0, &b, RotationBackend::Emulated);
        assert_eq!(emulated.origin_left, -b.aligned_left.x);

        let b = rotated_bounds(30.0, 12.0, 45.0);
        let native = placement_offset(AxisSide::Bottom, 45.0, &b, RotationBackend::Native);
        assert_eq!(native.origin_left, -b.aligned_right.x);
        assert_eq!(native.compensate_top, b.topmost.y);
        let emulated = placement_offset(AxisSide::Bottom, 45.0, &b, RotationBackend::Emulated);
        assert_eq!(emulated.compensate_top, 0.0);
    }

    #[test]
    fn top_rows() {
        let b = rotated_bounds(30.0, 12.0, -30.0);
        let emulated = placement_offset(AxisSide::Top, -30.0, &b, RotationBackend::Emulated);
        assert_eq!(emulated.origin_left, -(b.width + b.aligned_left.x));

        let b = rotated_bounds(30.0, 12.0, 30.0);
        let native = placement_offset(AxisSide::Top, 30.0, &b, RotationBackend::Native);
        assert_eq!(native.origin_left, -b.aligned_left.x);
        assert_eq!(native.compensate_top, b.bottommost.y);
    }

    #[test]
    fn side_rows() {
        let b = rotated_bounds(30.0, 12.0, -60.0);
        let left = placement_offset(AxisSide::Left, -60.0, &b, RotationBackend::Native);
        assert_eq!(left.origin_top, b.aligned_right.y);
        assert_eq!(left.compensate_left, -b.leftmost.x);
        let right = placement_offset(AxisSide::Right, -60.0, &b, RotationBackend::Native);
        assert_eq!(right.origin_top, -b.aligned_left.y);
        assert_eq!(right.compensate_left, -b.leftmost.x);

        let b = rotated_bounds(30.0, 12.0, 60.0);
        let left = placement_offset(AxisSide::Left, 60.0, &b, RotationBackend::Emulated);
        assert_eq!(left.origin_top, -b.aligned_left.y);
        let right = placement_offset(AxisSide::Right, 60.0, &b, RotationBackend::Native);
        assert_eq!(right.origin_top, -(b.height - b.aligned_left.y));
        assert_eq!(
            right.translation(),
            Vec2::new(0.0, -(b.height - b.aligned_left.y))
        );
    }
}
