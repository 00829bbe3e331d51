//! Side of a point relative to a directed line.

use std::fmt;

use crate::cfg::EPS_FLOAT;
use crate::point::Point;
use crate::vector::ccw;

/// Classification of a point against the directed line `a → b`.
///
/// Convention: a positive cross product `(b − a) × (p − a)` is `Left`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    On,
}

impl Side {
    /// Classify a signed cross product; values within `EPS_FLOAT` of zero are `On`.
    #[inline]
    pub fn from_cross(value: f64) -> Side {
        Side::from_cross_within(value, EPS_FLOAT)
    }

    /// Classify a signed cross product; `|value| <= tol` is `On`.
    #[inline]
    pub fn from_cross_within(value: f64, tol: f64) -> Side {
        if value.abs() <= tol {
            Side::On
        } else if value > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    pub fn is_left(self) -> bool {
        self == Side::Left
    }

    #[inline]
    pub fn is_right(self) -> bool {
        self == Side::Right
    }

    #[inline]
    pub fn is_on(self) -> bool {
        self == Side::On
    }

    /// Mirror Left/Right; `On` stays `On`.
    #[inline]
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::On => Side::On,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::On => "on",
        };
        f.write_str(s)
    }
}

/// Side of `p` relative to the infinite line through `a → b`.
///
/// The cross product is an area, so its rounding noise grows with both the
/// edge lengths and the coordinate magnitude. `EPS_FLOAT` is applied
/// relative to that scale; the tolerance is symmetric in `a` and `b`.
#[inline]
pub fn side_of(a: &Point, b: &Point, p: &Point) -> Side {
    Side::from_cross_within(ccw(a, b, p), collinear_tolerance(a, b, p))
}

fn collinear_tolerance(a: &Point, b: &Point, p: &Point) -> f64 {
    let span = a.distance(b) + p.distance(a) + p.distance(b);
    let reach = a
        .coords()
        .norm()
        .max(b.coords().norm())
        .max(p.coords().norm())
        .max(1.0);
    EPS_FLOAT * span * reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;
    use proptest::prelude::*;

    #[test]
    fn classification_and_flip() {
        let (a, b) = (Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        assert_eq!(side_of(&a, &b, &Point::new(0.0, 1.0)), Side::Left);
        assert_eq!(side_of(&a, &b, &Point::new(1.0, 0.0)), Side::Right);
        assert_eq!(side_of(&a, &b, &Point::new(-5.0, -5.0)), Side::On);
        assert_eq!(side_of(&b, &a, &Point::new(0.0, 1.0)), Side::Right);
        assert_eq!(Side::Left.flip(), Side::Right);
        assert_eq!(Side::On.flip(), Side::On);
        assert_eq!(Side::from_cross(1e-13), Side::On);
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn collinear_point_with_inexact_coordinates_is_on() {
        let a = Point::new(21.57757938620817, -20.43717251211463);
        let b = Point::new(27.788438118280112, -20.816548479765203);
        for s in [-1.7, 0.3, 0.5, 2.9] {
            let q = a + (b - a) * s;
            assert_eq!(side_of(&a, &b, &q), Side::On, "s = {s}");
        }
        // a millimetre off the line is still resolved
        let off = a + (b - a) * 0.5 + Vector::new(0.0, 1e-3);
        assert!(!side_of(&a, &b, &off).is_on());
    }

    proptest! {
        #[test]
        fn points_placed_on_the_line_are_on(
            ax in -100.0f64..100.0,
            ay in -100.0f64..100.0,
            bx in -100.0f64..100.0,
            by in -100.0f64..100.0,
            s in -2.0f64..3.0,
        ) {
            let (a, b) = (Point::new(ax, ay), Point::new(bx, by));
            let q = a + (b - a) * s;
            prop_assert_eq!(side_of(&a, &b, &q), Side::On);
            prop_assert_eq!(side_of(&b, &a, &q), Side::On);
        }
    }
}
