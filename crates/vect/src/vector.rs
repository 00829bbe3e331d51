//! Free 2D vector algebra and bearing arithmetic.
//!
//! Bearings are radians counter-clockwise from the +x axis, normalized into
//! `[0, 2π)`. Every operation returns a new value; `Vector` is `Copy`.
//!
//! Numerics
//! - `magnitude` uses `hypot` (no overflow on large components).
//! - `unit` never produces NaN/Inf: a (near) zero vector is divided by
//!   `EPS_UNIT` instead, which maps `(0, 0)` to `(0, 0)`.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use crate::cfg::{EPS_FLOAT, EPS_UNIT};
use crate::point::Point;

/// Displacement `(dx, dy)` with no fixed location.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector(Vector2<f64>);

impl Vector {
    #[inline]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self(Vector2::new(dx, dy))
    }

    #[inline]
    pub fn zero() -> Self {
        Self(Vector2::zeros())
    }

    /// Vector from `a` to `b`.
    #[inline]
    pub fn from_points(a: &Point, b: &Point) -> Self {
        *b - *a
    }

    /// Polar form: magnitude `m` along bearing `d`.
    #[inline]
    pub fn from_polar(m: f64, d: f64) -> Self {
        Self::new(m * d.cos(), m * d.sin())
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn to_vector2(self) -> Vector2<f64> {
        self.0
    }

    #[inline]
    pub fn negate(&self) -> Vector {
        Self(-self.0)
    }

    #[inline]
    pub fn scale(&self, k: f64) -> Vector {
        Self(self.0 * k)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.x.hypot(self.0.y)
    }

    /// `dx² + dy²`. Overflows for components beyond ~1e154; prefer `magnitude`.
    #[inline]
    pub fn square_magnitude(&self) -> f64 {
        self.0.x * self.0.x + self.0.y * self.0.y
    }

    /// Unit vector, with `EPS_UNIT` as denominator when the magnitude is ~0.
    pub fn unit(&self) -> Vector {
        let m = self.magnitude();
        let denom = if m.abs() < EPS_UNIT { EPS_UNIT } else { m };
        Self(self.0 / denom)
    }

    #[inline]
    pub fn dot(&self, o: &Vector) -> f64 {
        self.0.dot(&o.0)
    }

    /// z-component of the 2D cross product `self × o`.
    #[inline]
    pub fn cross(&self, o: &Vector) -> f64 {
        self.0.x * o.0.y - self.0.y * o.0.x
    }

    /// Scalar projection of `self` onto `onto`.
    #[inline]
    pub fn project(&self, onto: &Vector) -> f64 {
        self.dot(&onto.unit())
    }

    #[inline]
    pub fn direction(&self) -> f64 {
        direction(self.0.x, self.0.y)
    }

    #[inline]
    pub fn reverse_direction(&self) -> f64 {
        reverse_direction(self.direction())
    }

    /// Turning angle from `self` to `next`, see [`deflection_angle`].
    #[inline]
    pub fn deflection_angle(&self, next: &Vector) -> f64 {
        deflection_angle(self.direction(), next.direction())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        float_eq(self.0.x, 0.0) && float_eq(self.0.y, 0.0)
    }

    /// Either component is NaN.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.x.is_nan() || self.0.y.is_nan()
    }
}

impl From<Vector2<f64>> for Vector {
    fn from(v: Vector2<f64>) -> Self {
        Self(v)
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Self::Output {
        Vector(self.0 + rhs.0)
    }
}
impl std::ops::Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Self::Output {
        Vector(self.0 - rhs.0)
    }
}
impl std::ops::Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector(-self.0)
    }
}
impl std::ops::Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: f64) -> Self::Output {
        Vector(self.0 * k)
    }
}

/// Bearing of `(dx, dy)` in `[0, 2π)`.
#[inline]
pub fn direction(dx: f64, dy: f64) -> f64 {
    let d = dy.atan2(dx);
    if d < 0.0 {
        d + TAU
    } else {
        d
    }
}

/// Opposite bearing, stays in `[0, 2π)`.
#[inline]
pub fn reverse_direction(d: f64) -> f64 {
    if d < PI {
        d + PI
    } else {
        d - PI
    }
}

/// Signed turning angle from bearing `d0` to bearing `d1`, in `(-π, π]`.
///
/// Zero means straight-ahead continuation; positive values turn clockwise
/// (right), negative counter-clockwise (left).
pub fn deflection_angle(d0: f64, d1: f64) -> f64 {
    let mut a = d1 - reverse_direction(d0);
    if a < 0.0 {
        a += TAU;
    }
    PI - a
}

/// Wrap any angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to exactly TAU
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Signed doubled area of `(a, b, c)`: `(b − a) × (c − a)`.
///
/// Positive for a counter-clockwise turn, negative for clockwise, ~0 when collinear.
#[inline]
pub fn ccw(a: &Point, b: &Point, c: &Point) -> f64 {
    (*b - *a).cross(&(*c - *a))
}

#[inline]
pub fn float_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS_FLOAT
}

/// Round half away from zero to `digits` decimals.
#[inline]
pub fn round_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (x * p).round() / p
}
