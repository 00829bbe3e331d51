//! Directed, located segment `A → B` with optional time tags.
//!
//! Purpose
//! - Carry the bound form of a `Vector`: side tests, point-to-segment
//!   distance, extend/deflect construction and synchronized Euclidean
//!   distance (SED) against a time-parameterized trajectory leg.
//!
//! Invariants
//! - `v == b − a` once construction completes.
//! - A `Vect` is never mutated; every transform returns a new value and all
//!   accessors return copies.
//!
//! Construction
//! - `VectSpec` names exactly one way of resolving the segment. A zero
//!   vector from `FromOriginAndVector` or `FromOriginMagnitudeDirection`
//!   yields the degenerate segment `b = a`, `v = (0, 0)`.

use std::f64::consts::PI;

use crate::cfg::ROUND_DIGITS;
use crate::point::Point;
use crate::side::{side_of, Side};
use crate::vector::{reverse_direction, round_to, wrap_angle, Vector};

/// The ways a `Vect` can be specified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VectSpec {
    FromEndpoints { a: Point, b: Point },
    FromOriginAndVector { a: Point, v: Vector },
    /// Polar form: magnitude `m` along bearing `d` (radians).
    FromOriginMagnitudeDirection { a: Point, m: f64, d: f64 },
}

/// Bound segment `a → b` with time tags `at`, `bt` and derived vector `v`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vect {
    a: Point,
    b: Point,
    at: f64,
    bt: f64,
    v: Vector,
}

impl Vect {
    /// Segment between two endpoints; time tags come from their timestamps.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self::from_spec(VectSpec::FromEndpoints { a, b })
    }

    /// Resolve a fully specified segment.
    ///
    /// Time tags: `at` is A's timestamp (or 0). `bt` is B's timestamp when B is
    /// given, otherwise `at`. Use `with_times` to override both.
    pub fn from_spec(spec: VectSpec) -> Self {
        match spec {
            VectSpec::FromEndpoints { a, b } => Self {
                a,
                b,
                at: a.time_or_zero(),
                bt: b.time_or_zero(),
                v: b - a,
            },
            VectSpec::FromOriginAndVector { a, v } => Self::from_origin(a, v),
            VectSpec::FromOriginMagnitudeDirection { a, m, d } => {
                Self::from_origin(a, Vector::from_polar(m, d))
            }
        }
    }

    fn from_origin(a: Point, v: Vector) -> Self {
        let at = a.time_or_zero();
        if v == Vector::zero() {
            return Self::degenerate(a);
        }
        Self {
            a,
            b: a + v,
            at,
            bt: at,
            v,
        }
    }

    fn degenerate(a: Point) -> Self {
        let t = a.time_or_zero();
        Self {
            a,
            b: a,
            at: t,
            bt: t,
            v: Vector::zero(),
        }
    }

    /// Same geometry with explicit time tags.
    #[inline]
    pub fn with_times(self, at: f64, bt: f64) -> Self {
        Self { at, bt, ..self }
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    #[inline]
    pub fn v(&self) -> Vector {
        self.v
    }

    #[inline]
    pub fn at(&self) -> f64 {
        self.at
    }

    #[inline]
    pub fn bt(&self) -> f64 {
        self.bt
    }

    /// Elapsed time `|bt − at|`.
    #[inline]
    pub fn dt(&self) -> f64 {
        (self.bt - self.at).abs()
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.v.magnitude()
    }

    #[inline]
    pub fn direction(&self) -> f64 {
        self.v.direction()
    }

    #[inline]
    pub fn reverse_direction(&self) -> f64 {
        self.v.reverse_direction()
    }

    /// Turning angle from this segment onto `next`.
    #[inline]
    pub fn deflection_angle(&self, next: &Vect) -> f64 {
        self.v.deflection_angle(&next.v)
    }

    /// Scalar projection of this segment's vector onto `onto`'s vector.
    #[inline]
    pub fn project(&self, onto: &Vect) -> f64 {
        self.v.project(&onto.v)
    }

    /// Side of `p` against the infinite line through `a → b`.
    #[inline]
    pub fn side_of(&self, p: &Point) -> Side {
        side_of(&self.a, &self.b, p)
    }

    /// Minimum distance from `p` to the bounded segment.
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        let u = *p - self.a;
        let proj = u.project(&self.v);
        if proj < 0.0 {
            return u.magnitude();
        }
        let negv = self.v.negate();
        let w = negv + u;
        if w.project(&negv) < 0.0 {
            return w.magnitude();
        }
        // foot of the perpendicular lies on the segment
        let h = round_to(u.magnitude(), ROUND_DIGITS);
        let a = round_to(proj.abs(), ROUND_DIGITS);
        if h == 0.0 && a == 0.0 {
            return 0.0;
        }
        let r = round_to(a / h, ROUND_DIGITS);
        // rounding can push r past 1 for points on the segment
        h * (1.0 - r * r).max(0.0).sqrt()
    }

    /// New segment of length `magnitude` anchored at `a` (or `b` when
    /// `from_end`), turned by `angle` from the back-bearing.
    ///
    /// The back-bearing is this segment's direction, reversed when extending
    /// from the end, so `angle = 0` from the start continues along `a → b`.
    pub fn extend_vect(&self, magnitude: f64, angle: f64, from_end: bool) -> Vect {
        let (anchor, back) = if from_end {
            (self.b, reverse_direction(self.direction()))
        } else {
            (self.a, self.direction())
        };
        Vect::from_spec(VectSpec::FromOriginMagnitudeDirection {
            a: anchor,
            m: magnitude,
            d: wrap_angle(back + angle),
        })
    }

    /// `extend_vect` with the angle measured as a deflection from
    /// straight-ahead continuation.
    #[inline]
    pub fn deflect_vector(&self, magnitude: f64, deflection: f64, from_end: bool) -> Vect {
        self.extend_vect(magnitude, PI - deflection, from_end)
    }

    /// Synchronized Euclidean distance vector.
    ///
    /// Interpolates the position at time `t` along this leg (uniform speed
    /// from `at` to `bt`) and returns the segment from there to `p`. A leg
    /// with `dt == 0` has no speed and yields non-finite components.
    pub fn sed_vector(&self, p: Point, t: f64) -> Vect {
        let m = (self.magnitude() / self.dt()) * (t - self.at);
        let along = self.extend_vect(m, 0.0, false);
        Vect::new(along.b.at_time(t), p)
    }
}

#[cfg(test)]
mod tests;
