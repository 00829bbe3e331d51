//! Time-tagged 2D coordinate consumed by the vector kernel.
//!
//! `Point` is a `Copy` value: accessors and arithmetic always hand out an
//! independent value, so nothing returned from a `Vect` aliases its state.

use nalgebra::Vector2;

use crate::vector::Vector;

/// 2D coordinate with an optional timestamp component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    xy: Vector2<f64>,
    t: Option<f64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            xy: Vector2::new(x, y),
            t: None,
        }
    }

    #[inline]
    pub fn with_time(x: f64, y: f64, t: f64) -> Self {
        Self {
            xy: Vector2::new(x, y),
            t: Some(t),
        }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.xy.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.xy.y
    }

    #[inline]
    pub fn t(&self) -> Option<f64> {
        self.t
    }

    /// Timestamp, or `0.0` for untimed points.
    #[inline]
    pub fn time_or_zero(&self) -> f64 {
        self.t.unwrap_or(0.0)
    }

    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        self.xy
    }

    /// Same location, new timestamp.
    #[inline]
    pub fn at_time(self, t: f64) -> Self {
        Self { t: Some(t), ..self }
    }

    #[inline]
    pub fn scale(&self, k: f64) -> Point {
        Point::from(self.xy * k)
    }

    /// Euclidean distance between the two locations (timestamps ignored).
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).magnitude()
    }
}

impl From<Vector2<f64>> for Point {
    fn from(xy: Vector2<f64>) -> Self {
        Self { xy, t: None }
    }
}

impl From<[f64; 2]> for Point {
    fn from(c: [f64; 2]) -> Self {
        Self::new(c[0], c[1])
    }
}

/// Third component is the timestamp.
impl From<[f64; 3]> for Point {
    fn from(c: [f64; 3]) -> Self {
        Self::with_time(c[0], c[1], c[2])
    }
}

/// Translate by a vector. The result carries no timestamp.
impl std::ops::Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Self::Output {
        Point::from(self.xy + rhs.to_vector2())
    }
}

/// Displacement from `rhs` to `self`.
impl std::ops::Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Vector::from(self.xy - rhs.xy)
    }
}
