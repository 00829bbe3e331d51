//! Tolerance defaults for the 2D kernel.
//!
//! Policy
//! - Fixed constants, same values everywhere. Call sites never pass their own
//!   epsilons, so two segments built from the same input always classify a
//!   point identically.

/// Denominator substituted by `Vector::unit` when the magnitude is (near) zero.
pub const EPS_UNIT: f64 = 1e-12;
/// Float equality used for collinearity, zero-vector checks and projection ties.
pub const EPS_FLOAT: f64 = 1e-12;
/// Decimal digits kept when rounding intermediate distances.
pub const ROUND_DIGITS: i32 = 12;
/// Length of the orthogonal probe ray used by the antipodal search.
pub const PROBE_MAGNITUDE: f64 = 1e3;
