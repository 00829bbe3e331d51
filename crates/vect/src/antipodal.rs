//! Antipodal vertex search over a convex closed vertex chain.
//!
//! Purpose
//! - For the edge `H[i] → H[i+1]` find the vertex farthest from the edge's
//!   supporting line (rotating-calipers width/diameter primitive).
//!
//! Model
//! - The scan range is the chain minus the edge's two vertices, walked with
//!   `CircularIndex::reverse` so it may cross the seam at index 0.
//! - Offsets are measured by projecting onto a long ray orthogonal to the
//!   edge, pointing into the chain. Along a convex chain the offset rises and
//!   then falls, so comparing adjacent vertices at the midpoint tells which
//!   half holds the peak.
//!
//! Preconditions
//! - Convex chain with consistent winding (CW or CCW). Non-convex input breaks
//!   unimodality and the returned index is unspecified.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use crate::cfg::PROBE_MAGNITUDE;
use crate::circular::{CircularIndex, IndexError};
use crate::point::Point;
use crate::side::Side;
use crate::vect::{Vect, VectSpec};
use crate::vector::{float_eq, wrap_angle};

/// Errors surfaced by the antipodal search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntipodalError {
    /// An edge plus an opposite vertex needs at least three vertices.
    TooFewVertices { len: usize },
    /// Edge index outside the chain (or an internal index left the ring).
    Index(IndexError),
}

impl fmt::Display for AntipodalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntipodalError::TooFewVertices { len } => {
                write!(f, "antipodal search needs at least 3 vertices, got {len}")
            }
            AntipodalError::Index(e) => write!(f, "antipodal search: {e}"),
        }
    }
}

impl std::error::Error for AntipodalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AntipodalError::Index(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IndexError> for AntipodalError {
    fn from(e: IndexError) -> Self {
        AntipodalError::Index(e)
    }
}

/// Index of the vertex antipodal to edge `chain[i] → chain[i+1]` (circularly).
pub fn antipodal(chain: &[Point], i: usize) -> Result<usize, AntipodalError> {
    let n = chain.len();
    if n < 3 {
        return Err(AntipodalError::TooFewVertices { len: n });
    }
    let idx = CircularIndex::for_len(n)?;
    let i = idx.check(i as isize)?;
    let j = idx.reverse(i + 1)?;
    let at = |k: isize| -> Result<usize, IndexError> { Ok(idx.reverse(k)? as usize) };

    let probe = Vect::new(chain[i as usize], chain[j as usize]);
    let mut start = j + 1;
    let mut end = start + n as isize - 3;

    let side = probe.side_of(&chain[at(start)?]);
    if side == Side::On {
        tracing::debug!(edge = i, "antipodal: first scan vertex collinear with edge");
        return Ok(at(end)?);
    }
    let offset = if side == Side::Left { 3.0 * FRAC_PI_2 } else { FRAC_PI_2 };
    let ortho = Vect::from_spec(VectSpec::FromOriginMagnitudeDirection {
        a: chain[j as usize],
        m: PROBE_MAGNITUDE,
        d: wrap_angle(probe.reverse_direction() + offset),
    });
    let axis = ortho.v();
    let origin = chain[j as usize];
    let offset_of = |k: usize| (chain[k] - origin).project(&axis);

    while start < end {
        let mid = (start + end) / 2;
        let (m0, m1) = (at(mid)?, at(mid + 1)?);
        let (p0, p1) = (offset_of(m0), offset_of(m1));
        tracing::trace!(edge = i, start, end, mid, p0, p1, "antipodal step");
        if float_eq(p0, p1) {
            return Ok(m1);
        }
        if p0 < p1 {
            start = mid + 1;
        } else {
            end = mid;
        }
    }
    Ok(at(start)?)
}

/// Antipodal vertex for every edge of the chain, indexed by edge start.
pub fn antipodal_all(chain: &[Point]) -> Result<Vec<usize>, AntipodalError> {
    if chain.len() < 3 {
        return Err(AntipodalError::TooFewVertices { len: chain.len() });
    }
    (0..chain.len()).map(|i| antipodal(chain, i)).collect()
}
