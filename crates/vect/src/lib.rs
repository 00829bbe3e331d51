//! 2D vector kernel: free vectors, bound segments, circular indexing and the
//! antipodal vertex search used by rotating-calipers algorithms.
//!
//! Layout
//! - `vector`: `Vector` algebra and bearing arithmetic in `[0, 2π)`.
//! - `vect`: `Vect`, a directed time-tagged segment built on `Vector`.
//! - `side`: `Side` classification from the cross-product sign.
//! - `circular`: wrap-around index normalization over a closed chain.
//! - `antipodal`: binary search for the vertex farthest from an edge.
//! - `rand`: reproducible convex chains for tests, benches and the CLI.
//!
//! Conventions
//! - All values are `Copy` and immutable; transforms return new values.
//! - Degenerate geometry (zero vectors, zero-length segments) is handled by
//!   fixed numeric guards in `cfg`, not by errors. Only bad indices error.

pub mod antipodal;
pub mod cfg;
pub mod circular;
pub mod point;
pub mod rand;
pub mod side;
pub mod vect;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use antipodal::{antipodal, antipodal_all, AntipodalError};
pub use circular::{CircularIndex, IndexError};
pub use point::Point;
pub use side::{side_of, Side};
pub use vect::{Vect, VectSpec};
pub use vector::Vector;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::antipodal::{antipodal, antipodal_all, AntipodalError};
    pub use crate::circular::{CircularIndex, IndexError};
    pub use crate::point::Point;
    pub use crate::rand::{draw_convex_chain, ChainCfg, ReplayToken, VertexCount, Winding};
    pub use crate::side::{side_of, Side};
    pub use crate::vect::{Vect, VectSpec};
    pub use crate::vector::{
        ccw, deflection_angle, direction, reverse_direction, wrap_angle, Vector,
    };
}
