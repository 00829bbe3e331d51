//! Circular (wrap-around) indexing over a closed sequence.
//!
//! A closed vertex chain of `max − origin + 1` elements is walked forward or
//! backward through its seam without modulo arithmetic on negative numbers:
//! - `forward` wraps an index that fell below `origin` onto the tail,
//! - `reverse` wraps an index that ran past `max` onto the head.
//!
//! Each wraps at most once. Anything still outside `[origin, max]` is an
//! `IndexError::OutOfBounds`, never a panic.

use std::fmt;

/// Errors surfaced by circular indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// Bounds with `max < origin` describe no elements.
    EmptyRange { origin: isize, max: isize },
    /// `index` does not map into `[origin, max]`.
    OutOfBounds { index: isize, origin: isize, max: isize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::EmptyRange { origin, max } => {
                write!(f, "empty circular range [{origin}, {max}]")
            }
            IndexError::OutOfBounds { index, origin, max } => {
                write!(f, "index {index} out of bounds for circular range [{origin}, {max}]")
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Inclusive bounds `[origin, max]` of a closed sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircularIndex {
    origin: isize,
    max: isize,
}

impl CircularIndex {
    pub fn new(origin: isize, max: isize) -> Result<Self, IndexError> {
        if max < origin {
            return Err(IndexError::EmptyRange { origin, max });
        }
        Ok(Self { origin, max })
    }

    /// Bounds `[0, len − 1]` for a sequence of `len` elements.
    pub fn for_len(len: usize) -> Result<Self, IndexError> {
        Self::new(0, len as isize - 1)
    }

    #[inline]
    pub fn origin(&self) -> isize {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> isize {
        self.max
    }

    /// Number of elements; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        (self.max - self.origin + 1) as usize
    }

    #[inline]
    pub fn contains(&self, k: isize) -> bool {
        k >= self.origin && k <= self.max
    }

    /// `k` itself if in range, else `k + len` for `k < origin`
    /// (`max + k + 1` when the origin is 0).
    pub fn forward(&self, k: isize) -> Result<isize, IndexError> {
        if self.contains(k) {
            return Ok(k);
        }
        if k < self.origin {
            let w = k + self.len() as isize;
            if self.contains(w) {
                return Ok(w);
            }
        }
        Err(self.out_of_bounds(k))
    }

    /// `k` itself if in range, else `k − len` for `k > max`
    /// (`k − max − 1` when the origin is 0).
    pub fn reverse(&self, k: isize) -> Result<isize, IndexError> {
        if self.contains(k) {
            return Ok(k);
        }
        if k > self.max {
            let w = k - self.len() as isize;
            if self.contains(w) {
                return Ok(w);
            }
        }
        Err(self.out_of_bounds(k))
    }

    /// `k` itself if in range, error otherwise.
    pub fn check(&self, k: isize) -> Result<isize, IndexError> {
        if self.contains(k) {
            Ok(k)
        } else {
            Err(self.out_of_bounds(k))
        }
    }

    fn out_of_bounds(&self, index: isize) -> IndexError {
        IndexError::OutOfBounds {
            index,
            origin: self.origin,
            max: self.max,
        }
    }
}
