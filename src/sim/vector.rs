//! 2D coordinate/displacement value type
//!
//! Grid units throughout: x grows to the right, y grows downward.

use std::ops::{Add, Mul, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Immutable (x, y) pair. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale both components by `factor`
    #[inline]
    pub fn times(self, factor: f64) -> Self {
        (DVec2::from(self) * factor).into()
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        DVec2::from(self).dot(other.into())
    }

    /// Euclidean length
    #[inline]
    pub fn magnitude(self) -> f64 {
        DVec2::from(self).length()
    }

    /// `atan2(x, y)`: the arguments are swapped relative to the usual
    /// `atan2(y, x)`. Kept that way for compatibility with existing callers.
    #[inline]
    pub fn direction(self) -> f64 {
        self.x.atan2(self.y)
    }
}

impl From<DVec2> for Vector {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector> for DVec2 {
    #[inline]
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        (DVec2::from(self) + DVec2::from(rhs)).into()
    }
}

impl Sub for Vector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        (DVec2::from(self) - DVec2::from(rhs)).into()
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.times(rhs)
    }
}
