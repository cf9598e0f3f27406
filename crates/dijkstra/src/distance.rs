use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use serde::Serialize;
use serde::Serializer;

/// Path weight with a total order, `INFINITY` meaning "no path".
///
/// Only finite non-negative weights are ever added, so the order given by
/// `f64::total_cmp` agrees with the numeric one.
#[derive(Clone, Copy, Debug)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Self = Self(0.0);
    pub const INFINITY: Self = Self(f64::INFINITY);

    #[inline]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// `None` for unreachable.
    #[inline]
    pub fn finite(self) -> Option<f64> {
        self.is_finite().then_some(self.0)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<f64> for Distance {
    type Output = Distance;

    #[inline]
    fn add(self, weight: f64) -> Distance {
        Distance(self.0 + weight)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            fmt::Display::fmt(&self.0, f)
        } else {
            f.pad("inf")
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.finite().serialize(serializer)
    }
}
