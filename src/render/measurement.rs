//! Width measurements.

use std::ops::Add;

/// Minimum and natural width of a renderable, in cells. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    min: usize,
    max: usize,
}

impl Measurement {
    /// Build a measurement; `max` is raised to `min` if smaller.
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// A measurement whose min and max are the same.
    pub fn exact(width: usize) -> Self {
        Self::new(width, width)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Elementwise maximum.
    pub fn union(self, other: Measurement) -> Measurement {
        Measurement::new(self.min.max(other.min), self.max.max(other.max))
    }

    /// Limit both bounds to `width`.
    pub fn clamp(self, width: usize) -> Measurement {
        Measurement::new(self.min.min(width), self.max.min(width))
    }
}

impl Add<usize> for Measurement {
    type Output = Measurement;

    fn add(self, extra: usize) -> Measurement {
        Measurement::new(self.min + extra, self.max + extra)
    }
}
