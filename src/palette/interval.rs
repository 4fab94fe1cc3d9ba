use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` inside `[0, 1]`.
///
/// Deserializes from a `[min, max]` pair and rejects pairs that are out of
/// order or leave the unit range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Build an interval from literal bounds. Callers guarantee
    /// `0 <= min <= max <= 1`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Linear interpolation; `t` is not clamped.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + self.span() * t
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = String;

    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) {
            return Err(format!("interval [{min}, {max}] leaves the unit range"));
        }
        if min > max {
            return Err(format!("interval [{min}, {max}] is reversed"));
        }
        Ok(Self { min, max })
    }
}

impl From<Interval> for [f64; 2] {
    fn from(value: Interval) -> Self {
        [value.min, value.max]
    }
}
