use crate::camera::Float;

/// Closed range of reals, `min` and `max` may be infinite.
///
/// Used both for the accepted `t` range of an intersection query and for
/// clamping color channels before quantization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {
    /// Contains nothing
    pub const EMPTY: Interval = Interval::new(Float::INFINITY, Float::NEG_INFINITY);
    /// Contains every real
    pub const UNIVERSE: Interval = Interval::new(Float::NEG_INFINITY, Float::INFINITY);

    pub const fn new(min: Float, max: Float) -> Self {
        Interval { min, max }
    }

    /// Inclusive: `min <= x <= max`
    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    /// Exclusive: `min < x < max`
    pub fn surrounds(&self, x: Float) -> bool {
        self.min < x && x < self.max
    }

    /// Saturates `x` to `[min, max]`.
    /// Unlike `f64::clamp` this never panics, so an empty interval is tolerated.
    pub fn clamp(&self, x: Float) -> Float {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// Same interval with a new upper bound
    pub fn with_max(&self, max: Float) -> Self {
        Interval::new(self.min, max)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::EMPTY
    }
}
