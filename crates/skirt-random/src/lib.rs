//! Deterministic uniform pseudo-random sequences.

pub mod minimal_standard;

pub use minimal_standard::MinimalStandardRandomSequence;

/// A sequence of pseudo-random numbers uniformly distributed in `[0, 1]`.
pub trait RandomSequence {
    /// Current value of the sequence.
    fn value(&self) -> f64;

    /// Move to the next number in the sequence.
    fn next(&mut self);

    /// Map the current value into the interval between `min` and `max`.
    ///
    /// The bounds may be given in either order, or be equal; the result always
    /// lies in the closed interval they span.
    fn range_value(&self, min: f64, max: f64) -> f64 {
        let v = min + (max - min) * self.value();
        // Rounding can step just outside the interval for wide ranges.
        v.clamp(min.min(max), min.max(max))
    }
}
