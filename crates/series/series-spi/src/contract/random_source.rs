//! Injectable source of randomness.

/// Source of random draws used while synthesizing a series.
///
/// Generators never touch a global RNG; every draw goes through this trait so
/// tests can feed a fixed stream and production code can use a seeded PRNG.
pub trait RandomSource {
    /// Draw one sample from a normal distribution.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Draw a uniformly distributed index in `0..len`.
    ///
    /// Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}
