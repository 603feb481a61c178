//! Pseudo-random number generator wrapper for the transport simulation.
//!
//! This module provides [`TransportRng`], a PRNG wrapper offering seeded
//! reproducible generation alongside an entropy-seeded default, with
//! efficient batch operations over pre-allocated buffers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Photon transport random number generator.
///
/// Wraps [`rand::rngs::StdRng`] and records the seed when one was supplied,
/// so reproducibility issues can be diagnosed after the fact. Entropy-seeded
/// instances report no seed.
///
/// # Examples
///
/// ```rust
/// use photon_transport::rng::TransportRng;
///
/// let mut rng1 = TransportRng::from_seed(42);
/// let mut rng2 = TransportRng::from_seed(42);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// ```
pub struct TransportRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, if the instance is reproducible.
    seed: Option<u64>,
}

impl TransportRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random
    /// numbers, enabling reproducible simulations.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a new RNG instance seeded from operating-system entropy.
    ///
    /// This matches typical Monte Carlo usage where each run is expected to
    /// be statistically independent rather than reproducible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use photon_transport::rng::TransportRng;
    ///
    /// let rng = TransportRng::from_entropy();
    /// assert_eq!(rng.seed(), None);
    /// ```
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed used for initialisation, or `None` for
    /// entropy-seeded instances.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a fresh 64-bit seed value.
    ///
    /// Used to derive independent child generators for parallel photon
    /// partitions from a single parent stream.
    #[inline]
    pub fn gen_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Fills the buffer with uniform random values in [0, 1).
    ///
    /// This is a zero-allocation operation; the buffer must be
    /// pre-allocated by the caller. Empty buffers are handled gracefully
    /// (no operation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use photon_transport::rng::TransportRng;
    ///
    /// let mut rng = TransportRng::from_seed(42);
    /// let mut buffer = vec![0.0; 1000];
    /// rng.fill_uniform(&mut buffer);
    ///
    /// for &value in &buffer {
    ///     assert!(value >= 0.0 && value < 1.0);
    /// }
    /// ```
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut rng1 = TransportRng::from_seed(12345);
        let mut rng2 = TransportRng::from_seed(12345);

        for _ in 0..100 {
            assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut rng1 = TransportRng::from_seed(1);
        let mut rng2 = TransportRng::from_seed(2);

        let a: Vec<f64> = (0..16).map(|_| rng1.gen_uniform()).collect();
        let b: Vec<f64> = (0..16).map(|_| rng2.gen_uniform()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = TransportRng::from_seed(42);
        for _ in 0..10_000 {
            let u = rng.gen_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_fill_uniform_range_and_determinism() {
        let mut rng1 = TransportRng::from_seed(7);
        let mut rng2 = TransportRng::from_seed(7);

        let mut a = vec![0.0; 512];
        let mut b = vec![0.0; 512];
        rng1.fill_uniform(&mut a);
        rng2.fill_uniform(&mut b);

        assert_eq!(a, b);
        assert!(a.iter().all(|&u| (0.0..1.0).contains(&u)));
    }

    #[test]
    fn test_fill_uniform_empty_buffer() {
        let mut rng = TransportRng::from_seed(42);
        let mut empty: Vec<f64> = vec![];
        rng.fill_uniform(&mut empty);
    }

    #[test]
    fn test_seed_tracking() {
        assert_eq!(TransportRng::from_seed(99).seed(), Some(99));
        assert_eq!(TransportRng::from_entropy().seed(), None);
    }

    #[test]
    fn test_entropy_rngs_are_independent() {
        let mut rng1 = TransportRng::from_entropy();
        let mut rng2 = TransportRng::from_entropy();

        let a: Vec<f64> = (0..16).map(|_| rng1.gen_uniform()).collect();
        let b: Vec<f64> = (0..16).map(|_| rng2.gen_uniform()).collect();
        // 16 identical consecutive draws from independent entropy-seeded
        // generators would indicate a broken seeding path.
        assert_ne!(a, b);
    }
}
