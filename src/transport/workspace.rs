//! Pre-allocated sample buffer for the simulation loop.
//!
//! This module provides [`TransportWorkspace`], which manages the uniform
//! sample buffer reused across layers and across simulation calls. The
//! buffer is sized once for the full photon count; each layer uses only its
//! first `surviving` elements as the population shrinks.

/// Pre-allocated workspace for photon transport simulation.
///
/// A single buffer of uniform draws sized for the full photon count. As
/// photons are absorbed the live prefix of the buffer shrinks with them,
/// so the simulation loop performs no allocation after construction.
///
/// # Examples
///
/// ```rust
/// use photon_transport::transport::TransportWorkspace;
///
/// let mut workspace = TransportWorkspace::new(1000);
/// let samples = workspace.uniforms_mut(250);
/// assert_eq!(samples.len(), 250);
/// ```
pub struct TransportWorkspace {
    /// Uniform samples, one per live photon at the current layer.
    uniforms: Vec<f64>,
    /// Current buffer capacity in photons.
    capacity: usize,
}

impl TransportWorkspace {
    /// Creates a new workspace sized for `n_photons`.
    pub fn new(n_photons: usize) -> Self {
        Self {
            uniforms: vec![0.0; n_photons],
            capacity: n_photons,
        }
    }

    /// Ensures the buffer can hold `n_photons` samples.
    ///
    /// Grows using a doubling strategy and never shrinks, so alternating
    /// between simulation sizes does not reallocate repeatedly.
    pub fn ensure_capacity(&mut self, n_photons: usize) {
        if n_photons > self.capacity {
            let new_capacity = n_photons.max(self.capacity * 2);
            self.uniforms.resize(new_capacity, 0.0);
            self.capacity = new_capacity;
        }
    }

    /// Returns the current capacity in photons.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a mutable slice over the first `count` samples.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds capacity (programming error; the simulator
    /// always calls [`ensure_capacity`](Self::ensure_capacity) first).
    #[inline]
    pub fn uniforms_mut(&mut self, count: usize) -> &mut [f64] {
        debug_assert!(count <= self.capacity);
        &mut self.uniforms[..count]
    }

    /// Returns a slice over the first `count` samples.
    #[inline]
    pub fn uniforms(&self, count: usize) -> &[f64] {
        &self.uniforms[..count]
    }
}

impl Default for TransportWorkspace {
    fn default() -> Self {
        Self::new(0)
    }
}
