//! Parallel reduction over photon partitions.
//!
//! For large photon counts the population can be split into independent
//! partitions, propagated on separate threads, and the survivor counts
//! summed. This is a pure performance optimisation: each partition draws
//! from its own independently seeded generator, so the statistical
//! semantics of the sequential path are unchanged (partition results for a
//! given parent seed are reproducible, though they differ from the
//! sequential draw order).

use rayon::prelude::*;

use super::profile::AttenuationProfile;
use super::simulator::{propagate_population, PhotonSimulator, TransmissionResult};
use super::workspace::TransportWorkspace;
use crate::rng::TransportRng;

/// Default minimum photons per thread before parallelisation pays off.
pub const DEFAULT_MIN_PHOTONS_PER_THREAD: usize = 10_000;

/// Policy controlling when a simulation is split across threads.
///
/// # Examples
///
/// ```rust
/// use photon_transport::transport::ParallelPolicy;
///
/// let policy = ParallelPolicy::new(50_000);
/// // Small populations stay on the calling thread
/// assert!(!policy.should_parallelise(1_000));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ParallelPolicy {
    /// Minimum photons per thread for the parallel path to engage.
    min_photons_per_thread: usize,
}

impl ParallelPolicy {
    /// Creates a policy with the given per-thread threshold.
    #[inline]
    pub fn new(min_photons_per_thread: usize) -> Self {
        Self {
            min_photons_per_thread,
        }
    }

    /// Determines if parallelisation should be used for the given count.
    #[inline]
    pub fn should_parallelise(&self, n_photons: usize) -> bool {
        let n_threads = rayon::current_num_threads();
        n_photons >= self.min_photons_per_thread * n_threads
    }
}

impl Default for ParallelPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PHOTONS_PER_THREAD)
    }
}

impl PhotonSimulator {
    /// Estimates the transmission fraction, splitting the population
    /// across threads when the policy allows.
    ///
    /// Each partition propagates under its own generator, seeded from the
    /// simulator's stream, so draws across partitions are independent.
    /// Falls back to the sequential path for small populations.
    pub fn transmission_parallel(
        &mut self,
        profile: &AttenuationProfile,
        policy: &ParallelPolicy,
    ) -> TransmissionResult {
        let n_photons = self.config().n_photons();

        if !policy.should_parallelise(n_photons) {
            return self.transmission(profile);
        }

        let p = profile.step_probabilities();

        // One partition per thread; the last takes the remainder.
        let n_threads = rayon::current_num_threads();
        let chunk = n_photons.div_ceil(n_threads);
        let mut partitions = Vec::with_capacity(n_threads);
        let mut remaining = n_photons;
        while remaining > 0 {
            let count = chunk.min(remaining);
            partitions.push((self.rng.gen_seed(), count));
            remaining -= count;
        }

        let transmitted: usize = partitions
            .into_par_iter()
            .map(|(seed, count)| {
                let mut rng = TransportRng::from_seed(seed);
                let mut workspace = TransportWorkspace::new(count);
                propagate_population(&p, count, &mut rng, &mut workspace)
            })
            .sum();

        TransmissionResult::from_counts(transmitted, n_photons)
    }
}
