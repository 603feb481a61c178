//! Photon transport simulation engine.
//!
//! This module provides the orchestration layer for the Monte Carlo
//! transmission estimate:
//! 1. Random number generation (via [`TransportRng`](crate::rng::TransportRng))
//! 2. Layer-by-layer survival trials over the shrinking photon population
//! 3. Aggregation into a [`TransmissionResult`]
//!
//! # Workspace Reuse
//!
//! The simulator maintains an internal
//! [`TransportWorkspace`](super::workspace::TransportWorkspace) that is
//! reused across simulation calls, so repeated estimates (e.g. one per
//! detector pixel) allocate nothing after the first call.

use super::config::TransportConfig;
use super::error::TransportError;
use super::profile::AttenuationProfile;
use super::workspace::TransportWorkspace;
use crate::rng::TransportRng;

/// Result of a transmission simulation.
///
/// Carries the transmitted fraction together with the raw counts and the
/// binomial standard error of the estimate.
///
/// # Examples
///
/// ```rust
/// use photon_transport::transport::TransmissionResult;
///
/// let result = TransmissionResult::from_counts(750, 1000);
/// assert_eq!(result.fraction, 0.75);
/// println!("T = {:.3} +/- {:.3}", result.fraction, result.confidence_95());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransmissionResult {
    /// Transmitted fraction in [0, 1].
    pub fraction: f64,
    /// Number of photons that traversed every layer.
    pub transmitted: usize,
    /// Number of photons simulated.
    pub simulated: usize,
    /// Binomial standard error of the fraction estimate.
    pub std_error: f64,
}

impl TransmissionResult {
    /// Builds a result from survivor and total counts.
    ///
    /// The standard error is the binomial `sqrt(f * (1 - f) / n)`; it is
    /// zero at the deterministic endpoints f = 0 and f = 1.
    pub fn from_counts(transmitted: usize, simulated: usize) -> Self {
        let fraction = transmitted as f64 / simulated as f64;
        let std_error = (fraction * (1.0 - fraction) / simulated as f64).sqrt();
        Self {
            fraction,
            transmitted,
            simulated,
            std_error,
        }
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Photon transport simulation engine.
///
/// Owns its configuration, sample workspace, and random number generator;
/// nothing is shared across simulator instances, so independent simulators
/// may run concurrently without synchronisation.
///
/// # Examples
///
/// ```rust
/// use photon_transport::transport::{
///     AttenuationProfile, PhotonSimulator, TransportConfig,
/// };
///
/// let config = TransportConfig::builder()
///     .n_photons(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut simulator = PhotonSimulator::new(config).unwrap();
/// let profile = AttenuationProfile::new(vec![0.2, 0.3, 0.2], 1.0).unwrap();
///
/// let result = simulator.transmission(&profile);
/// assert!(result.fraction >= 0.0 && result.fraction <= 1.0);
/// ```
pub struct PhotonSimulator {
    config: TransportConfig,
    workspace: TransportWorkspace,
    /// Random number generator (pub(crate) for the parallel path).
    pub(crate) rng: TransportRng,
}

impl PhotonSimulator {
    /// Creates a new simulator with the given configuration.
    ///
    /// Seeds the generator from the config seed when present, otherwise
    /// from operating-system entropy.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the configuration is invalid.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        config.validate()?;

        let workspace = TransportWorkspace::new(config.n_photons());
        let rng = match config.seed() {
            Some(seed) => TransportRng::from_seed(seed),
            None => TransportRng::from_entropy(),
        };

        Ok(Self {
            config,
            workspace,
            rng,
        })
    }

    /// Creates a new simulator with a specific seed.
    ///
    /// Convenience constructor that overrides the config seed.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the configuration is invalid.
    pub fn with_seed(config: TransportConfig, seed: u64) -> Result<Self, TransportError> {
        config.validate()?;

        let workspace = TransportWorkspace::new(config.n_photons());
        let rng = TransportRng::from_seed(seed);

        Ok(Self {
            config,
            workspace,
            rng,
        })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Resets the generator to the configured seed (or fresh entropy).
    pub fn reset(&mut self) {
        self.rng = match self.config.seed() {
            Some(seed) => TransportRng::from_seed(seed),
            None => TransportRng::from_entropy(),
        };
    }

    /// Resets the generator with a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = TransportRng::from_seed(seed);
    }

    /// Estimates the transmission fraction through the profiled material.
    ///
    /// Propagates the configured photon population through each layer in
    /// order. At layer i one uniform in [0, 1) is drawn per live photon and
    /// the photon survives iff `u > p[i]` (strict: equality absorbs).
    /// Absorbed photons are permanently removed; once the population hits
    /// zero the remaining layers draw no samples.
    ///
    /// # Guarantees
    ///
    /// - the returned fraction is always in [0.0, 1.0]
    /// - an all-zero profile returns exactly 1.0
    /// - a profile with every `p[i] >= 1` returns exactly 0.0
    pub fn transmission(&mut self, profile: &AttenuationProfile) -> TransmissionResult {
        let n_photons = self.config.n_photons();
        let p = profile.step_probabilities();

        let transmitted =
            propagate_population(&p, n_photons, &mut self.rng, &mut self.workspace);

        TransmissionResult::from_counts(transmitted, n_photons)
    }
}

/// Propagates a photon population through the layer probabilities.
///
/// Returns the number of photons surviving all layers. Exactly `surviving`
/// independent uniform draws are consumed at each layer; the population
/// never grows.
pub(crate) fn propagate_population(
    step_probabilities: &[f64],
    n_photons: usize,
    rng: &mut TransportRng,
    workspace: &mut TransportWorkspace,
) -> usize {
    workspace.ensure_capacity(n_photons);

    let mut surviving = n_photons;
    for &p in step_probabilities {
        let samples = workspace.uniforms_mut(surviving);
        rng.fill_uniform(samples);
        surviving = samples.iter().filter(|&&u| u > p).count();
    }

    surviving
}

/// Estimates the transmission fraction in a single call.
///
/// One-shot convenience wrapper over [`PhotonSimulator`]: validates the
/// inputs, seeds a fresh generator from operating-system entropy, and
/// returns the transmitted fraction. Use the simulator directly for
/// reproducible seeding or repeated estimates.
///
/// # Arguments
///
/// * `mu` - Attenuation coefficients, one per layer (at least 2)
/// * `thickness` - Total material thickness (finite, positive)
/// * `n_photons` - Number of photon trajectories (in [1, 100_000_000])
///
/// # Errors
///
/// Returns `TransportError` for malformed input; no simulation work is
/// performed in that case.
///
/// # Examples
///
/// ```rust
/// use photon_transport::photon_propagation;
///
/// let fraction = photon_propagation(&[0.0, 0.0, 0.0], 3.0, 1000).unwrap();
/// assert_eq!(fraction, 1.0);
/// ```
pub fn photon_propagation(
    mu: &[f64],
    thickness: f64,
    n_photons: usize,
) -> Result<f64, TransportError> {
    let profile = AttenuationProfile::new(mu.to_vec(), thickness)?;
    let config = TransportConfig::builder().n_photons(n_photons).build()?;
    let mut simulator = PhotonSimulator::new(config)?;

    Ok(simulator.transmission(&profile).fraction)
}
