//! Simulation configuration.
//!
//! This module provides the configuration type and builder for photon
//! transport simulations.

use super::error::TransportError;

/// Maximum number of simulated photons allowed.
pub const MAX_PHOTONS: usize = 100_000_000;

/// Photon transport simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`TransportConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use photon_transport::transport::TransportConfig;
///
/// let config = TransportConfig::builder()
///     .n_photons(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_photons(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Number of independent photon trajectories to simulate.
    n_photons: usize,
    /// Optional seed for reproducibility; entropy-seeded when absent.
    seed: Option<u64>,
}

impl TransportConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }

    /// Returns the number of simulated photons.
    #[inline]
    pub fn n_photons(&self) -> usize {
        self.n_photons
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if `n_photons` is 0 or greater than
    /// [`MAX_PHOTONS`].
    pub fn validate(&self) -> Result<(), TransportError> {
        if self.n_photons == 0 || self.n_photons > MAX_PHOTONS {
            return Err(TransportError::InvalidPhotonCount(self.n_photons));
        }
        Ok(())
    }
}

/// Builder for [`TransportConfig`].
///
/// Provides a fluent API for constructing configurations with validation
/// at build time.
///
/// # Examples
///
/// ```rust
/// use photon_transport::transport::TransportConfig;
///
/// let config = TransportConfig::builder()
///     .n_photons(50_000)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransportConfigBuilder {
    n_photons: Option<usize>,
    seed: Option<u64>,
}

impl TransportConfigBuilder {
    /// Sets the number of simulated photons.
    ///
    /// # Arguments
    ///
    /// * `n_photons` - Photon count in [1, 100_000_000]
    #[inline]
    pub fn n_photons(mut self, n_photons: usize) -> Self {
        self.n_photons = Some(n_photons);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// Without a seed, the simulator seeds itself from operating-system
    /// entropy and results are not reproducible across runs.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if `n_photons` is not set or invalid.
    pub fn build(self) -> Result<TransportConfig, TransportError> {
        let n_photons = self
            .n_photons
            .ok_or(TransportError::InvalidPhotonCount(0))?;

        let config = TransportConfig {
            n_photons,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
