//! Monte Carlo photon transport kernel.
//!
//! This module estimates the fraction of photons transmitted through a
//! layered absorbing material. The material is described by an attenuation
//! profile sampled at M uniform depth layers; a population of N photons is
//! propagated layer by layer, with each photon subjected to one Bernoulli
//! survival trial per layer.
//!
//! # Architecture
//!
//! ```text
//! PhotonSimulator
//! ├── TransportConfig     (photon count, optional seed)
//! ├── AttenuationProfile  (validated coefficients + thickness)
//! ├── TransportWorkspace  (pre-allocated sample buffer)
//! ├── TransportRng        (random number generation)
//! └── transmission() / transmission_parallel()
//! ```
//!
//! # Algorithm
//!
//! With step size `dx = thickness / (M - 1)` the interaction probability at
//! layer i is `p[i] = mu[i] * dx`. Starting from `surviving = N`, each layer
//! draws `surviving` uniforms in [0, 1) and keeps the photons with
//! `u > p[i]`. The estimate is `surviving / N` after the last layer.
//!
//! Probabilities above 1 saturate naturally: no uniform draw can exceed
//! them, so such layers absorb everything without special-casing.
//!
//! # Examples
//!
//! ```rust
//! use photon_transport::transport::{
//!     AttenuationProfile, PhotonSimulator, TransportConfig,
//! };
//!
//! let config = TransportConfig::builder()
//!     .n_photons(100_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut simulator = PhotonSimulator::new(config).unwrap();
//! let profile = AttenuationProfile::new(vec![0.2, 0.5, 0.2], 1.0).unwrap();
//!
//! let result = simulator.transmission(&profile);
//! println!("T = {:.4} +/- {:.4}", result.fraction, result.confidence_95());
//! ```

pub mod config;
pub mod error;
pub mod parallel;
pub mod profile;
pub mod simulator;
pub mod workspace;

// Re-exports for convenient access
pub use config::{TransportConfig, TransportConfigBuilder, MAX_PHOTONS};
pub use error::TransportError;
pub use parallel::{ParallelPolicy, DEFAULT_MIN_PHOTONS_PER_THREAD};
pub use profile::{AttenuationProfile, MIN_SAMPLES};
pub use simulator::{photon_propagation, PhotonSimulator, TransmissionResult};
pub use workspace::TransportWorkspace;
