//! # Photon Transport
//!
//! Monte Carlo estimation of photon transmission through layered absorbing
//! materials.
//!
//! A material slab is described by an attenuation-coefficient profile
//! sampled at uniform depth layers. The crate propagates a population of
//! simulated photons through the layers, subjecting each photon to one
//! Bernoulli survival trial per layer, and reports the transmitted
//! fraction with its binomial standard error.
//!
//! ## Quick Start
//!
//! ```rust
//! use photon_transport::photon_propagation;
//!
//! // Transparent material: everything gets through
//! let fraction = photon_propagation(&[0.0, 0.0, 0.0], 3.0, 1000).unwrap();
//! assert_eq!(fraction, 1.0);
//! ```
//!
//! ## Reproducible Simulations
//!
//! The one-shot entry point seeds from operating-system entropy. For
//! reproducible runs, build a [`PhotonSimulator`] with a seed:
//!
//! ```rust
//! use photon_transport::{AttenuationProfile, PhotonSimulator, TransportConfig};
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
//! assert!(result.fraction >= 0.0 && result.fraction <= 1.0);
//! ```
//!
//! ## Parallel Reduction
//!
//! For large photon counts, [`PhotonSimulator::transmission_parallel`]
//! splits the population across threads and sums partition survivor
//! counts. The external contract and statistics are unchanged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random number generation infrastructure
pub mod rng;

// Monte Carlo transport kernel
pub mod transport;

// Re-export commonly used items for convenience
pub use transport::{
    photon_propagation, AttenuationProfile, ParallelPolicy, PhotonSimulator,
    TransmissionResult, TransportConfig, TransportError,
};
