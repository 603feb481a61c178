//! Error types for the photon transport kernel.
//!
//! All variants describe malformed input detected eagerly before any
//! simulation work begins; there are no runtime failure modes once a
//! simulation has started.

use thiserror::Error;

/// Categorised input validation errors.
///
/// Every variant is raised synchronously by the constructors of
/// [`AttenuationProfile`](super::profile::AttenuationProfile) and
/// [`TransportConfig`](super::config::TransportConfig); a simulation is
/// never partially run on invalid input.
///
/// # Examples
/// ```
/// use photon_transport::transport::TransportError;
///
/// let err = TransportError::ProfileTooShort { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("at least 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Profile has fewer samples than the two required to define a step.
    #[error("Profile must have at least {need} samples, got {got}")]
    ProfileTooShort {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        need: usize,
    },

    /// Attenuation coefficient is negative or non-finite.
    #[error("Invalid attenuation coefficient {value} at sample {index}: must be finite and non-negative")]
    InvalidCoefficient {
        /// Index of the offending sample.
        index: usize,
        /// The offending coefficient value.
        value: f64,
    },

    /// Thickness is zero, negative, or non-finite.
    #[error("Invalid thickness {0}: must be finite and positive")]
    InvalidThickness(f64),

    /// Photon count outside the valid range [1, MAX_PHOTONS].
    #[error("Invalid photon count {0}: must be in range [1, 100_000_000]")]
    InvalidPhotonCount(usize),
}
