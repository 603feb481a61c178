//! Attenuation profile and its discretisation.
//!
//! An [`AttenuationProfile`] pairs a sampled attenuation-coefficient curve
//! with the physical thickness it spans. Validation happens once at
//! construction, so the simulation loop operates on known-good data.

use super::error::TransportError;

/// Minimum number of profile samples required to define a step.
pub const MIN_SAMPLES: usize = 2;

/// A validated, immutable attenuation profile over a material slab.
///
/// The profile holds one attenuation coefficient per discretisation layer,
/// sampled at uniform depth intervals across `thickness`. With M samples
/// the step size is `thickness / (M - 1)` and the per-layer interaction
/// probability is `mu[i] * dx`.
///
/// # Examples
///
/// ```rust
/// use photon_transport::transport::AttenuationProfile;
///
/// let profile = AttenuationProfile::new(vec![0.2, 0.4, 0.2], 3.0).unwrap();
/// assert_eq!(profile.n_layers(), 3);
/// assert_eq!(profile.step_size(), 1.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AttenuationProfile {
    /// Attenuation coefficients, one per layer.
    coefficients: Vec<f64>,
    /// Total physical thickness spanned by the profile.
    thickness: f64,
}

impl AttenuationProfile {
    /// Creates a validated profile.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Attenuation coefficients, one per layer
    /// * `thickness` - Total physical thickness (must be finite and positive)
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if:
    /// - fewer than two samples are provided (step size would be undefined)
    /// - any coefficient is negative or non-finite
    /// - `thickness` is zero, negative, or non-finite
    pub fn new(coefficients: Vec<f64>, thickness: f64) -> Result<Self, TransportError> {
        if coefficients.len() < MIN_SAMPLES {
            return Err(TransportError::ProfileTooShort {
                got: coefficients.len(),
                need: MIN_SAMPLES,
            });
        }
        for (index, &value) in coefficients.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(TransportError::InvalidCoefficient { index, value });
            }
        }
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(TransportError::InvalidThickness(thickness));
        }

        Ok(Self {
            coefficients,
            thickness,
        })
    }

    /// Returns the attenuation coefficients.
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the total thickness.
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns the number of discretisation layers.
    #[inline]
    pub fn n_layers(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the depth step between consecutive samples.
    ///
    /// Always strictly positive: construction guarantees at least two
    /// samples and a positive thickness.
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.thickness / (self.coefficients.len() - 1) as f64
    }

    /// Returns the per-layer interaction probabilities `mu[i] * dx`.
    ///
    /// Values may exceed 1.0 for strongly attenuating layers or coarse
    /// discretisations; the survival test `u > p[i]` then saturates to
    /// certain absorption, since uniform draws never reach 1.0.
    pub fn step_probabilities(&self) -> Vec<f64> {
        let dx = self.step_size();
        self.coefficients.iter().map(|&mu| mu * dx).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profile_valid_construction() {
        let profile = AttenuationProfile::new(vec![0.1, 0.2, 0.3], 2.0).unwrap();
        assert_eq!(profile.n_layers(), 3);
        assert_eq!(profile.thickness(), 2.0);
        assert_eq!(profile.coefficients(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_profile_step_size() {
        // 3 samples over thickness 3.0 -> dx = 1.5
        let profile = AttenuationProfile::new(vec![0.0, 0.0, 0.0], 3.0).unwrap();
        assert_relative_eq!(profile.step_size(), 1.5);

        // 2 samples over thickness 1.0 -> dx = 1.0
        let profile = AttenuationProfile::new(vec![10.0, 10.0], 1.0).unwrap();
        assert_relative_eq!(profile.step_size(), 1.0);
    }

    #[test]
    fn test_profile_step_probabilities() {
        let profile = AttenuationProfile::new(vec![0.1, 0.2, 0.4], 4.0).unwrap();
        let p = profile.step_probabilities();
        assert_eq!(p.len(), 3);
        assert_relative_eq!(p[0], 0.2);
        assert_relative_eq!(p[1], 0.4);
        assert_relative_eq!(p[2], 0.8);
    }

    #[test]
    fn test_profile_step_probabilities_can_saturate() {
        let profile = AttenuationProfile::new(vec![10.0, 10.0], 1.0).unwrap();
        let p = profile.step_probabilities();
        assert!(p.iter().all(|&pi| pi >= 1.0));
    }

    #[test]
    fn test_profile_empty_rejected() {
        let result = AttenuationProfile::new(vec![], 1.0);
        assert_eq!(
            result,
            Err(TransportError::ProfileTooShort { got: 0, need: 2 })
        );
    }

    #[test]
    fn test_profile_single_sample_rejected() {
        let result = AttenuationProfile::new(vec![0.1], 1.0);
        assert_eq!(
            result,
            Err(TransportError::ProfileTooShort { got: 1, need: 2 })
        );
    }

    #[test]
    fn test_profile_negative_coefficient_rejected() {
        let result = AttenuationProfile::new(vec![0.1, -0.2, 0.3], 1.0);
        assert!(matches!(
            result,
            Err(TransportError::InvalidCoefficient { index: 1, .. })
        ));
    }

    #[test]
    fn test_profile_non_finite_coefficient_rejected() {
        let result = AttenuationProfile::new(vec![0.1, f64::NAN], 1.0);
        assert!(matches!(
            result,
            Err(TransportError::InvalidCoefficient { index: 1, .. })
        ));

        let result = AttenuationProfile::new(vec![f64::INFINITY, 0.1], 1.0);
        assert!(matches!(
            result,
            Err(TransportError::InvalidCoefficient { index: 0, .. })
        ));
    }

    #[test]
    fn test_profile_zero_thickness_rejected() {
        let result = AttenuationProfile::new(vec![0.1, 0.2], 0.0);
        assert_eq!(result, Err(TransportError::InvalidThickness(0.0)));
    }

    #[test]
    fn test_profile_negative_thickness_rejected() {
        let result = AttenuationProfile::new(vec![0.1, 0.2], -5.0);
        assert_eq!(result, Err(TransportError::InvalidThickness(-5.0)));
    }

    #[test]
    fn test_profile_non_finite_thickness_rejected() {
        let result = AttenuationProfile::new(vec![0.1, 0.2], f64::NAN);
        assert!(matches!(result, Err(TransportError::InvalidThickness(_))));
    }

    #[test]
    fn test_zero_coefficients_allowed() {
        // A fully transparent profile is valid input.
        let profile = AttenuationProfile::new(vec![0.0, 0.0], 1.0).unwrap();
        assert!(profile.step_probabilities().iter().all(|&p| p == 0.0));
    }
}
