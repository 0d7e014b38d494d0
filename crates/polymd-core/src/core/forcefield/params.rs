use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("WCA sigma must be positive, got {0}")]
    NonPositiveSigma(f64),
    #[error("WCA epsilon must be non-negative, got {0}")]
    NegativeEpsilon(f64),
    #[error("FENE spring constant k must be positive, got {0}")]
    NonPositiveSpringConstant(f64),
    #[error("FENE maximum extension d_r_max must be positive, got {0}")]
    NonPositiveMaxExtension(f64),
    #[error("Force cap must be finite and non-negative, got {0}")]
    InvalidForceCap(f64),
}

/// Parameters of the Weeks-Chandler-Andersen pair potential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WcaParams {
    epsilon: f64,
    sigma: f64,
}

impl WcaParams {
    pub fn new(epsilon: f64, sigma: f64) -> Result<Self, ParamError> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ParamError::NonPositiveSigma(sigma));
        }
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            return Err(ParamError::NegativeEpsilon(epsilon));
        }
        Ok(Self { epsilon, sigma })
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Position of the Lennard-Jones minimum, `2^(1/6) * sigma`, beyond which WCA is zero.
    #[inline]
    pub fn cutoff(&self) -> f64 {
        2f64.powf(1.0 / 6.0) * self.sigma
    }
}

/// Parameters of a FENE bond type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeneParams {
    k: f64,
    d_r_max: f64,
}

impl FeneParams {
    pub fn new(k: f64, d_r_max: f64) -> Result<Self, ParamError> {
        if !(k.is_finite() && k > 0.0) {
            return Err(ParamError::NonPositiveSpringConstant(k));
        }
        if !(d_r_max.is_finite() && d_r_max > 0.0) {
            return Err(ParamError::NonPositiveMaxExtension(d_r_max));
        }
        Ok(Self { k, d_r_max })
    }

    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }

    #[inline]
    pub fn d_r_max(&self) -> f64 {
        self.d_r_max
    }
}

/// Upper bound on the magnitude of a single pair force. A value of 0 disables capping.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ForceCap(f64);

impl ForceCap {
    pub fn new(value: f64) -> Result<Self, ParamError> {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ParamError::InvalidForceCap(value));
        }
        Ok(Self(value))
    }

    pub const fn uncapped() -> Self {
        Self(0.0)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.0 > 0.0
    }

    /// Scales the cap by `factor`, as done once per warmup iteration.
    pub fn scaled(self, factor: f64) -> Result<Self, ParamError> {
        Self::new(self.0 * factor)
    }

    /// Limits a force magnitude to the cap. Overflowed magnitudes clamp to the cap too.
    #[inline]
    pub fn clamp(&self, magnitude: f64) -> f64 {
        if self.is_active() && (magnitude.is_nan() || magnitude > self.0) {
            self.0
        } else {
            magnitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wca_cutoff_is_two_to_the_sixth_root_times_sigma() {
        let params = WcaParams::new(1.0, 2.0).unwrap();
        assert!((params.cutoff() - 2.0 * 1.122_462_048_309_373).abs() < 1e-12);
    }

    #[test]
    fn wca_rejects_non_positive_sigma_and_negative_epsilon() {
        assert_eq!(WcaParams::new(1.0, 0.0), Err(ParamError::NonPositiveSigma(0.0)));
        assert_eq!(
            WcaParams::new(-0.5, 1.0),
            Err(ParamError::NegativeEpsilon(-0.5))
        );
        assert!(WcaParams::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn fene_rejects_non_positive_parameters() {
        assert_eq!(
            FeneParams::new(0.0, 2.0),
            Err(ParamError::NonPositiveSpringConstant(0.0))
        );
        assert_eq!(
            FeneParams::new(10.0, -1.0),
            Err(ParamError::NonPositiveMaxExtension(-1.0))
        );
        assert!(FeneParams::new(f64::NAN, 2.0).is_err());
    }

    #[test]
    fn force_cap_rejects_negative_and_non_finite_values() {
        assert!(ForceCap::new(-1.0).is_err());
        assert!(ForceCap::new(f64::INFINITY).is_err());
        assert!(!ForceCap::new(0.0).unwrap().is_active());
    }

    #[test]
    fn clamp_limits_magnitude_to_cap() {
        let cap = ForceCap::new(2.0).unwrap();
        assert_eq!(cap.clamp(5.0), 2.0);
        assert_eq!(cap.clamp(1.5), 1.5);
        assert_eq!(cap.clamp(f64::INFINITY), 2.0);
        assert_eq!(cap.clamp(f64::NAN), 2.0);
    }

    #[test]
    fn uncapped_clamp_leaves_magnitude_untouched() {
        assert_eq!(ForceCap::uncapped().clamp(1e6), 1e6);
    }

    #[test]
    fn scaled_multiplies_the_cap_value() {
        let cap = ForceCap::new(1.0).unwrap().scaled(1.01).unwrap();
        assert!((cap.value() - 1.01).abs() < 1e-12);
    }
}
