#[inline]
fn wca_cutoff(sigma: f64) -> f64 {
    2f64.powf(1.0 / 6.0) * sigma
}

/// Scalar WCA force `-dU/dr`, positive for repulsion. Zero at and beyond the cutoff.
#[inline]
pub fn wca_force(dist: f64, epsilon: f64, sigma: f64) -> f64 {
    if dist >= wca_cutoff(sigma) {
        return 0.0;
    }
    let rho6 = (sigma / dist).powi(6);
    let rho12 = rho6 * rho6;
    24.0 * epsilon * (2.0 * rho12 - rho6) / dist
}

/// WCA energy, shifted by `epsilon` so that it vanishes at the cutoff.
#[inline]
pub fn wca_energy(dist: f64, epsilon: f64, sigma: f64) -> f64 {
    if dist >= wca_cutoff(sigma) {
        return 0.0;
    }
    let rho6 = (sigma / dist).powi(6);
    let rho12 = rho6 * rho6;
    4.0 * epsilon * (rho12 - rho6) + epsilon
}

/// Ratio `f / r` of the restoring FENE force, i.e. `-k / (1 - (r/R)^2)`.
///
/// Returns `None` when `dist >= max_extension`, where the force is undefined.
#[inline]
pub fn fene_force_over_r(dist: f64, k: f64, max_extension: f64) -> Option<f64> {
    let denom = 1.0 - (dist / max_extension).powi(2);
    if dist >= max_extension || denom <= 0.0 {
        return None;
    }
    Some(-k / denom)
}

/// FENE energy `-0.5 k R^2 ln(1 - (r/R)^2)`.
#[inline]
pub fn fene_energy(dist: f64, k: f64, max_extension: f64) -> Option<f64> {
    let denom = 1.0 - (dist / max_extension).powi(2);
    if dist >= max_extension || denom <= 0.0 {
        return None;
    }
    Some(-0.5 * k * max_extension * max_extension * denom.ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn wca_force_and_energy_vanish_at_cutoff() {
        let rc = wca_cutoff(1.0);
        assert_eq!(wca_force(rc, 1.0, 1.0), 0.0);
        assert_eq!(wca_energy(rc, 1.0, 1.0), 0.0);
        assert!(wca_force(rc - 1e-9, 1.0, 1.0).abs() < 1e-6);
        assert!(wca_energy(rc - 1e-9, 1.0, 1.0).abs() < 1e-6);
    }

    #[test]
    fn wca_force_and_energy_are_zero_beyond_cutoff() {
        for &r in &[1.2, 2.0, 10.0] {
            assert_eq!(wca_force(r, 1.0, 1.0), 0.0);
            assert_eq!(wca_energy(r, 1.0, 1.0), 0.0);
        }
    }

    #[test]
    fn wca_at_sigma_matches_closed_form() {
        // At r = sigma: F = 24 eps / sigma, U = eps.
        assert!(f64_approx_equal(wca_force(1.0, 1.0, 1.0), 24.0));
        assert!(f64_approx_equal(wca_energy(1.0, 1.0, 1.0), 1.0));
        assert!(f64_approx_equal(wca_force(2.0, 0.5, 2.0), 6.0));
    }

    #[test]
    fn wca_with_zero_epsilon_is_inert() {
        assert_eq!(wca_force(0.5, 0.0, 1.0), 0.0);
        assert_eq!(wca_energy(0.5, 0.0, 1.0), 0.0);
    }

    #[test]
    fn fene_force_is_linear_for_small_extension() {
        let ratio = fene_force_over_r(1e-4, 10.0, 2.0).unwrap();
        assert!((ratio + 10.0).abs() < 1e-6);
    }

    #[test]
    fn fene_force_diverges_towards_max_extension() {
        let near = fene_force_over_r(1.999, 10.0, 2.0).unwrap();
        let mid = fene_force_over_r(1.0, 10.0, 2.0).unwrap();
        assert!(near.abs() > 100.0 * mid.abs());
        assert!(fene_force_over_r(2.0, 10.0, 2.0).is_none());
        assert!(fene_force_over_r(2.5, 10.0, 2.0).is_none());
    }

    #[test]
    fn fene_energy_is_zero_at_rest_length_and_grows() {
        assert!(f64_approx_equal(fene_energy(0.0, 10.0, 2.0).unwrap(), 0.0));
        let expected = -0.5 * 10.0 * 4.0 * (0.75f64).ln();
        assert!(f64_approx_equal(fene_energy(1.0, 10.0, 2.0).unwrap(), expected));
        assert!(fene_energy(2.0, 10.0, 2.0).is_none());
    }
}
