use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoxError {
    #[error("Periodic box lengths must be positive and finite, got ({0}, {1}, {2})")]
    InvalidLength(f64, f64, f64),
}

/// The simulation domain.
///
/// An open box has no boundaries. A periodic box wraps separations with the
/// minimum-image convention; particle positions themselves are never folded, so
/// trajectories stay continuous.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SimulationBox {
    #[default]
    Open,
    Periodic(Vector3<f64>),
}

impl SimulationBox {
    pub fn periodic(lengths: Vector3<f64>) -> Result<Self, BoxError> {
        if lengths.iter().all(|l| l.is_finite() && *l > 0.0) {
            Ok(Self::Periodic(lengths))
        } else {
            Err(BoxError::InvalidLength(lengths.x, lengths.y, lengths.z))
        }
    }

    pub fn cubic(length: f64) -> Result<Self, BoxError> {
        Self::periodic(Vector3::repeat(length))
    }

    pub fn lengths(&self) -> Option<Vector3<f64>> {
        match self {
            Self::Open => None,
            Self::Periodic(lengths) => Some(*lengths),
        }
    }

    /// Shortest periodic image of the separation vector `dr`.
    #[inline]
    pub fn minimum_image(&self, dr: Vector3<f64>) -> Vector3<f64> {
        match self {
            Self::Open => dr,
            Self::Periodic(lengths) => {
                let shifts = dr.component_div(lengths).map(f64::round);
                dr - lengths.component_mul(&shifts)
            }
        }
    }

    /// Minimum-image separation `a - b`.
    #[inline]
    pub fn separation(&self, a: &Point3<f64>, b: &Point3<f64>) -> Vector3<f64> {
        self.minimum_image(a - b)
    }

    #[inline]
    pub fn distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        self.separation(a, b).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_image_wraps_each_component() {
        let sim_box = SimulationBox::cubic(10.0).unwrap();
        let dr = sim_box.minimum_image(Vector3::new(6.0, 3.0, -7.0));
        assert!((dr - Vector3::new(-4.0, 3.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn minimum_image_handles_multiple_box_lengths() {
        let sim_box = SimulationBox::periodic(Vector3::new(10.0, 4.0, 2.0)).unwrap();
        let dr = sim_box.minimum_image(Vector3::new(21.0, -9.0, 0.5));
        assert!((dr - Vector3::new(1.0, -1.0, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn open_box_leaves_separations_unchanged() {
        let sim_box = SimulationBox::Open;
        let a = Point3::new(100.0, 0.0, 0.0);
        let b = Point3::new(-100.0, 0.0, 0.0);
        assert_eq!(sim_box.separation(&a, &b), Vector3::new(200.0, 0.0, 0.0));
        assert!(sim_box.lengths().is_none());
    }

    #[test]
    fn distance_across_periodic_boundary_is_short() {
        let sim_box = SimulationBox::cubic(10.0).unwrap();
        let a = Point3::new(0.5, 5.0, 5.0);
        let b = Point3::new(9.5, 5.0, 5.0);
        assert!((sim_box.distance(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn periodic_rejects_non_positive_lengths() {
        assert!(SimulationBox::cubic(0.0).is_err());
        assert!(SimulationBox::periodic(Vector3::new(1.0, -1.0, 1.0)).is_err());
        assert!(SimulationBox::cubic(f64::NAN).is_err());
    }
}
