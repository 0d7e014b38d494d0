use super::ForceError;
use super::params::FeneParams;
use super::potentials::{fene_energy, fene_force_over_r};
use crate::core::models::bond::Bond;
use nalgebra::Vector3;

/// Force on the second bond participant and the bond energy.
///
/// The first participant receives `-force`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondContribution {
    pub force: Vector3<f64>,
    pub energy: f64,
}

/// FENE bond evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondedInteraction;

impl BondedInteraction {
    /// Evaluates `bond` for separation `r_vec = pos[b] - pos[a]`.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::BondOverExtended`] when `|r_vec| >= d_r_max`.
    #[inline]
    pub fn evaluate(
        &self,
        bond: &Bond,
        params: &FeneParams,
        r_vec: &Vector3<f64>,
    ) -> Result<BondContribution, ForceError> {
        let dist = r_vec.norm();
        let over_extended = || ForceError::BondOverExtended {
            a: bond.a,
            b: bond.b,
            distance: dist,
            max_extension: params.d_r_max(),
        };
        let ratio =
            fene_force_over_r(dist, params.k(), params.d_r_max()).ok_or_else(over_extended)?;
        let energy =
            fene_energy(dist, params.k(), params.d_r_max()).ok_or_else(over_extended)?;

        Ok(BondContribution {
            force: r_vec * ratio,
            energy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::{BondTypeId, ParticleId};

    fn bond() -> Bond {
        Bond {
            bond_type: BondTypeId(0),
            a: ParticleId(0),
            b: ParticleId(1),
        }
    }

    fn fene() -> FeneParams {
        FeneParams::new(10.0, 2.0).unwrap()
    }

    #[test]
    fn force_pulls_b_back_towards_a() {
        let c = BondedInteraction
            .evaluate(&bond(), &fene(), &Vector3::new(1.0, 0.0, 0.0))
            .unwrap();
        // f = -k r / (1 - (r/R)^2) = -10 / 0.75
        assert!((c.force.x + 10.0 / 0.75).abs() < 1e-12);
        assert_eq!(c.force.y, 0.0);
        assert!(c.energy > 0.0);
    }

    #[test]
    fn force_magnitude_diverges_near_max_extension() {
        let mut previous = 0.0;
        for &r in &[1.0, 1.5, 1.9, 1.99, 1.999] {
            let c = BondedInteraction
                .evaluate(&bond(), &fene(), &Vector3::new(0.0, 0.0, r))
                .unwrap();
            assert!(c.force.norm() > previous);
            previous = c.force.norm();
        }
        assert!(previous > 1e4);
    }

    #[test]
    fn extension_at_or_beyond_max_is_an_error() {
        for &r in &[2.0, 2.5] {
            let result =
                BondedInteraction.evaluate(&bond(), &fene(), &Vector3::new(r, 0.0, 0.0));
            match result {
                Err(ForceError::BondOverExtended {
                    a,
                    b,
                    distance,
                    max_extension,
                }) => {
                    assert_eq!(a, ParticleId(0));
                    assert_eq!(b, ParticleId(1));
                    assert_eq!(distance, r);
                    assert_eq!(max_extension, 2.0);
                }
                other => panic!("expected BondOverExtended, got {other:?}"),
            }
        }
    }
}
