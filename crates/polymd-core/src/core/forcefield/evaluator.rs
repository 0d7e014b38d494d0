use super::ForceError;
use super::bonded::BondedInteraction;
use super::pair::{PairContribution, PairInteraction};
use super::params::ForceCap;
use super::term::EnergyTerm;
use crate::core::geometry::SimulationBox;
use crate::core::models::ModelError;
use crate::core::models::store::ParticleStore;
use crate::core::models::system::ParticleSystem;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-particle forces and energies of a complete evaluation pass, indexed like the
/// particle store.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceOutput {
    pub forces: Vec<Vector3<f64>>,
    pub energy: EnergyTerm,
}

impl ForceOutput {
    /// Vector sum of all forces. Zero up to rounding for internal interactions.
    pub fn net_force(&self) -> Vector3<f64> {
        self.forces.iter().fold(Vector3::zeros(), |acc, f| acc + f)
    }

    /// Clears the force accumulators of `store` and writes this pass into them.
    pub fn apply(&self, store: &mut ParticleStore) {
        store.reset_forces();
        for (particle, force) in store.iter_mut().zip(&self.forces) {
            particle.add_force(force);
        }
    }
}

/// Computes all interaction forces of a system.
///
/// Results are accumulated into a fresh buffer, so a failing bond leaves the particle
/// store untouched.
#[derive(Debug, Clone, Default)]
pub struct ForceEvaluator {
    pair: Option<PairInteraction>,
    bonded: BondedInteraction,
}

impl ForceEvaluator {
    pub fn new(pair: Option<PairInteraction>) -> Self {
        Self {
            pair,
            bonded: BondedInteraction,
        }
    }

    pub fn pair(&self) -> Option<&PairInteraction> {
        self.pair.as_ref()
    }

    /// Evaluates pair forces over `pairs` and every bond of `system`.
    ///
    /// `positions` must be the current particle positions in store order. Pair
    /// contributions may be computed in parallel but are always summed in pair order, so
    /// the result does not depend on the thread count.
    pub fn compute(
        &self,
        system: &ParticleSystem,
        positions: &[Point3<f64>],
        pairs: &[(usize, usize)],
        sim_box: &SimulationBox,
        cap: ForceCap,
    ) -> Result<ForceOutput, ForceError> {
        let mut forces = vec![Vector3::zeros(); positions.len()];
        let bonded = self.accumulate_bonds(system, positions, sim_box, &mut forces)?;
        let pair = self.accumulate_pairs(positions, pairs, sim_box, cap, &mut forces);

        Ok(ForceOutput {
            forces,
            energy: EnergyTerm::new(pair, bonded),
        })
    }

    fn accumulate_bonds(
        &self,
        system: &ParticleSystem,
        positions: &[Point3<f64>],
        sim_box: &SimulationBox,
        forces: &mut [Vector3<f64>],
    ) -> Result<f64, ForceError> {
        let mut energy = 0.0;
        for (bond, params) in system.bonds.iter() {
            let pos_a = positions
                .get(bond.a.index())
                .ok_or(ModelError::ParticleNotFound(bond.a))?;
            let pos_b = positions
                .get(bond.b.index())
                .ok_or(ModelError::ParticleNotFound(bond.b))?;
            let r_vec = sim_box.separation(pos_b, pos_a);
            let contribution = self.bonded.evaluate(bond, params, &r_vec)?;

            forces[bond.b.index()] += contribution.force;
            forces[bond.a.index()] -= contribution.force;
            energy += contribution.energy;
        }
        Ok(energy)
    }

    fn accumulate_pairs(
        &self,
        positions: &[Point3<f64>],
        pairs: &[(usize, usize)],
        sim_box: &SimulationBox,
        cap: ForceCap,
        forces: &mut [Vector3<f64>],
    ) -> f64 {
        let Some(pair) = &self.pair else {
            return 0.0;
        };
        let evaluate = |&(i, j): &(usize, usize)| -> PairContribution {
            let r_vec = sim_box.separation(&positions[i], &positions[j]);
            pair.evaluate(&r_vec, cap)
        };

        #[cfg(not(feature = "parallel"))]
        let iterator = pairs.iter();

        #[cfg(feature = "parallel")]
        let iterator = pairs.par_iter();

        let contributions: Vec<PairContribution> = iterator.map(evaluate).collect();

        let mut energy = 0.0;
        for (&(i, j), contribution) in pairs.iter().zip(&contributions) {
            forces[i] += contribution.force;
            forces[j] -= contribution.force;
            energy += contribution.energy;
        }
        energy
    }
}
