use super::ModelError;
use super::bond::BondTable;
use super::ids::{BondTypeId, ParticleId};
use super::snapshot::Snapshot;
use super::store::ParticleStore;

/// Particles and the bonded topology that refers to them, owned together so that bond
/// participants can always be validated against the store.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    pub particles: ParticleStore,
    pub bonds: BondTable,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bond(
        &mut self,
        bond_type: BondTypeId,
        a: ParticleId,
        b: ParticleId,
    ) -> Result<(), ModelError> {
        self.bonds.add_bond(bond_type, a, b, &self.particles)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.particles, &self.bonds)
    }
}
