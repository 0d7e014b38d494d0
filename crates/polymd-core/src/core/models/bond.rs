use super::ModelError;
use super::ids::{BondTypeId, ParticleId};
use super::store::ParticleStore;
use crate::core::forcefield::params::FeneParams;

/// A FENE bond between two distinct particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub bond_type: BondTypeId,
    pub a: ParticleId,
    pub b: ParticleId,
}

/// Bonded topology: the registered bond types and every bond instance.
///
/// Bonds are immutable once added.
#[derive(Debug, Clone, Default)]
pub struct BondTable {
    types: Vec<FeneParams>,
    bonds: Vec<Bond>,
}

impl BondTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bond_type(&mut self, params: FeneParams) -> BondTypeId {
        let id = BondTypeId(self.types.len());
        self.types.push(params);
        id
    }

    pub fn bond_type(&self, id: BondTypeId) -> Result<&FeneParams, ModelError> {
        self.types
            .get(id.index())
            .ok_or(ModelError::BondTypeNotFound(id))
    }

    /// Registers a bond between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParticipant`] if either particle is unknown to `store`
    /// or `a == b`, and [`ModelError::BondTypeNotFound`] for an unregistered type.
    pub fn add_bond(
        &mut self,
        bond_type: BondTypeId,
        a: ParticleId,
        b: ParticleId,
        store: &ParticleStore,
    ) -> Result<(), ModelError> {
        if a == b || !store.contains(a) || !store.contains(b) {
            return Err(ModelError::InvalidParticipant { a, b });
        }
        self.bond_type(bond_type)?;
        self.bonds.push(Bond { bond_type, a, b });
        Ok(())
    }

    /// Iterates over bonds in insertion order together with their parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&Bond, &FeneParams)> {
        self.bonds
            .iter()
            .map(|bond| (bond, &self.types[bond.bond_type.index()]))
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn store_with(n: usize) -> ParticleStore {
        let mut store = ParticleStore::new();
        for i in 0..n {
            store.add(Point3::new(i as f64, 0.0, 0.0));
        }
        store
    }

    fn fene() -> FeneParams {
        FeneParams::new(10.0, 2.0).unwrap()
    }

    #[test]
    fn add_bond_type_returns_sequential_ids() {
        let mut table = BondTable::new();
        assert_eq!(table.add_bond_type(fene()), BondTypeId(0));
        assert_eq!(table.add_bond_type(fene()), BondTypeId(1));
    }

    #[test]
    fn add_bond_between_known_particles_succeeds() {
        let store = store_with(2);
        let mut table = BondTable::new();
        let t = table.add_bond_type(fene());
        table
            .add_bond(t, ParticleId(0), ParticleId(1), &store)
            .unwrap();
        assert_eq!(table.len(), 1);
        let (bond, params) = table.iter().next().unwrap();
        assert_eq!(bond.a, ParticleId(0));
        assert_eq!(bond.b, ParticleId(1));
        assert_eq!(params, &fene());
    }

    #[test]
    fn add_bond_to_itself_is_invalid_participant() {
        let store = store_with(2);
        let mut table = BondTable::new();
        let t = table.add_bond_type(fene());
        let result = table.add_bond(t, ParticleId(1), ParticleId(1), &store);
        assert_eq!(
            result,
            Err(ModelError::InvalidParticipant {
                a: ParticleId(1),
                b: ParticleId(1)
            })
        );
    }

    #[test]
    fn add_bond_with_unknown_particle_is_invalid_participant() {
        let store = store_with(2);
        let mut table = BondTable::new();
        let t = table.add_bond_type(fene());
        let result = table.add_bond(t, ParticleId(0), ParticleId(7), &store);
        assert!(matches!(result, Err(ModelError::InvalidParticipant { .. })));
        assert!(table.is_empty());
    }

    #[test]
    fn add_bond_with_unknown_type_fails() {
        let store = store_with(2);
        let mut table = BondTable::new();
        let result = table.add_bond(BondTypeId(3), ParticleId(0), ParticleId(1), &store);
        assert_eq!(result, Err(ModelError::BondTypeNotFound(BondTypeId(3))));
    }
}
