use super::bond::BondTable;
use super::ids::ParticleId;
use super::store::ParticleStore;
use nalgebra::Point3;

/// Read-only copy of particle positions and bond topology, handed to trajectory writers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub particles: Vec<(ParticleId, Point3<f64>)>,
    pub bonds: Vec<(ParticleId, ParticleId)>,
}

impl Snapshot {
    pub fn capture(store: &ParticleStore, bonds: &BondTable) -> Self {
        Self {
            particles: store.iter().map(|p| (p.id, p.position)).collect(),
            bonds: bonds.bonds().iter().map(|b| (b.a, b.b)).collect(),
        }
    }
}
