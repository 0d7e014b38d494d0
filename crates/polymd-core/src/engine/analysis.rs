use super::state::SimulationState;
use crate::core::geometry::SimulationBox;
use crate::core::io::observables::Observables;
use crate::core::io::traits::Frame;
use crate::core::models::store::ParticleStore;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Smallest separation between any two particles, honouring periodic images.
///
/// Returns `None` for fewer than two particles. Coincident particles yield `Some(0.0)`.
pub fn minimum_distance(store: &ParticleStore, sim_box: &SimulationBox) -> Option<f64> {
    let positions = store.positions();
    minimum_distance_of(&positions, sim_box)
}

fn minimum_distance_of(positions: &[Point3<f64>], sim_box: &SimulationBox) -> Option<f64> {
    let row_minimum = |i: usize| -> Option<f64> {
        positions[i + 1..]
            .iter()
            .map(|other| sim_box.distance(&positions[i], other))
            .min_by(|a, b| a.total_cmp(b))
    };

    let rows = 0..positions.len().saturating_sub(1);

    #[cfg(not(feature = "parallel"))]
    let iterator = rows.into_iter();

    #[cfg(feature = "parallel")]
    let iterator = rows.into_par_iter();

    iterator
        .filter_map(row_minimum)
        .min_by(|a, b| a.total_cmp(b))
}

pub fn kinetic_energy(store: &ParticleStore) -> f64 {
    store.iter().map(|p| p.kinetic_energy()).sum()
}

/// Instantaneous kinetic temperature `2 KE / (3 N)` in energy units.
pub fn temperature(store: &ParticleStore) -> f64 {
    if store.is_empty() {
        return 0.0;
    }
    2.0 * kinetic_energy(store) / (3.0 * store.len() as f64)
}

pub fn observables(state: &SimulationState) -> Observables {
    let store = &state.system.particles;
    let kinetic = kinetic_energy(store);
    let potential = state.potential_energy;
    Observables {
        step: state.step,
        time: state.time,
        min_distance: minimum_distance(store, &state.sim_box),
        kinetic_energy: kinetic,
        pair_energy: potential.pair,
        bond_energy: potential.bonded,
        total_energy: kinetic + potential.total(),
        temperature: temperature(store),
        force_cap: state.force_cap.value(),
    }
}

/// Snapshot plus observables of the current state, ready for a trajectory sink.
pub fn capture_frame(state: &SimulationState) -> Frame {
    Frame {
        snapshot: state.snapshot(),
        observables: observables(state),
    }
}
