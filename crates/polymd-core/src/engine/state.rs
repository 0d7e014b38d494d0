use crate::core::forcefield::params::ForceCap;
use crate::core::forcefield::term::EnergyTerm;
use crate::core::geometry::SimulationBox;
use crate::core::models::snapshot::Snapshot;
use crate::core::models::system::ParticleSystem;

/// Everything that evolves during a run, apart from the integrator's noise source.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub system: ParticleSystem,
    pub sim_box: SimulationBox,
    /// Pair force cap consulted by every force evaluation. Uncapped by default.
    pub force_cap: ForceCap,
    /// Potential energy from the most recent force evaluation.
    pub potential_energy: EnergyTerm,
    pub time: f64,
    pub step: u64,
}

impl SimulationState {
    pub fn new(system: ParticleSystem, sim_box: SimulationBox) -> Self {
        Self {
            system,
            sim_box,
            force_cap: ForceCap::uncapped(),
            potential_energy: EnergyTerm::default(),
            time: 0.0,
            step: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.system.snapshot()
    }

    pub(crate) fn advance_clock(&mut self, time_step: f64) {
        self.step += 1;
        self.time += time_step;
    }
}
