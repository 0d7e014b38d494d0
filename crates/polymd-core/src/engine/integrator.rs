use super::config::{ConfigError, require_non_negative, require_positive};
use super::state::SimulationState;
use crate::core::forcefield::ForceError;
use crate::core::forcefield::evaluator::ForceEvaluator;
use crate::core::forcefield::term::EnergyTerm;
use crate::core::neighbor::{BruteForce, NeighborFinder};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::{debug, instrument, trace};

/// Thermostat and time step of a [`LangevinIntegrator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LangevinParams {
    time_step: f64,
    gamma: f64,
    kt: f64,
}

impl LangevinParams {
    pub fn new(time_step: f64, gamma: f64, kt: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            time_step: require_positive("time_step", time_step)?,
            gamma: require_positive("gamma", gamma)?,
            kt: require_non_negative("kt", kt)?,
        })
    }

    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    #[inline]
    pub fn kt(&self) -> f64 {
        self.kt
    }
}

/// Semi-implicit Euler-Maruyama integration of the Langevin equation.
///
/// Each step evaluates forces at the current positions, then updates
///
/// ```text
/// v <- v + (F/m - gamma v) dt + xi,   xi ~ N(0, 2 gamma kT dt / m) per component
/// x <- x + v dt
/// ```
///
/// The noise source is owned by the integrator. Two integrators built from the same seed
/// and driven over identical states produce bit-identical trajectories.
#[derive(Debug, Clone)]
pub struct LangevinIntegrator<R: Rng = StdRng, N: NeighborFinder = BruteForce> {
    params: LangevinParams,
    rng: R,
    evaluator: ForceEvaluator,
    neighbors: N,
}

impl LangevinIntegrator<StdRng, BruteForce> {
    pub fn from_seed(params: LangevinParams, evaluator: ForceEvaluator, seed: u64) -> Self {
        Self::new(params, evaluator, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LangevinIntegrator<R, BruteForce> {
    pub fn new(params: LangevinParams, evaluator: ForceEvaluator, rng: R) -> Self {
        Self {
            params,
            rng,
            evaluator,
            neighbors: BruteForce::new(),
        }
    }
}

impl<R: Rng, N: NeighborFinder> LangevinIntegrator<R, N> {
    /// Replaces the pair enumeration strategy.
    pub fn with_neighbor_finder<M: NeighborFinder>(
        self,
        neighbors: M,
    ) -> LangevinIntegrator<R, M> {
        LangevinIntegrator {
            params: self.params,
            rng: self.rng,
            evaluator: self.evaluator,
            neighbors,
        }
    }

    pub fn params(&self) -> &LangevinParams {
        &self.params
    }

    pub fn evaluator(&self) -> &ForceEvaluator {
        &self.evaluator
    }

    #[inline]
    pub fn time_step(&self) -> f64 {
        self.params.time_step
    }

    #[inline]
    pub fn gamma(&self) -> f64 {
        self.params.gamma
    }

    #[inline]
    pub fn kt(&self) -> f64 {
        self.params.kt
    }

    /// Switches the thermostat temperature. `0` turns the integrator into damped,
    /// noise-free dynamics.
    pub fn set_temperature(&mut self, kt: f64) -> Result<(), ConfigError> {
        self.params.kt = require_non_negative("kt", kt)?;
        debug!(kt, "Thermostat temperature set.");
        Ok(())
    }

    /// Evaluates all forces at the current positions and commits them to the particle
    /// store. On error the store keeps the forces of the previous evaluation.
    pub fn compute_forces(
        &mut self,
        state: &mut SimulationState,
    ) -> Result<EnergyTerm, ForceError> {
        let positions = state.system.particles.positions();
        let pairs = self.neighbors.candidate_pairs(&positions, &state.sim_box);
        let output = self.evaluator.compute(
            &state.system,
            &positions,
            pairs,
            &state.sim_box,
            state.force_cap,
        )?;
        output.apply(&mut state.system.particles);
        state.potential_energy = output.energy;
        Ok(output.energy)
    }

    /// Advances `state` by one time step and returns the potential energy of the force
    /// evaluation that drove it.
    pub fn step(&mut self, state: &mut SimulationState) -> Result<EnergyTerm, ForceError> {
        let energy = self.compute_forces(state)?;

        let dt = self.params.time_step;
        let gamma = self.params.gamma;
        let noise_scale = if self.params.kt > 0.0 {
            (2.0 * gamma * self.params.kt * dt).sqrt()
        } else {
            0.0
        };
        let rng = &mut self.rng;

        for particle in state.system.particles.iter_mut() {
            let inv_mass = particle.mass.recip();
            let acceleration = particle.force * inv_mass - particle.velocity * gamma;
            particle.velocity += acceleration * dt;
            if noise_scale > 0.0 {
                let xi: Vector3<f64> = Vector3::from_fn(|_, _| rng.sample(StandardNormal));
                particle.velocity += xi * (noise_scale * inv_mass.sqrt());
            }
            particle.position += particle.velocity * dt;
        }

        state.advance_clock(dt);
        trace!(step = state.step, total = energy.total(), "Step complete.");
        Ok(energy)
    }

    /// Runs `steps` consecutive steps. With `steps == 0` the state is left as is and the
    /// energy of the last evaluation is returned.
    #[instrument(level = "debug", skip(self, state))]
    pub fn run(
        &mut self,
        state: &mut SimulationState,
        steps: usize,
    ) -> Result<EnergyTerm, ForceError> {
        let mut energy = state.potential_energy;
        for _ in 0..steps {
            energy = self.step(state)?;
        }
        Ok(energy)
    }
}
