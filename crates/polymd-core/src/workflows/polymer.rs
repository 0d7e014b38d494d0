use crate::core::forcefield::evaluator::ForceEvaluator;
use crate::core::forcefield::pair::PairInteraction;
use crate::core::io::observables::Observables;
use crate::core::io::traits::TrajectorySink;
use crate::core::models::ids::ParticleId;
use crate::core::models::system::ParticleSystem;
use crate::core::polymer::ChainGenerator;
use crate::engine::analysis::{capture_frame, observables};
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::integrator::{LangevinIntegrator, LangevinParams};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::SimulationState;
use crate::engine::warmup::{WarmupController, WarmupReport};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub particles: usize,
    pub bonds: usize,
    pub warmup: WarmupReport,
    /// Frames handed to the sink, warmup frames included.
    pub frames_written: usize,
    pub final_observables: Observables,
}

/// Builds the initial state: seeded random-walk chains with a FENE bond between every
/// pair of consecutive beads. Particle ids follow chain order.
pub fn build_state(config: &SimulationConfig) -> Result<SimulationState, EngineError> {
    let polymer = &config.polymer;
    let sim_box = config.system.sim_box;

    let generator = ChainGenerator::new(
        polymer.n_polymers,
        polymer.beads_per_chain,
        polymer.bond_length,
    )
    .with_min_distance(polymer.min_distance);
    let mut rng = StdRng::seed_from_u64(polymer.seed);
    let chains = generator.generate(&sim_box, &mut rng)?;

    let mut system = ParticleSystem::new();
    let fene = system.bonds.add_bond_type(config.interactions.fene);
    for chain in &chains {
        let mut previous: Option<ParticleId> = None;
        for &position in chain {
            let id = system.particles.add(position);
            if let Some(prev) = previous {
                system.add_bond(fene, prev, id)?;
            }
            previous = Some(id);
        }
    }

    Ok(SimulationState::new(system, sim_box))
}

pub fn build_integrator(config: &SimulationConfig) -> Result<LangevinIntegrator, EngineError> {
    let params = LangevinParams::new(
        config.system.time_step,
        config.thermostat.gamma,
        config.thermostat.kt,
    )?;
    let evaluator = ForceEvaluator::new(config.interactions.wca.map(PairInteraction::new));
    Ok(LangevinIntegrator::from_seed(
        params,
        evaluator,
        config.thermostat.seed,
    ))
}

#[instrument(skip_all, name = "polymer_workflow")]
pub fn run(
    config: &SimulationConfig,
    reporter: &ProgressReporter,
    sink: &mut dyn TrajectorySink,
) -> Result<RunSummary, EngineError> {
    // === Phase 1: Build the system ===
    reporter.report(Progress::PhaseStart {
        name: "Building System",
    });
    let mut state = build_state(config)?;
    let mut integrator = build_integrator(config)?;
    info!(
        particles = state.system.particles.len(),
        bonds = state.system.bonds.len(),
        "System built."
    );
    sink.write_structure(&state.snapshot(), &state.sim_box)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Warmup ===
    reporter.report(Progress::PhaseStart { name: "Warmup" });
    let mut controller = WarmupController::new(config.warmup.clone())?;
    let warmup = controller.run(&mut state, &mut integrator, reporter, sink)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Production ===
    let production = &config.production;
    reporter.report(Progress::PhaseStart { name: "Production" });
    reporter.report(Progress::TaskStart {
        total_steps: production.t_steps as u64,
    });
    info!(
        frames = production.t_steps,
        steps_per_frame = production.steps_per_frame,
        "Starting production."
    );
    for _ in 0..production.t_steps {
        integrator.run(&mut state, production.steps_per_frame)?;
        sink.write_frame(&capture_frame(&state))?;
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);
    sink.flush()?;
    reporter.report(Progress::PhaseFinish);

    let summary = RunSummary {
        particles: state.system.particles.len(),
        bonds: state.system.bonds.len(),
        frames_written: warmup.iterations + production.t_steps,
        warmup,
        final_observables: observables(&state),
    };
    info!(
        frames = summary.frames_written,
        time = summary.final_observables.time,
        "Run complete."
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::SimulationBox;
    use crate::core::io::TrajectoryError;
    use crate::core::io::traits::{Frame, NullSink};
    use crate::core::models::snapshot::Snapshot;
    use crate::engine::config::{ProductionConfig, SimulationConfigBuilder, WarmupConfig};

    #[derive(Default)]
    struct Recorder {
        structures: usize,
        frames: Vec<Frame>,
        flushed: bool,
    }

    impl TrajectorySink for Recorder {
        fn write_structure(
            &mut self,
            _: &Snapshot,
            _: &SimulationBox,
        ) -> Result<(), TrajectoryError> {
            self.structures += 1;
            Ok(())
        }

        fn write_frame(&mut self, frame: &Frame) -> Result<(), TrajectoryError> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<(), TrajectoryError> {
            self.flushed = true;
            Ok(())
        }
    }

    fn config(polymer_seed: u64) -> SimulationConfig {
        SimulationConfigBuilder::new()
            .box_length(20.0)
            .time_step(0.01)
            .kt(1.0)
            .gamma(1.0)
            .thermostat_seed(42)
            .wca(1.0, 1.0)
            .fene(10.0, 2.0)
            .n_polymers(2)
            .beads_per_chain(8)
            .bond_length(1.0)
            .polymer_seed(polymer_seed)
            .warmup_config(WarmupConfig {
                equilibration_steps: 20,
                thermalization_steps: 20,
                ..Default::default()
            })
            .production_config(ProductionConfig {
                t_steps: 5,
                steps_per_frame: 4,
            })
            .build()
            .unwrap()
    }

    #[test]
    fn build_state_bonds_consecutive_beads_within_each_chain() {
        let state = build_state(&config(3210)).unwrap();
        assert_eq!(state.system.particles.len(), 16);
        assert_eq!(state.system.bonds.len(), 14);
        for (bond, _) in state.system.bonds.iter() {
            assert_eq!(bond.b.index(), bond.a.index() + 1);
            assert_ne!(bond.a.index(), 7);
        }
    }

    #[test]
    fn build_integrator_uses_thermostat_settings() {
        let integrator = build_integrator(&config(1)).unwrap();
        assert_eq!(integrator.kt(), 1.0);
        assert_eq!(integrator.gamma(), 1.0);
        assert_eq!(integrator.time_step(), 0.01);
        assert!(integrator.evaluator().pair().is_some());
    }

    #[test]
    fn run_writes_structure_once_and_one_frame_per_iteration() {
        let mut recorder = Recorder::default();
        let summary = run(&config(3210), &ProgressReporter::new(), &mut recorder).unwrap();

        assert_eq!(recorder.structures, 1);
        assert!(recorder.flushed);
        assert_eq!(recorder.frames.len(), summary.frames_written);
        assert_eq!(summary.frames_written, summary.warmup.iterations + 5);
        assert_eq!(summary.particles, 16);
        assert_eq!(summary.bonds, 14);

        let last = recorder.frames.last().unwrap();
        assert_eq!(last.observables, summary.final_observables);
        assert_eq!(last.observables.force_cap, 0.0);
    }

    #[test]
    fn production_frames_are_spaced_by_steps_per_frame() {
        let mut recorder = Recorder::default();
        run(&config(7), &ProgressReporter::new(), &mut recorder).unwrap();

        let steps: Vec<u64> = recorder
            .frames
            .iter()
            .rev()
            .take(5)
            .map(|f| f.observables.step)
            .collect();
        for pair in steps.windows(2) {
            assert_eq!(pair[0] - pair[1], 4);
        }
    }

    #[test]
    fn identical_configuration_reproduces_the_run() {
        let first = run(&config(11), &ProgressReporter::new(), &mut NullSink).unwrap();
        let second = run(&config(11), &ProgressReporter::new(), &mut NullSink).unwrap();
        assert_eq!(first, second);
    }
}
