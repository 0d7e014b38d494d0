use super::analysis::{capture_frame, minimum_distance};
use super::config::{ConfigError, WarmupConfig};
use super::error::EngineError;
use super::integrator::LangevinIntegrator;
use super::progress::{Progress, ProgressReporter};
use super::state::SimulationState;
use crate::core::forcefield::params::ForceCap;
use crate::core::io::traits::TrajectorySink;
use crate::core::neighbor::NeighborFinder;
use nalgebra::Vector3;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupPhase {
    /// Capped steps at zero temperature while the cap grows.
    Ramping,
    /// Uncapped steps at zero temperature.
    Equilibrating,
    /// Uncapped steps at the configured temperature.
    Thermalizing,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarmupReport {
    /// Number of cap increments performed.
    pub iterations: usize,
    /// Cap in force when the ramp ended.
    pub final_force_cap: f64,
    /// Minimum pair distance when the ramp ended.
    pub min_distance: Option<f64>,
}

/// Removes particle overlaps by integrating with a slowly growing pair force cap.
///
/// The integrator's temperature is taken as the target `kT`. It is forced to zero while
/// ramping and equilibrating and restored afterwards, also when the warmup fails.
#[derive(Debug, Clone)]
pub struct WarmupController {
    config: WarmupConfig,
    phase: WarmupPhase,
}

impl WarmupController {
    pub fn new(config: WarmupConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: WarmupPhase::Ramping,
        })
    }

    pub fn config(&self) -> &WarmupConfig {
        &self.config
    }

    pub fn phase(&self) -> WarmupPhase {
        self.phase
    }

    #[instrument(skip_all, name = "warmup")]
    pub fn run<R: Rng, N: NeighborFinder>(
        &mut self,
        state: &mut SimulationState,
        integrator: &mut LangevinIntegrator<R, N>,
        reporter: &ProgressReporter,
        sink: &mut dyn TrajectorySink,
    ) -> Result<WarmupReport, EngineError> {
        let target_kt = integrator.kt();
        integrator.set_temperature(0.0)?;

        let outcome = self.ramp_and_equilibrate(state, integrator, reporter, sink);
        integrator.set_temperature(target_kt)?;
        let report = outcome?;

        self.phase = WarmupPhase::Thermalizing;
        reporter.report(Progress::Message(format!(
            "Thermalizing at kT = {} for {} steps",
            target_kt, self.config.thermalization_steps
        )));
        info!(
            steps = self.config.thermalization_steps,
            kt = target_kt,
            "Thermalizing."
        );
        integrator.run(state, self.config.thermalization_steps)?;

        self.phase = WarmupPhase::Done;
        info!(
            iterations = report.iterations,
            final_force_cap = report.final_force_cap,
            "Warmup complete."
        );
        Ok(report)
    }

    fn ramp_and_equilibrate<R: Rng, N: NeighborFinder>(
        &mut self,
        state: &mut SimulationState,
        integrator: &mut LangevinIntegrator<R, N>,
        reporter: &ProgressReporter,
        sink: &mut dyn TrajectorySink,
    ) -> Result<WarmupReport, EngineError> {
        let config = self.config.clone();
        self.phase = WarmupPhase::Ramping;
        state.force_cap = ForceCap::new(config.initial_cap)?;

        let mut min_distance = minimum_distance(&state.system.particles, &state.sim_box);
        let mut iterations = 0;
        info!(
            min_distance = ?min_distance,
            target = config.target_min_distance,
            "Ramping force cap."
        );

        while let Some(distance) = min_distance.filter(|&d| d < config.target_min_distance) {
            if iterations >= config.max_iterations {
                warn!(
                    iterations,
                    min_distance = distance,
                    force_cap = state.force_cap.value(),
                    "Warmup gave up before reaching the target distance."
                );
                return Err(EngineError::WarmupDidNotConverge {
                    iterations,
                    min_distance: distance,
                    force_cap: state.force_cap.value(),
                });
            }

            sink.write_frame(&capture_frame(state))?;
            integrator.run(state, config.warm_steps)?;
            state.system.particles.set_velocities(Vector3::zeros());
            min_distance = minimum_distance(&state.system.particles, &state.sim_box);
            state.force_cap = state.force_cap.scaled(config.growth_factor)?;
            iterations += 1;

            debug!(
                iteration = iterations,
                min_distance = ?min_distance,
                force_cap = state.force_cap.value(),
                "Warmup iteration."
            );
            reporter.report(Progress::WarmupIteration {
                iteration: iterations,
                min_distance,
                force_cap: state.force_cap.value(),
            });
        }

        let report = WarmupReport {
            iterations,
            final_force_cap: state.force_cap.value(),
            min_distance,
        };

        self.phase = WarmupPhase::Equilibrating;
        state.force_cap = ForceCap::uncapped();
        reporter.report(Progress::Message(format!(
            "Force cap lifted after {} iterations, equilibrating for {} steps",
            iterations, config.equilibration_steps
        )));
        info!(steps = config.equilibration_steps, "Equilibrating without force cap.");
        integrator.run(state, config.equilibration_steps)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::evaluator::ForceEvaluator;
    use crate::core::forcefield::pair::PairInteraction;
    use crate::core::forcefield::params::WcaParams;
    use crate::core::geometry::SimulationBox;
    use crate::core::io::traits::{Frame, NullSink};
    use crate::core::models::snapshot::Snapshot;
    use crate::core::models::system::ParticleSystem;
    use crate::core::io::TrajectoryError;
    use crate::engine::integrator::LangevinParams;
    use nalgebra::Point3;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct FrameCounter(usize);

    impl TrajectorySink for FrameCounter {
        fn write_structure(
            &mut self,
            _: &Snapshot,
            _: &SimulationBox,
        ) -> Result<(), TrajectoryError> {
            Ok(())
        }

        fn write_frame(&mut self, _: &Frame) -> Result<(), TrajectoryError> {
            self.0 += 1;
            Ok(())
        }
    }

    fn overlapping_pair(distance: f64) -> SimulationState {
        let mut system = ParticleSystem::new();
        system.particles.add(Point3::origin());
        system.particles.add(Point3::new(distance, 0.0, 0.0));
        SimulationState::new(system, SimulationBox::Open)
    }

    fn integrator(kt: f64) -> LangevinIntegrator<StdRng> {
        let params = LangevinParams::new(0.01, 1.0, kt).unwrap();
        let evaluator = ForceEvaluator::new(Some(PairInteraction::new(
            WcaParams::new(1.0, 1.0).unwrap(),
        )));
        LangevinIntegrator::from_seed(params, evaluator, 42)
    }

    fn config() -> WarmupConfig {
        WarmupConfig {
            warm_steps: 10,
            initial_cap: 1.0,
            growth_factor: 1.01,
            target_min_distance: 0.95,
            max_iterations: 10_000,
            equilibration_steps: 100,
            thermalization_steps: 10,
        }
    }

    #[test]
    fn new_rejects_invalid_growth_factor() {
        let result = WarmupController::new(WarmupConfig {
            growth_factor: 0.5,
            ..config()
        });
        assert!(result.is_err());
    }

    #[test]
    fn overlapping_pair_is_separated_within_a_bounded_number_of_iterations() {
        let mut state = overlapping_pair(0.1);
        let mut integrator = integrator(1.0);
        let mut controller = WarmupController::new(config()).unwrap();
        let mut frames = FrameCounter::default();

        let report = controller
            .run(&mut state, &mut integrator, &ProgressReporter::new(), &mut frames)
            .unwrap();

        assert!(report.iterations > 0 && report.iterations < 1000);
        assert!(report.min_distance.unwrap() >= 0.95);
        assert!(report.final_force_cap > 1.0);
        assert_eq!(frames.0, report.iterations);
        assert_eq!(controller.phase(), WarmupPhase::Done);
        assert_eq!(state.force_cap, ForceCap::uncapped());
        assert_eq!(integrator.kt(), 1.0);
    }

    #[test]
    fn force_cap_grows_geometrically() {
        let mut state = overlapping_pair(0.1);
        let mut integrator = integrator(0.0);
        let mut controller = WarmupController::new(config()).unwrap();

        let report = controller
            .run(&mut state, &mut integrator, &ProgressReporter::new(), &mut NullSink)
            .unwrap();

        let expected = 1.01_f64.powi(report.iterations as i32);
        assert!((report.final_force_cap - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn exhausted_iterations_surface_as_warmup_did_not_converge() {
        let mut state = overlapping_pair(0.1);
        let mut integrator = integrator(1.0);
        let mut controller = WarmupController::new(WarmupConfig {
            max_iterations: 5,
            ..config()
        })
        .unwrap();

        let result =
            controller.run(&mut state, &mut integrator, &ProgressReporter::new(), &mut NullSink);

        match result {
            Err(EngineError::WarmupDidNotConverge {
                iterations,
                min_distance,
                force_cap,
            }) => {
                assert_eq!(iterations, 5);
                assert!(min_distance < 0.95);
                assert!((force_cap - 1.01_f64.powi(5)).abs() < 1e-9);
            }
            other => panic!("expected WarmupDidNotConverge, got {other:?}"),
        }
        assert_eq!(integrator.kt(), 1.0);
        assert_eq!(controller.phase(), WarmupPhase::Ramping);
    }

    #[test]
    fn separated_system_skips_the_ramp() {
        let mut state = overlapping_pair(2.0);
        let mut integrator = integrator(0.5);
        let mut controller = WarmupController::new(config()).unwrap();
        let mut frames = FrameCounter::default();

        let report = controller
            .run(&mut state, &mut integrator, &ProgressReporter::new(), &mut frames)
            .unwrap();

        assert_eq!(report.iterations, 0);
        assert_eq!(report.final_force_cap, 1.0);
        assert_eq!(frames.0, 0);
        assert_eq!(state.step, 110);
    }

    #[test]
    fn iterations_are_reported_to_the_progress_callback() {
        let count = std::sync::atomic::AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::WarmupIteration { .. } = event {
                count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            }
        }));
        let mut state = overlapping_pair(0.5);
        let mut integrator = integrator(0.0);
        let mut controller = WarmupController::new(config()).unwrap();

        let report = controller
            .run(&mut state, &mut integrator, &reporter, &mut NullSink)
            .unwrap();
        drop(reporter);

        assert_eq!(count.into_inner(), report.iterations);
    }

    #[test]
    fn phase_transitions_are_announced_in_order() {
        let messages = std::sync::Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(msg) = event {
                messages.lock().unwrap().push(msg);
            }
        }));
        let mut state = overlapping_pair(2.0);
        let mut integrator = integrator(0.5);
        let mut controller = WarmupController::new(config()).unwrap();

        controller
            .run(&mut state, &mut integrator, &reporter, &mut NullSink)
            .unwrap();
        drop(reporter);

        let messages = messages.into_inner().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Force cap lifted after 0 iterations"));
        assert!(messages[1].starts_with("Thermalizing at kT = 0.5"));
    }
}
