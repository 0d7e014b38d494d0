use super::config::ConfigError;
use crate::core::forcefield::ForceError;
use crate::core::forcefield::params::ParamError;
use crate::core::io::TrajectoryError;
use crate::core::models::ModelError;
use crate::core::polymer::PolymerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Invalid interaction parameter: {0}")]
    Parameter(#[from] ParamError),

    #[error("System model error: {0}")]
    Model(#[from] ModelError),

    #[error("Force evaluation failed: {0}")]
    Force(#[from] ForceError),

    #[error("Initial structure generation failed: {0}")]
    Polymer(#[from] PolymerError),

    #[error("Trajectory output failed: {0}")]
    Trajectory(#[from] TrajectoryError),

    #[error(
        "Warmup did not converge after {iterations} iterations (minimum distance {min_distance:.4}, force cap {force_cap:.4})"
    )]
    WarmupDidNotConverge {
        iterations: usize,
        min_distance: f64,
        force_cap: f64,
    },
}
