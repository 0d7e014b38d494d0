//! Trajectory and observable output.
//!
//! Simulation code only talks to the [`traits::TrajectorySink`] interface. Formats are
//! provided by [`vtf`] (structure and coordinates for visualization) and [`observables`]
//! (per-frame scalar quantities as CSV).

pub mod observables;
pub mod traits;
pub mod vtf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("I/O error while writing output: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error while writing observables: {0}")]
    Csv(#[from] csv::Error),
}
