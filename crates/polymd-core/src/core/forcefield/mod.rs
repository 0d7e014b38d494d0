//! # Force Field Module
//!
//! Force and energy evaluation for the two interactions of a bead-spring polymer model.
//!
//! - **Excluded volume** between every pair of beads using the purely repulsive
//!   Weeks-Chandler-Andersen (WCA) potential, optionally limited by a force cap
//! - **Chain connectivity** using finite extensible nonlinear elastic (FENE) bonds
//!
//! ## Key Components
//!
//! - [`params`] - Validated WCA and FENE parameters and the [`params::ForceCap`]
//! - [`potentials`] - Scalar potential and force functions
//! - [`pair`] - Pairwise WCA contributions with force capping
//! - [`bonded`] - FENE bond contributions with over-extension detection
//! - [`evaluator`] - Accumulation of all contributions into per-particle forces
//! - [`term`] - Energy bookkeeping
//!
//! The force cap is an explicit argument of every evaluation. A zero cap disables capping.

pub mod bonded;
pub mod evaluator;
pub mod pair;
pub mod params;
pub(crate) mod potentials;
pub mod term;

use crate::core::models::ModelError;
use crate::core::models::ids::ParticleId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForceError {
    #[error(
        "FENE bond ({a}, {b}) is over-extended: distance {distance:.6} >= maximum extension {max_extension:.6}"
    )]
    BondOverExtended {
        a: ParticleId,
        b: ParticleId,
        distance: f64,
        max_extension: f64,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
}
