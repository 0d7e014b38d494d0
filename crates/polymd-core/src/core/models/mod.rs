//! # Core Models Module
//!
//! Data structures that describe the simulated system.
//!
//! - [`particle`] - A single bead with position, velocity, force and mass
//! - [`store`] - Dense, insertion-ordered particle storage
//! - [`bond`] - Bond types and the bond topology table
//! - [`system`] - Particles and bonds owned together
//! - [`snapshot`] - Read-only copies of positions and topology for output
//! - [`ids`] - Identifier types for particles and bond types
//!
//! ```ignore
//! use polymd::core::models::system::ParticleSystem;
//! use polymd::core::forcefield::params::FeneParams;
//!
//! let mut system = ParticleSystem::new();
//! let a = system.particles.add(Point3::new(0.0, 0.0, 0.0));
//! let b = system.particles.add(Point3::new(1.0, 0.0, 0.0));
//! let fene = system.bonds.add_bond_type(FeneParams::new(10.0, 2.0)?);
//! system.add_bond(fene, a, b)?;
//! ```

pub mod bond;
pub mod ids;
pub mod particle;
pub mod snapshot;
pub mod store;
pub mod system;

use ids::{BondTypeId, ParticleId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Particle {0} not found in the system")]
    ParticleNotFound(ParticleId),
    #[error("Invalid bond participants ({a}, {b}): both particles must exist and be distinct")]
    InvalidParticipant { a: ParticleId, b: ParticleId },
    #[error("Bond type {0} has not been registered")]
    BondTypeNotFound(BondTypeId),
    #[error("Particle mass must be finite and positive, got {0}")]
    InvalidMass(f64),
}
