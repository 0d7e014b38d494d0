//! # polymd Core Library
//!
//! A compact molecular dynamics engine for coarse-grained bead-spring polymers, built around
//! the Weeks-Chandler-Andersen pair potential, FENE bonds and Langevin dynamics.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that each concern can be tested in
//! isolation.
//!
//! - **[`core`]: The Foundation.** Data models (`ParticleStore`, `BondTable`), pure
//!   interaction physics (`potentials`, `PairInteraction`, `BondedInteraction`), neighbor
//!   enumeration, periodic geometry, chain generation and trajectory output.
//!
//! - **[`engine`]: The Logic Core.** The stateful layer that advances a system in time. It
//!   holds the validated configuration, the `SimulationState`, the `LangevinIntegrator`, the
//!   force-capping `WarmupController` and system analysis.
//!
//! - **[`workflows`]: The Public API.** Complete procedures that tie `engine` and `core`
//!   together, such as building a polymer melt, removing overlaps and running production.

pub mod core;
pub mod engine;
pub mod workflows;
