//! # Engine Module
//!
//! The stateful layer that advances a particle system in time.
//!
//! - **Configuration** ([`config`]) - Validated simulation parameters and their builder
//! - **State** ([`state`]) - Particles, topology, box, force cap and simulation clock
//! - **Integration** ([`integrator`]) - Langevin dynamics with a seeded noise source
//! - **Warmup** ([`warmup`]) - Force-capped overlap removal before production
//! - **Analysis** ([`analysis`]) - Minimum distance, kinetic energy, temperature, frames
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine error taxonomy
//!
//! A step is strictly sequential: forces are evaluated into a scratch buffer, committed to
//! the particle store, and only then are velocities and positions updated. A failing force
//! evaluation therefore never leaves a partially updated state behind.

pub mod analysis;
pub mod config;
pub mod error;
pub mod integrator;
pub mod progress;
pub mod state;
pub mod warmup;
