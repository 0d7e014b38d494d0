//! # Workflows Module
//!
//! High-level procedures that drive a complete simulation from a validated
//! [`SimulationConfig`](crate::engine::config::SimulationConfig).
//!
//! - **Polymer Workflow** ([`polymer`]) - Generates bead-spring chains, removes overlaps
//!   with the force-capped warmup and records a production trajectory.
//!
//! Workflows own no I/O of their own. Output goes through a
//! [`TrajectorySink`](crate::core::io::traits::TrajectorySink) supplied by the caller and
//! progress through a [`ProgressReporter`](crate::engine::progress::ProgressReporter).

pub mod polymer;
